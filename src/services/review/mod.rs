pub mod list;
pub mod proofs;
pub mod score;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scores::requests::SubmitScoresRequest;
use crate::storage::Storage;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出已提交终稿的教职工
    pub async fn list_submitted_faculty(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_submitted_faculty(self, request).await
    }

    // 评审视角获取某教职工的证明提交
    pub async fn get_proof_for_scoring(
        &self,
        faculty_id: &str,
        year: i32,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        proofs::handle_get_proof(self, faculty_id, year, request).await
    }

    // 写入评分
    pub async fn submit_scores(
        &self,
        scores_request: SubmitScoresRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        score::handle_submit_scores(self, scores_request, request).await
    }

    // 读取已存评分
    pub async fn get_scores(
        &self,
        faculty_id: &str,
        year: i32,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        score::handle_get_scores(self, faculty_id, year, request).await
    }
}
