pub mod delete;
pub mod get;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::SubmitProofRequest;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 保存草稿（is_draft = true，可反复调用）
    pub async fn save_draft(
        &self,
        submit_request: SubmitProofRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save::handle_save(self, submit_request, true, request).await
    }

    // 提交终稿（is_draft 强制置 false）
    pub async fn submit(
        &self,
        submit_request: SubmitProofRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save::handle_save(self, submit_request, false, request).await
    }

    // 获取提交（恢复编辑或评审读取）
    pub async fn get_submission(
        &self,
        faculty_id: &str,
        year: i32,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::handle_get(self, faculty_id, year, request).await
    }

    // 删除提交
    pub async fn delete_submission(
        &self,
        faculty_id: &str,
        year: i32,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, faculty_id, year, request).await
    }
}
