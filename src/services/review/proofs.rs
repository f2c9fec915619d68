use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ReviewService;

/// 评审视角读取证明提交
///
/// 与教职工侧 GetSubmission 完全同一读取契约（含草稿行），
/// 评审列表侧已按终稿过滤，这里不再重复过滤。
pub async fn handle_get_proof(
    service: &ReviewService,
    faculty_id: &str,
    year: i32,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_submission(faculty_id, year).await {
        Ok(Some(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "Fetch successful")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "No proof found",
        ))),
        Err(e) => {
            tracing::error!("Proof fetch failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching proof",
                )),
            )
        }
    }
}
