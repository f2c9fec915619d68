use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_year;

use super::SubmissionService;

/// 删除提交
///
/// 目标行不存在时同样返回 200：删除是幂等操作，重复点击删除
/// 不应报错。响应消息区分两种情况，便于排查。
pub async fn handle_delete(
    service: &SubmissionService,
    faculty_id: &str,
    year: i32,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_year(year) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.delete_submission(faculty_id, year).await {
        Ok(true) => {
            tracing::info!("Submission deleted: faculty={} year={}", faculty_id, year);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Submission deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("No submission to delete"))),
        Err(e) => {
            tracing::error!("Submission delete failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error deleting submission",
                )),
            )
        }
    }
}
