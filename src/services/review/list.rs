use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ReviewService;

/// 列出至少有一份终稿提交的教职工
///
/// 集合语义：同一教职工多个年度的终稿收敛为一个条目，
/// 不按年份区分。草稿行不会使教职工出现在结果里。
pub async fn handle_list_submitted_faculty(
    service: &ReviewService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submitted_faculty().await {
        Ok(faculty_list) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(faculty_list, "Fetch successful")))
        }
        Err(e) => {
            tracing::error!("Faculty list fetch failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching faculty list",
                )),
            )
        }
    }
}
