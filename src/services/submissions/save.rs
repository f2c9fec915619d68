use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::submissions::requests::SubmitProofRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_year;

use super::SubmissionService;

/// SaveDraft 与 Submit 的共同实现
///
/// 二者只差 is_draft 的取值，共用同一条冲突键 upsert：请求里出现的
/// 槽位覆盖写入，缺省槽位保留既有存储值。对已是终稿的行再次调用
/// Submit 会逐列覆盖（last-write-wins），编辑拦截由前端负责。
pub async fn handle_save(
    service: &SubmissionService,
    submit_request: SubmitProofRequest,
    is_draft: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 年份合理性校验，失败则不触达存储
    if let Err(msg) = validate_year(submit_request.year) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 冲突键 upsert
    match storage
        .upsert_submission(
            &submit_request.faculty_id,
            submit_request.year,
            submit_request.slots,
            is_draft,
        )
        .await
    {
        Ok(submission) => {
            tracing::info!(
                "Submission upserted: faculty={} year={} draft={}",
                submission.faculty_id,
                submission.year,
                submission.is_draft
            );
            let message = if is_draft {
                "Draft saved successfully"
            } else {
                "Proof submission successful"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, message)))
        }
        Err(e) => {
            tracing::error!("Submission upsert failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error submitting proof",
                )),
            )
        }
    }
}
