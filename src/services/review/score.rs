use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::scores::requests::SubmitScoresRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_year;

use super::ReviewService;

/// 写入评分
///
/// 与提交表相同的冲突键 upsert。不校验目标提交是否存在：评分行
/// 可以先于提交出现，也可以在提交被删除后悬空保留。逐项分值在
/// 触达存储前校验 0-100 区间。
pub async fn handle_submit_scores(
    service: &ReviewService,
    scores_request: SubmitScoresRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_year(scores_request.year) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Err(msg) = scores_request.slots.validate_bounds() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage
        .upsert_scores(
            &scores_request.faculty_id,
            scores_request.year,
            &scores_request.scored_by,
            scores_request.slots,
        )
        .await
    {
        Ok(score_sheet) => {
            tracing::info!(
                "Scores upserted: faculty={} year={} by={}",
                score_sheet.faculty_id,
                score_sheet.year,
                score_sheet.scored_by
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(score_sheet, "Scores submitted successfully")))
        }
        Err(e) => {
            tracing::error!("Score upsert failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error submitting scores",
                )),
            )
        }
    }
}

/// 读取某教职工某年度的评分行
pub async fn handle_get_scores(
    service: &ReviewService,
    faculty_id: &str,
    year: i32,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_scores(faculty_id, year).await {
        Ok(Some(score_sheet)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(score_sheet, "Fetch successful")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScoreNotFound,
            "No scores found",
        ))),
        Err(e) => {
            tracing::error!("Scores fetch failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error fetching scores",
                )),
            )
        }
    }
}
