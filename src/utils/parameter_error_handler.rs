//! 请求参数错误处理
//!
//! JSON 请求体与查询参数解析失败时统一返回 400 + ApiResponse 外壳，
//! 校验在任何存储访问之前完成。

use actix_web::error::{Error, InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        format!("Invalid request body: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器（如非整数的 year）
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        format!("Invalid query parameter: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}
