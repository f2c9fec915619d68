use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::LoginRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::verify_secret;

use super::AuthService;

/// 未知 ID 与密码错误必须得到同一种响应，
/// 否则 401/404 的差异会泄露哪些登录 ID 已注册。
const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn handle_login(
    service: &AuthService,
    role: AccountRole,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 根据登录 ID 获取账号
    match storage
        .get_account_by_login_id(role, &login_request.login_id)
        .await
    {
        Ok(Some(account)) => {
            // 2. 验证密码
            if verify_secret(&login_request.password, &account.password_hash) {
                tracing::info!("{} {} logged in successfully", role, account.login_id);
                Ok(HttpResponse::Ok().json(ApiResponse::success(account, "Login successful")))
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    INVALID_CREDENTIALS,
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            INVALID_CREDENTIALS,
        ))),
        Err(e) => {
            tracing::error!("Login query failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            )
        }
    }
}
