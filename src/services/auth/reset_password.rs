use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::ResetPasswordRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_secret, verify_secret};

use super::AuthService;

/// 未知 ID 与安全码错误同样不可区分
const INVALID_ID_OR_CODE: &str = "Invalid ID or security code";

pub async fn handle_reset_password(
    service: &AuthService,
    role: AccountRole,
    reset_request: ResetPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 获取账号
    let account = match storage
        .get_account_by_login_id(role, &reset_request.login_id)
        .await
    {
        Ok(Some(account)) => account,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                INVALID_ID_OR_CODE,
            )));
        }
        Err(e) => {
            tracing::error!("Password reset query failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            );
        }
    };

    // 2. 校验安全码
    if !verify_secret(&reset_request.security_code, &account.security_code_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            INVALID_ID_OR_CODE,
        )));
    }

    // 3. 覆盖密码哈希
    let password_hash = match hash_secret(&reset_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            );
        }
    };

    match storage
        .update_account_password(role, &account.login_id, &password_hash)
        .await
    {
        Ok(true) => {
            tracing::info!("{} {} reset password", role, account.login_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password reset successful")))
        }
        Ok(false) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Server error",
            )),
        ),
        Err(e) => {
            tracing::error!("Password reset failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            )
        }
    }
}
