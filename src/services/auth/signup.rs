use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::{NewAccount, SignupRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_secret;
use crate::utils::validate::{validate_email, validate_login_id};

use super::AuthService;

pub async fn handle_signup(
    service: &AuthService,
    role: AccountRole,
    signup_request: SignupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 校验登录 ID 与邮箱格式
    if let Err(msg) = validate_login_id(&signup_request.login_id) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Err(msg) = validate_email(&signup_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 检查登录 ID 是否已存在
    match storage
        .get_account_by_login_id(role, &signup_request.login_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AccountAlreadyExists,
                format!("{} ID already exists", role_label(role)),
            )));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Signup query failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            );
        }
    }

    // 3. 哈希密码与安全码
    let password_hash = match hash_secret(&signup_request.password) {
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

    let security_code_hash = match hash_secret(&signup_request.security_code) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Security code hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            );
        }
    };

    // 4. 创建账号（院系字段仅教职工保留）
    let new_account = NewAccount {
        login_id: signup_request.login_id,
        password_hash,
        security_code_hash,
        full_name: signup_request.full_name,
        department: match role {
            AccountRole::Faculty => signup_request.department,
            AccountRole::Admin => None,
        },
        email: signup_request.email,
    };

    match storage.create_account(role, new_account).await {
        Ok(account) => {
            tracing::info!("{} account created: {}", role, account.login_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                account,
                format!("{} account created successfully", role_label(role)),
            )))
        }
        Err(e) => {
            tracing::error!("Account creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Server error",
                )),
            )
        }
    }
}

fn role_label(role: AccountRole) -> &'static str {
    match role {
        AccountRole::Faculty => "Faculty",
        AccountRole::Admin => "Admin",
    }
}
