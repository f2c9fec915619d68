pub mod login;
pub mod reset_password;
pub mod signup;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::{LoginRequest, ResetPasswordRequest, SignupRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    // 登录验证
    pub async fn login(
        &self,
        role: AccountRole,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, role, login_request, request).await
    }

    // 账号注册
    pub async fn signup(
        &self,
        role: AccountRole,
        signup_request: SignupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        signup::handle_signup(self, role, signup_request, request).await
    }

    // 通过安全码重置密码
    pub async fn reset_password(
        &self,
        role: AccountRole,
        reset_request: ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reset_password::handle_reset_password(self, role, reset_request, request).await
    }
}
