//! /api/auth 路由
//!
//! 旧版客户端同时使用 /api/auth/<role>/* 与 /api/<role>/* 两套凭据
//! 路径，这里保留 auth 作用域的一套，faculty/admin 作用域各自再挂
//! 一份别名（见同目录其余模块），处理逻辑全部收敛到 AuthService。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::{LoginRequest, ResetPasswordRequest, SignupRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn faculty_login(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(AccountRole::Faculty, body.into_inner(), &req)
        .await
}

pub async fn admin_login(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(AccountRole::Admin, body.into_inner(), &req)
        .await
}

pub async fn faculty_signup(
    req: HttpRequest,
    body: web::Json<SignupRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .signup(AccountRole::Faculty, body.into_inner(), &req)
        .await
}

pub async fn admin_signup(
    req: HttpRequest,
    body: web::Json<SignupRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .signup(AccountRole::Admin, body.into_inner(), &req)
        .await
}

pub async fn faculty_reset_password(
    req: HttpRequest,
    body: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .reset_password(AccountRole::Faculty, body.into_inner(), &req)
        .await
}

pub async fn admin_reset_password(
    req: HttpRequest,
    body: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .reset_password(AccountRole::Admin, body.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::scope("/faculty")
                    .service(
                        web::resource("/login")
                            .wrap(RateLimit::login())
                            .route(web::post().to(faculty_login)),
                    )
                    .service(
                        web::resource("/signup")
                            .wrap(RateLimit::signup())
                            .route(web::post().to(faculty_signup)),
                    )
                    .service(
                        web::resource("/reset-password")
                            .wrap(RateLimit::reset_password())
                            .route(web::post().to(faculty_reset_password)),
                    ),
            )
            .service(
                web::scope("/admin")
                    .service(
                        web::resource("/login")
                            .wrap(RateLimit::login())
                            .route(web::post().to(admin_login)),
                    )
                    .service(
                        web::resource("/signup")
                            .wrap(RateLimit::signup())
                            .route(web::post().to(admin_signup)),
                    )
                    .service(
                        web::resource("/reset-password")
                            .wrap(RateLimit::reset_password())
                            .route(web::post().to(admin_reset_password)),
                    ),
            ),
    );
}
