//! /api/faculty 路由

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::submissions::requests::{SubmitProofRequest, YearQuery};
use crate::routes::auth::{faculty_login, faculty_reset_password, faculty_signup};
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 提交终稿
pub async fn submit_proof(
    req: HttpRequest,
    body: web::Json<SubmitProofRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.submit(body.into_inner(), &req).await
}

// 保存草稿
pub async fn save_draft(
    req: HttpRequest,
    body: web::Json<SubmitProofRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.save_draft(body.into_inner(), &req).await
}

// 获取本人提交（恢复编辑）
pub async fn get_proof_submission(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<YearQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&path.into_inner(), query.year, &req)
        .await
}

// 删除提交
pub async fn delete_submission(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<YearQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .delete_submission(&path.into_inner(), query.year, &req)
        .await
}

// 配置路由
pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/faculty")
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
            )
            .route("/submit", web::post().to(submit_proof))
            .route("/save-draft", web::post().to(save_draft))
            .route("/proof/{faculty_id}", web::get().to(get_proof_submission))
            .route(
                "/submission/{faculty_id}",
                web::delete().to(delete_submission),
            ),
    );
}
