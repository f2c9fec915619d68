//! /api/admin 路由

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::scores::requests::SubmitScoresRequest;
use crate::models::submissions::requests::YearQuery;
use crate::routes::auth::admin_login;
use crate::services::ReviewService;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// 列出已提交终稿的教职工
pub async fn list_faculty_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_submitted_faculty(&req).await
}

// 评审视角获取证明提交
pub async fn get_proof_by_faculty(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<YearQuery>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .get_proof_for_scoring(&path.into_inner(), query.year, &req)
        .await
}

// 写入评分
pub async fn submit_scores(
    req: HttpRequest,
    body: web::Json<SubmitScoresRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.submit_scores(body.into_inner(), &req).await
}

// 读取已存评分
pub async fn get_scores(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<YearQuery>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .get_scores(&path.into_inner(), query.year, &req)
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(admin_login)),
            )
            .route(
                "/faculty-submissions",
                web::get().to(list_faculty_submissions),
            )
            .route("/proofs/{faculty_id}", web::get().to(get_proof_by_faculty))
            .route("/submit-score", web::post().to(submit_scores))
            .route("/scores/{faculty_id}", web::get().to(get_scores)),
    );
}
