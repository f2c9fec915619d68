//! 系统路由：健康检查

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime};

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub system_name: String,
    pub version: String,
    pub uptime_seconds: i64,
}

// 健康检查
pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let uptime_seconds = req
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    let response = HealthResponse {
        status: "ok".to_string(),
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Faculty Performance API Running")))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health));
}
