pub mod error_code;
pub mod response;

/// 程序启动时间，注入到应用数据中供健康检查使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
