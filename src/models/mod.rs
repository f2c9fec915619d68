pub mod accounts;
pub mod common;
pub mod scores;
pub mod submissions;

pub use common::AppStartTime;
pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;
