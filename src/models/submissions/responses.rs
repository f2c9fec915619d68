use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 已提交终稿的教职工条目（跨年份去重后的集合元素）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/submission.ts")]
pub struct SubmittedFaculty {
    pub faculty_id: String,
}
