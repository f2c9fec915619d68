use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 固定的 35 个证明链接槽位
///
/// 槽位目录是静态已知的列集合，请求体中未识别的键在反序列化时被忽略，
/// 客户端提供的键名不会以任何形式进入生成的 SQL。
/// 板块划分：L1 教学(6) / L2 科研(9) / L3 专业发展(9) / L4 学院贡献(6) / L5 学生发展(5)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/submission.ts")]
pub struct ProofSlots {
    // L1 Teaching & Learning
    pub l1_1: Option<String>,
    pub l1_2: Option<String>,
    pub l1_3: Option<String>,
    pub l1_4: Option<String>,
    pub l1_5: Option<String>,
    pub l1_6: Option<String>,
    // L2 Research & Consultancy
    pub l2_1: Option<String>,
    pub l2_2: Option<String>,
    pub l2_3: Option<String>,
    pub l2_4: Option<String>,
    pub l2_5: Option<String>,
    pub l2_6: Option<String>,
    pub l2_7: Option<String>,
    pub l2_8: Option<String>,
    pub l2_9: Option<String>,
    // L3 Professional Development
    pub l3_1: Option<String>,
    pub l3_2: Option<String>,
    pub l3_3: Option<String>,
    pub l3_4: Option<String>,
    pub l3_5: Option<String>,
    pub l3_6: Option<String>,
    pub l3_7: Option<String>,
    pub l3_8: Option<String>,
    pub l3_9: Option<String>,
    // L4 Contribution to Institute
    pub l4_1: Option<String>,
    pub l4_2: Option<String>,
    pub l4_3: Option<String>,
    pub l4_4: Option<String>,
    pub l4_5: Option<String>,
    pub l4_6: Option<String>,
    // L5 Student Development
    pub l5_1: Option<String>,
    pub l5_2: Option<String>,
    pub l5_3: Option<String>,
    pub l5_4: Option<String>,
    pub l5_5: Option<String>,
}

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub faculty_id: String,
    pub year: i32,
    /// true = 草稿，可继续编辑；false = 终稿，进入评审视野
    pub is_draft: bool,
    #[serde(flatten)]
    #[ts(flatten)]
    pub slots: ProofSlots,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_slot_names_are_ignored() {
        // 客户端自造的键名不进入槽位目录
        let slots: ProofSlots = serde_json::from_str(
            r#"{"l1_1": "http://x", "evil_column": "drop table", "l9_9": "nope"}"#,
        )
        .unwrap();
        assert_eq!(slots.l1_1.as_deref(), Some("http://x"));
        assert_eq!(slots.l1_2, None);
    }

    #[test]
    fn test_submission_serializes_slots_flat() {
        let submission = Submission {
            faculty_id: "VIT0021".to_string(),
            year: 2024,
            is_draft: true,
            slots: ProofSlots {
                l2_3: Some("http://y".to_string()),
                ..Default::default()
            },
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&submission).unwrap();
        // flatten 后槽位直接出现在顶层，与旧版行结构一致
        assert_eq!(json["l2_3"], "http://y");
        assert_eq!(json["is_draft"], true);
    }
}
