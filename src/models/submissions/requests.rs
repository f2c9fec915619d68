use super::entities::ProofSlots;
use serde::Deserialize;
use ts_rs::TS;

// 证明提交/存草稿请求（来自HTTP请求）
// 旧版客户端把槽位平铺在请求体顶层，flatten 保持同一外形
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/submission.ts")]
pub struct SubmitProofRequest {
    pub faculty_id: String,
    pub year: i32,
    #[serde(flatten)]
    #[ts(flatten)]
    pub slots: ProofSlots,
}

// 年份查询参数
#[derive(Debug, Clone, Copy, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/submission.ts")]
pub struct YearQuery {
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_body_parses_into_slots() {
        let req: SubmitProofRequest = serde_json::from_str(
            r#"{"faculty_id": "VIT0021", "year": 2024, "l1_1": "http://x", "l5_5": "http://z"}"#,
        )
        .unwrap();
        assert_eq!(req.faculty_id, "VIT0021");
        assert_eq!(req.year, 2024);
        assert_eq!(req.slots.l1_1.as_deref(), Some("http://x"));
        assert_eq!(req.slots.l5_5.as_deref(), Some("http://z"));
        assert_eq!(req.slots.l3_4, None);
    }

    #[test]
    fn test_non_integer_year_is_rejected() {
        let result = serde_json::from_str::<SubmitProofRequest>(
            r#"{"faculty_id": "VIT0021", "year": "twenty24"}"#,
        );
        assert!(result.is_err());
    }
}
