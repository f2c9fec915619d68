use super::entities::ScoreSlots;
use serde::Deserialize;
use ts_rs::TS;

// 评分提交请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/score.ts")]
pub struct SubmitScoresRequest {
    pub faculty_id: String,
    pub year: i32,
    /// 评分管理员的标识，随行存储
    pub scored_by: String,
    #[serde(flatten)]
    #[ts(flatten)]
    pub slots: ScoreSlots,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_score_body_parses() {
        let req: SubmitScoresRequest = serde_json::from_str(
            r#"{"faculty_id": "VIT0021", "year": 2024, "scored_by": "ADMIN1", "a1_1": 85}"#,
        )
        .unwrap();
        assert_eq!(req.scored_by, "ADMIN1");
        assert_eq!(req.slots.a1_1, Some(85));
        assert_eq!(req.slots.a1_2, None);
    }
}
