use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 每项评分允许的最小值
pub const SCORE_MIN: i32 = 0;
/// 每项评分允许的最大值
pub const SCORE_MAX: i32 = 100;

/// 固定的 35 个评分槽位，与证明链接槽位一一对应
///
/// 与 ProofSlots 同理，槽位目录静态已知，未识别的键被忽略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/score.ts")]
pub struct ScoreSlots {
    // A1 Teaching & Learning
    pub a1_1: Option<i32>,
    pub a1_2: Option<i32>,
    pub a1_3: Option<i32>,
    pub a1_4: Option<i32>,
    pub a1_5: Option<i32>,
    pub a1_6: Option<i32>,
    // A2 Research & Consultancy
    pub a2_1: Option<i32>,
    pub a2_2: Option<i32>,
    pub a2_3: Option<i32>,
    pub a2_4: Option<i32>,
    pub a2_5: Option<i32>,
    pub a2_6: Option<i32>,
    pub a2_7: Option<i32>,
    pub a2_8: Option<i32>,
    pub a2_9: Option<i32>,
    // A3 Professional Development
    pub a3_1: Option<i32>,
    pub a3_2: Option<i32>,
    pub a3_3: Option<i32>,
    pub a3_4: Option<i32>,
    pub a3_5: Option<i32>,
    pub a3_6: Option<i32>,
    pub a3_7: Option<i32>,
    pub a3_8: Option<i32>,
    pub a3_9: Option<i32>,
    // A4 Contribution to Institute
    pub a4_1: Option<i32>,
    pub a4_2: Option<i32>,
    pub a4_3: Option<i32>,
    pub a4_4: Option<i32>,
    pub a4_5: Option<i32>,
    pub a4_6: Option<i32>,
    // A5 Student Development
    pub a5_1: Option<i32>,
    pub a5_2: Option<i32>,
    pub a5_3: Option<i32>,
    pub a5_4: Option<i32>,
    pub a5_5: Option<i32>,
}

impl ScoreSlots {
    /// 以 (槽位名, 值) 形式遍历全部 35 个评分槽位
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<i32>)> + '_ {
        [
            ("a1_1", self.a1_1),
            ("a1_2", self.a1_2),
            ("a1_3", self.a1_3),
            ("a1_4", self.a1_4),
            ("a1_5", self.a1_5),
            ("a1_6", self.a1_6),
            ("a2_1", self.a2_1),
            ("a2_2", self.a2_2),
            ("a2_3", self.a2_3),
            ("a2_4", self.a2_4),
            ("a2_5", self.a2_5),
            ("a2_6", self.a2_6),
            ("a2_7", self.a2_7),
            ("a2_8", self.a2_8),
            ("a2_9", self.a2_9),
            ("a3_1", self.a3_1),
            ("a3_2", self.a3_2),
            ("a3_3", self.a3_3),
            ("a3_4", self.a3_4),
            ("a3_5", self.a3_5),
            ("a3_6", self.a3_6),
            ("a3_7", self.a3_7),
            ("a3_8", self.a3_8),
            ("a3_9", self.a3_9),
            ("a4_1", self.a4_1),
            ("a4_2", self.a4_2),
            ("a4_3", self.a4_3),
            ("a4_4", self.a4_4),
            ("a4_5", self.a4_5),
            ("a4_6", self.a4_6),
            ("a5_1", self.a5_1),
            ("a5_2", self.a5_2),
            ("a5_3", self.a5_3),
            ("a5_4", self.a5_4),
            ("a5_5", self.a5_5),
        ]
        .into_iter()
    }

    /// 校验所有给定的评分是否落在 [SCORE_MIN, SCORE_MAX] 区间
    pub fn validate_bounds(&self) -> Result<(), String> {
        for (name, value) in self.iter() {
            if let Some(v) = value
                && !(SCORE_MIN..=SCORE_MAX).contains(&v)
            {
                return Err(format!(
                    "Score '{name}' must be between {SCORE_MIN} and {SCORE_MAX}, got {v}"
                ));
            }
        }
        Ok(())
    }
}

// 评分表实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/score.ts")]
pub struct ScoreSheet {
    pub faculty_id: String,
    pub year: i32,
    /// 最近一次写入评分的管理员
    pub scored_by: String,
    #[serde(flatten)]
    #[ts(flatten)]
    pub slots: ScoreSlots,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_catalogue_has_35_entries() {
        let slots = ScoreSlots::default();
        assert_eq!(slots.iter().count(), 35);
    }

    #[test]
    fn test_validate_bounds_accepts_range() {
        let slots = ScoreSlots {
            a1_1: Some(0),
            a2_9: Some(100),
            a5_5: Some(85),
            ..Default::default()
        };
        assert!(slots.validate_bounds().is_ok());
    }

    #[test]
    fn test_validate_bounds_rejects_out_of_range() {
        let too_high = ScoreSlots {
            a1_1: Some(101),
            ..Default::default()
        };
        let err = too_high.validate_bounds().unwrap_err();
        assert!(err.contains("a1_1"));

        let negative = ScoreSlots {
            a3_4: Some(-1),
            ..Default::default()
        };
        assert!(negative.validate_bounds().is_err());
    }

    #[test]
    fn test_empty_slots_are_valid() {
        assert!(ScoreSlots::default().validate_bounds().is_ok());
    }
}
