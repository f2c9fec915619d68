//! 评分实体
//!
//! 与提交表同键 (faculty_id, year)，独立存在。不设外键：提交被删除后
//! 评分行可以悬空保留，由上层自行容忍。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub faculty_id: String,
    pub year: i32,
    pub scored_by: String,
    // A1 教学 Teaching & Learning
    pub a1_1: Option<i32>,
    pub a1_2: Option<i32>,
    pub a1_3: Option<i32>,
    pub a1_4: Option<i32>,
    pub a1_5: Option<i32>,
    pub a1_6: Option<i32>,
    // A2 科研 Research & Consultancy
    pub a2_1: Option<i32>,
    pub a2_2: Option<i32>,
    pub a2_3: Option<i32>,
    pub a2_4: Option<i32>,
    pub a2_5: Option<i32>,
    pub a2_6: Option<i32>,
    pub a2_7: Option<i32>,
    pub a2_8: Option<i32>,
    pub a2_9: Option<i32>,
    // A3 专业发展 Professional Development
    pub a3_1: Option<i32>,
    pub a3_2: Option<i32>,
    pub a3_3: Option<i32>,
    pub a3_4: Option<i32>,
    pub a3_5: Option<i32>,
    pub a3_6: Option<i32>,
    pub a3_7: Option<i32>,
    pub a3_8: Option<i32>,
    pub a3_9: Option<i32>,
    // A4 学院贡献 Contribution to Institute
    pub a4_1: Option<i32>,
    pub a4_2: Option<i32>,
    pub a4_3: Option<i32>,
    pub a4_4: Option<i32>,
    pub a4_5: Option<i32>,
    pub a4_6: Option<i32>,
    // A5 学生发展 Student Development
    pub a5_1: Option<i32>,
    pub a5_2: Option<i32>,
    pub a5_3: Option<i32>,
    pub a5_4: Option<i32>,
    pub a5_5: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_score_sheet(self) -> crate::models::scores::entities::ScoreSheet {
        use crate::models::scores::entities::{ScoreSheet, ScoreSlots};
        use chrono::{DateTime, Utc};

        ScoreSheet {
            faculty_id: self.faculty_id,
            year: self.year,
            scored_by: self.scored_by,
            slots: ScoreSlots {
                a1_1: self.a1_1,
                a1_2: self.a1_2,
                a1_3: self.a1_3,
                a1_4: self.a1_4,
                a1_5: self.a1_5,
                a1_6: self.a1_6,
                a2_1: self.a2_1,
                a2_2: self.a2_2,
                a2_3: self.a2_3,
                a2_4: self.a2_4,
                a2_5: self.a2_5,
                a2_6: self.a2_6,
                a2_7: self.a2_7,
                a2_8: self.a2_8,
                a2_9: self.a2_9,
                a3_1: self.a3_1,
                a3_2: self.a3_2,
                a3_3: self.a3_3,
                a3_4: self.a3_4,
                a3_5: self.a3_5,
                a3_6: self.a3_6,
                a3_7: self.a3_7,
                a3_8: self.a3_8,
                a3_9: self.a3_9,
                a4_1: self.a4_1,
                a4_2: self.a4_2,
                a4_3: self.a4_3,
                a4_4: self.a4_4,
                a4_5: self.a4_5,
                a4_6: self.a4_6,
                a5_1: self.a5_1,
                a5_2: self.a5_2,
                a5_3: self.a5_3,
                a5_4: self.a5_4,
                a5_5: self.a5_5,
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
