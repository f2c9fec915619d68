//! 证明提交实体
//!
//! 每位教职工每年最多一行，(faculty_id, year) 上有唯一索引。
//! 35 个命名链接槽位按五个评估板块分组，列目录固定，不随请求变化。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub faculty_id: String,
    pub year: i32,
    pub is_draft: bool,
    // L1 教学 Teaching & Learning
    #[sea_orm(column_type = "Text", nullable)]
    pub l1_1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l1_2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l1_3: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l1_4: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l1_5: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l1_6: Option<String>,
    // L2 科研 Research & Consultancy
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_3: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_4: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_5: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_6: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_7: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_8: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l2_9: Option<String>,
    // L3 专业发展 Professional Development
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_3: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_4: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_5: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_6: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_7: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_8: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l3_9: Option<String>,
    // L4 学院贡献 Contribution to Institute
    #[sea_orm(column_type = "Text", nullable)]
    pub l4_1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l4_2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l4_3: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l4_4: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l4_5: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l4_6: Option<String>,
    // L5 学生发展 Student Development
    #[sea_orm(column_type = "Text", nullable)]
    pub l5_1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l5_2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l5_3: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l5_4: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub l5_5: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{ProofSlots, Submission};
        use chrono::{DateTime, Utc};

        Submission {
            faculty_id: self.faculty_id,
            year: self.year,
            is_draft: self.is_draft,
            slots: ProofSlots {
                l1_1: self.l1_1,
                l1_2: self.l1_2,
                l1_3: self.l1_3,
                l1_4: self.l1_4,
                l1_5: self.l1_5,
                l1_6: self.l1_6,
                l2_1: self.l2_1,
                l2_2: self.l2_2,
                l2_3: self.l2_3,
                l2_4: self.l2_4,
                l2_5: self.l2_5,
                l2_6: self.l2_6,
                l2_7: self.l2_7,
                l2_8: self.l2_8,
                l2_9: self.l2_9,
                l3_1: self.l3_1,
                l3_2: self.l3_2,
                l3_3: self.l3_3,
                l3_4: self.l3_4,
                l3_5: self.l3_5,
                l3_6: self.l3_6,
                l3_7: self.l3_7,
                l3_8: self.l3_8,
                l3_9: self.l3_9,
                l4_1: self.l4_1,
                l4_2: self.l4_2,
                l4_3: self.l4_3,
                l4_4: self.l4_4,
                l4_5: self.l4_5,
                l4_6: self.l4_6,
                l5_1: self.l5_1,
                l5_2: self.l5_2,
                l5_3: self.l5_3,
                l5_4: self.l5_4,
                l5_5: self.l5_5,
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
