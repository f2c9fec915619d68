//! 评分存储操作
//!
//! 与提交表同样的冲突键 upsert：scored_by 每次覆盖为最近一次评分的
//! 管理员，缺省的评分槽位保留既有存储值。不校验目标提交是否存在。

use super::SeaOrmStorage;
use crate::entity::admin_scores::{ActiveModel, Column, Entity as AdminScores};
use crate::errors::{FPMSError, Result};
use crate::models::scores::entities::{ScoreSheet, ScoreSlots};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

/// 将请求中出现的评分槽位写入 ActiveModel，并登记为冲突更新列
macro_rules! apply_score_slots {
    ($slots:expr, $model:expr, $on_conflict:expr; $($field:ident),* $(,)?) => {
        paste::paste! {
            $(
                if let Some(value) = $slots.$field {
                    $model.$field = Set(Some(value));
                    $on_conflict.update_column(Column::[<$field:camel>]);
                }
            )*
        }
    };
}

impl SeaOrmStorage {
    /// 按 (faculty_id, year) upsert 一份评分
    pub async fn upsert_scores_impl(
        &self,
        faculty_id: &str,
        year: i32,
        scored_by: &str,
        slots: ScoreSlots,
    ) -> Result<ScoreSheet> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            faculty_id: Set(faculty_id.to_string()),
            year: Set(year),
            scored_by: Set(scored_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let mut on_conflict = OnConflict::columns([Column::FacultyId, Column::Year]);
        on_conflict.update_columns([Column::ScoredBy, Column::UpdatedAt]);

        apply_score_slots!(slots, model, on_conflict;
            a1_1, a1_2, a1_3, a1_4, a1_5, a1_6,
            a2_1, a2_2, a2_3, a2_4, a2_5, a2_6, a2_7, a2_8, a2_9,
            a3_1, a3_2, a3_3, a3_4, a3_5, a3_6, a3_7, a3_8, a3_9,
            a4_1, a4_2, a4_3, a4_4, a4_5, a4_6,
            a5_1, a5_2, a5_3, a5_4, a5_5,
        );

        AdminScores::insert(model)
            .on_conflict(on_conflict)
            .exec(&self.db)
            .await
            .map_err(|e| FPMSError::database_operation(format!("写入评分失败: {e}")))?;

        self.get_scores_impl(faculty_id, year)
            .await?
            .ok_or_else(|| FPMSError::database_operation("upsert 后未找到评分行"))
    }

    /// 获取某教职工某年度的评分行
    pub async fn get_scores_impl(&self, faculty_id: &str, year: i32) -> Result<Option<ScoreSheet>> {
        let result = AdminScores::find()
            .filter(Column::FacultyId.eq(faculty_id))
            .filter(Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(|e| FPMSError::database_operation(format!("查询评分失败: {e}")))?;

        Ok(result.map(|m| m.into_score_sheet()))
    }
}
