//! 证明提交存储操作
//!
//! SaveDraft / Submit 共用同一条 INSERT .. ON CONFLICT .. DO UPDATE 语句：
//! (faculty_id, year) 是冲突目标，冲突更新列表只登记请求里实际出现的槽位，
//! 缺省槽位保留既有存储值。列名来自静态槽位目录，与请求键名无关。

use super::SeaOrmStorage;
use crate::entity::faculty_submissions::{ActiveModel, Column, Entity as FacultySubmissions};
use crate::errors::{FPMSError, Result};
use crate::models::submissions::{
    entities::{ProofSlots, Submission},
    responses::SubmittedFaculty,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

/// 将请求中出现的槽位写入 ActiveModel，并登记为冲突更新列
macro_rules! apply_proof_slots {
    ($slots:expr, $model:expr, $on_conflict:expr; $($field:ident),* $(,)?) => {
        paste::paste! {
            $(
                if let Some(value) = $slots.$field.take() {
                    $model.$field = Set(Some(value));
                    $on_conflict.update_column(Column::[<$field:camel>]);
                }
            )*
        }
    };
}

impl SeaOrmStorage {
    /// 按 (faculty_id, year) upsert 一份提交
    pub async fn upsert_submission_impl(
        &self,
        faculty_id: &str,
        year: i32,
        mut slots: ProofSlots,
        is_draft: bool,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            faculty_id: Set(faculty_id.to_string()),
            year: Set(year),
            is_draft: Set(is_draft),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // 冲突时固定刷新草稿标记与更新时间，created_at 保持首次写入值
        let mut on_conflict = OnConflict::columns([Column::FacultyId, Column::Year]);
        on_conflict.update_columns([Column::IsDraft, Column::UpdatedAt]);

        apply_proof_slots!(slots, model, on_conflict;
            l1_1, l1_2, l1_3, l1_4, l1_5, l1_6,
            l2_1, l2_2, l2_3, l2_4, l2_5, l2_6, l2_7, l2_8, l2_9,
            l3_1, l3_2, l3_3, l3_4, l3_5, l3_6, l3_7, l3_8, l3_9,
            l4_1, l4_2, l4_3, l4_4, l4_5, l4_6,
            l5_1, l5_2, l5_3, l5_4, l5_5,
        );

        FacultySubmissions::insert(model)
            .on_conflict(on_conflict)
            .exec(&self.db)
            .await
            .map_err(|e| FPMSError::database_operation(format!("写入提交失败: {e}")))?;

        self.get_submission_impl(faculty_id, year)
            .await?
            .ok_or_else(|| FPMSError::database_operation("upsert 后未找到提交行"))
    }

    /// 获取某教职工某年度的提交
    pub async fn get_submission_impl(
        &self,
        faculty_id: &str,
        year: i32,
    ) -> Result<Option<Submission>> {
        let result = FacultySubmissions::find()
            .filter(Column::FacultyId.eq(faculty_id))
            .filter(Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(|e| FPMSError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 删除提交，返回是否确有行被删除
    pub async fn delete_submission_impl(&self, faculty_id: &str, year: i32) -> Result<bool> {
        let result = FacultySubmissions::delete_many()
            .filter(Column::FacultyId.eq(faculty_id))
            .filter(Column::Year.eq(year))
            .exec(&self.db)
            .await
            .map_err(|e| FPMSError::database_operation(format!("删除提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出至少有一份终稿提交的教职工（跨年份去重，集合语义）
    pub async fn list_submitted_faculty_impl(&self) -> Result<Vec<SubmittedFaculty>> {
        let rows: Vec<String> = FacultySubmissions::find()
            .select_only()
            .column(Column::FacultyId)
            .filter(Column::IsDraft.eq(false))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| FPMSError::database_operation(format!("查询已提交教职工失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|faculty_id| SubmittedFaculty { faculty_id })
            .collect())
    }
}
