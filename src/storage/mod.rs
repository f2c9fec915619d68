use std::sync::Arc;

use crate::models::{
    accounts::{
        entities::{Account, AccountRole},
        requests::NewAccount,
    },
    scores::entities::{ScoreSheet, ScoreSlots},
    submissions::{
        entities::{ProofSlots, Submission},
        responses::SubmittedFaculty,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号（密码与安全码均已哈希）
    async fn create_account(&self, role: AccountRole, account: NewAccount) -> Result<Account>;
    // 通过登录 ID 获取账号
    async fn get_account_by_login_id(
        &self,
        role: AccountRole,
        login_id: &str,
    ) -> Result<Option<Account>>;
    // 重置密码哈希
    async fn update_account_password(
        &self,
        role: AccountRole,
        login_id: &str,
        password_hash: &str,
    ) -> Result<bool>;
    // 统计账号数量
    async fn count_accounts(&self, role: AccountRole) -> Result<u64>;

    /// 提交管理方法
    // 按 (faculty_id, year) 冲突键 upsert，一次写入即原子生效；
    // 请求中缺省的槽位保留既有存储值（列级部分更新）
    async fn upsert_submission(
        &self,
        faculty_id: &str,
        year: i32,
        slots: ProofSlots,
        is_draft: bool,
    ) -> Result<Submission>;
    // 获取某教职工某年度的提交
    async fn get_submission(&self, faculty_id: &str, year: i32) -> Result<Option<Submission>>;
    // 删除提交，返回是否确有行被删除
    async fn delete_submission(&self, faculty_id: &str, year: i32) -> Result<bool>;
    // 列出至少有一份终稿提交的教职工（跨年份去重）
    async fn list_submitted_faculty(&self) -> Result<Vec<SubmittedFaculty>>;

    /// 评分管理方法
    // 按 (faculty_id, year) 冲突键 upsert 评分行
    async fn upsert_scores(
        &self,
        faculty_id: &str,
        year: i32,
        scored_by: &str,
        slots: ScoreSlots,
    ) -> Result<ScoreSheet>;
    // 获取某教职工某年度的评分行
    async fn get_scores(&self, faculty_id: &str, year: i32) -> Result<Option<ScoreSheet>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
