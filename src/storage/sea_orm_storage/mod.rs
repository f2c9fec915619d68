//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounts;
mod scores;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{FPMSError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（从全局配置读取连接参数）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_url(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 以显式连接参数创建存储实例
    ///
    /// 存储客户端不再是进程级单例：调用方构造后注入各服务，
    /// 测试可直接指向内存库。
    pub async fn new_with_url(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| FPMSError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| FPMSError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        // 内存库只存在于单个连接里，池必须收敛到一条连接
        let max_connections = if in_memory { 1 } else { pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(opt)
            .await
            .map_err(|e| FPMSError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| FPMSError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(FPMSError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_account(&self, role: AccountRole, account: NewAccount) -> Result<Account> {
        self.create_account_impl(role, account).await
    }

    async fn get_account_by_login_id(
        &self,
        role: AccountRole,
        login_id: &str,
    ) -> Result<Option<Account>> {
        self.get_account_by_login_id_impl(role, login_id).await
    }

    async fn update_account_password(
        &self,
        role: AccountRole,
        login_id: &str,
        password_hash: &str,
    ) -> Result<bool> {
        self.update_account_password_impl(role, login_id, password_hash)
            .await
    }

    async fn count_accounts(&self, role: AccountRole) -> Result<u64> {
        self.count_accounts_impl(role).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        faculty_id: &str,
        year: i32,
        slots: ProofSlots,
        is_draft: bool,
    ) -> Result<Submission> {
        self.upsert_submission_impl(faculty_id, year, slots, is_draft)
            .await
    }

    async fn get_submission(&self, faculty_id: &str, year: i32) -> Result<Option<Submission>> {
        self.get_submission_impl(faculty_id, year).await
    }

    async fn delete_submission(&self, faculty_id: &str, year: i32) -> Result<bool> {
        self.delete_submission_impl(faculty_id, year).await
    }

    async fn list_submitted_faculty(&self) -> Result<Vec<SubmittedFaculty>> {
        self.list_submitted_faculty_impl().await
    }

    // 评分模块
    async fn upsert_scores(
        &self,
        faculty_id: &str,
        year: i32,
        scored_by: &str,
        slots: ScoreSlots,
    ) -> Result<ScoreSheet> {
        self.upsert_scores_impl(faculty_id, year, scored_by, slots)
            .await
    }

    async fn get_scores(&self, faculty_id: &str, year: i32) -> Result<Option<ScoreSheet>> {
        self.get_scores_impl(faculty_id, year).await
    }
}
