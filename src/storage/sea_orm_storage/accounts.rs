//! 账号存储操作
//!
//! Account 是统一的业务抽象，底层仍按角色落在 faculty_users / admin_users
//! 两张表里，本模块负责按角色分发。

use super::SeaOrmStorage;
use crate::entity::admin_users;
use crate::entity::faculty_users;
use crate::errors::{FPMSError, Result};
use crate::models::accounts::{
    entities::{Account, AccountRole},
    requests::NewAccount,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建账号
    pub async fn create_account_impl(
        &self,
        role: AccountRole,
        account: NewAccount,
    ) -> Result<Account> {
        let now = chrono::Utc::now().timestamp();

        let result = match role {
            AccountRole::Faculty => {
                let model = faculty_users::ActiveModel {
                    login_id: Set(account.login_id),
                    password_hash: Set(account.password_hash),
                    security_code_hash: Set(account.security_code_hash),
                    full_name: Set(account.full_name),
                    department: Set(account.department),
                    email: Set(account.email),
                    created_at: Set(now),
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| FPMSError::database_operation(format!("创建教职工账号失败: {e}")))?
                    .into_account()
            }
            AccountRole::Admin => {
                let model = admin_users::ActiveModel {
                    admin_id: Set(account.login_id),
                    password_hash: Set(account.password_hash),
                    security_code_hash: Set(account.security_code_hash),
                    full_name: Set(account.full_name),
                    email: Set(account.email),
                    created_at: Set(now),
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| FPMSError::database_operation(format!("创建管理员账号失败: {e}")))?
                    .into_account()
            }
        };

        Ok(result)
    }

    /// 通过登录 ID 获取账号
    pub async fn get_account_by_login_id_impl(
        &self,
        role: AccountRole,
        login_id: &str,
    ) -> Result<Option<Account>> {
        match role {
            AccountRole::Faculty => {
                let result = faculty_users::Entity::find_by_id(login_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| FPMSError::database_operation(format!("查询账号失败: {e}")))?;
                Ok(result.map(|m| m.into_account()))
            }
            AccountRole::Admin => {
                let result = admin_users::Entity::find_by_id(login_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| FPMSError::database_operation(format!("查询账号失败: {e}")))?;
                Ok(result.map(|m| m.into_account()))
            }
        }
    }

    /// 重置密码哈希
    pub async fn update_account_password_impl(
        &self,
        role: AccountRole,
        login_id: &str,
        password_hash: &str,
    ) -> Result<bool> {
        let rows_affected = match role {
            AccountRole::Faculty => {
                faculty_users::Entity::update_many()
                    .col_expr(
                        faculty_users::Column::PasswordHash,
                        sea_orm::sea_query::Expr::value(password_hash),
                    )
                    .filter(faculty_users::Column::LoginId.eq(login_id))
                    .exec(&self.db)
                    .await
                    .map_err(|e| FPMSError::database_operation(format!("重置密码失败: {e}")))?
                    .rows_affected
            }
            AccountRole::Admin => {
                admin_users::Entity::update_many()
                    .col_expr(
                        admin_users::Column::PasswordHash,
                        sea_orm::sea_query::Expr::value(password_hash),
                    )
                    .filter(admin_users::Column::AdminId.eq(login_id))
                    .exec(&self.db)
                    .await
                    .map_err(|e| FPMSError::database_operation(format!("重置密码失败: {e}")))?
                    .rows_affected
            }
        };

        Ok(rows_affected > 0)
    }

    /// 统计账号数量
    pub async fn count_accounts_impl(&self, role: AccountRole) -> Result<u64> {
        let count = match role {
            AccountRole::Faculty => faculty_users::Entity::find().count(&self.db).await,
            AccountRole::Admin => admin_users::Entity::find().count(&self.db).await,
        }
        .map_err(|e| FPMSError::database_operation(format!("统计账号数量失败: {e}")))?;

        Ok(count)
    }
}
