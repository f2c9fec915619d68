//! 教职工账号实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub login_id: String,
    pub password_hash: String,
    pub security_code_hash: String,
    pub full_name: String,
    pub department: Option<String>,
    pub email: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_account(self) -> crate::models::accounts::entities::Account {
        use crate::models::accounts::entities::{Account, AccountRole};
        use chrono::{DateTime, Utc};

        Account {
            login_id: self.login_id,
            password_hash: self.password_hash,
            security_code_hash: self.security_code_hash,
            role: AccountRole::Faculty,
            full_name: self.full_name,
            department: self.department,
            email: self.email,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
