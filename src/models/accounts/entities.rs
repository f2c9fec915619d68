use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 账号角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "frontend/src/types/generated/account.ts")]
pub enum AccountRole {
    Faculty, // 教职工
    Admin,   // 管理员
}

impl AccountRole {
    pub const FACULTY: &'static str = "faculty";
    pub const ADMIN: &'static str = "admin";
}

impl<'de> Deserialize<'de> for AccountRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AccountRole::FACULTY => Ok(AccountRole::Faculty),
            AccountRole::ADMIN => Ok(AccountRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的账号角色: '{s}'. 支持的角色: faculty, admin"
            ))),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Faculty => write!(f, "{}", AccountRole::FACULTY),
            AccountRole::Admin => write!(f, "{}", AccountRole::ADMIN),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faculty" => Ok(AccountRole::Faculty),
            "admin" => Ok(AccountRole::Admin),
            _ => Err(format!("Invalid account role: {s}")),
        }
    }
}

// 账号实体：教职工与管理员的统一抽象，角色以标签区分
// 存储层仍维持 faculty_users / admin_users 两张表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/account.ts")]
pub struct Account {
    pub login_id: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub security_code_hash: String,
    pub role: AccountRole,
    pub full_name: String,
    /// 所属院系，仅教职工账号有值
    pub department: Option<String>,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("faculty".parse::<AccountRole>(), Ok(AccountRole::Faculty));
        assert_eq!("admin".parse::<AccountRole>(), Ok(AccountRole::Admin));
        assert!("teacher".parse::<AccountRole>().is_err());
        assert_eq!(AccountRole::Faculty.to_string(), "faculty");
        assert_eq!(AccountRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_account_hides_secrets() {
        let account = Account {
            login_id: "VIT0021".to_string(),
            password_hash: "$argon2id$...".to_string(),
            security_code_hash: "$argon2id$...".to_string(),
            role: AccountRole::Faculty,
            full_name: "Test Faculty".to_string(),
            department: Some("CSE".to_string()),
            email: "test@example.edu".to_string(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("security_code_hash").is_none());
        assert_eq!(json["login_id"], "VIT0021");
    }
}
