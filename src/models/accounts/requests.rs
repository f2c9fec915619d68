use serde::Deserialize;
use ts_rs::TS;

// 登录请求（来自HTTP请求）
// 旧版客户端按角色使用 faculty_id / admin_id 字段名，serde 别名统一收口
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/account.ts")]
pub struct LoginRequest {
    /// 登录 ID
    #[serde(alias = "faculty_id", alias = "admin_id")]
    pub login_id: String,
    /// 密码
    pub password: String,
}

// 注册请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/account.ts")]
pub struct SignupRequest {
    #[serde(alias = "faculty_id", alias = "admin_id")]
    pub login_id: String,
    pub password: String,
    /// 找回密码用的安全码，入库前哈希
    pub security_code: String,
    pub full_name: String,
    /// 所属院系，管理员注册时忽略
    #[serde(default)]
    pub department: Option<String>,
    pub email: String,
}

// 重置密码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/account.ts")]
pub struct ResetPasswordRequest {
    #[serde(alias = "faculty_id", alias = "admin_id")]
    pub login_id: String,
    pub security_code: String,
    pub new_password: String,
}

// 账号创建参数（用于存储层，密码与安全码均已哈希）
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub login_id: String,
    pub password_hash: String,
    pub security_code_hash: String,
    pub full_name: String,
    pub department: Option<String>,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_field_aliases() {
        let faculty: LoginRequest =
            serde_json::from_str(r#"{"login_id": "VIT0021", "password": "pw"}"#).unwrap();
        assert_eq!(faculty.login_id, "VIT0021");

        let legacy_faculty: LoginRequest =
            serde_json::from_str(r#"{"faculty_id": "VIT0021", "password": "pw"}"#).unwrap();
        assert_eq!(legacy_faculty.login_id, "VIT0021");

        let legacy_admin: LoginRequest =
            serde_json::from_str(r#"{"admin_id": "ADMIN1", "password": "pw"}"#).unwrap();
        assert_eq!(legacy_admin.login_id, "ADMIN1");
    }

    #[test]
    fn test_reset_request_aliases() {
        let req: ResetPasswordRequest = serde_json::from_str(
            r#"{"faculty_id": "VIT0021", "security_code": "1234", "new_password": "np"}"#,
        )
        .unwrap();
        assert_eq!(req.login_id, "VIT0021");
        assert_eq!(req.security_code, "1234");
    }
}
