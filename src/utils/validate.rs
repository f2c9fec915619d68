use once_cell::sync::Lazy;
use regex::Regex;

static LOGIN_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid login id regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_login_id(login_id: &str) -> Result<(), &'static str> {
    // 登录 ID 长度校验：4 <= x <= 20
    if login_id.len() < 4 || login_id.len() > 20 {
        return Err("Login ID length must be between 4 and 20 characters");
    }
    // 登录 ID 格式校验：只能包含字母、数字、下划线或连字符
    if !LOGIN_ID_RE.is_match(login_id) {
        return Err("Login ID must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 申报年份的合理范围校验
pub fn validate_year(year: i32) -> Result<(), &'static str> {
    if !(2000..=2100).contains(&year) {
        return Err("Year must be between 2000 and 2100");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_id() {
        assert!(validate_login_id("VIT0021").is_ok());
        assert!(validate_login_id("admin-01").is_ok());
        assert!(validate_login_id("prof_xyz").is_ok());
    }

    #[test]
    fn test_short_login_id() {
        assert!(validate_login_id("ab").is_err());
    }

    #[test]
    fn test_login_id_with_invalid_chars() {
        assert!(validate_login_id("vit 0021").is_err());
        assert!(validate_login_id("vit;0021").is_err());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("prof@vit.ac.in").is_ok());
        assert!(validate_email("a.b+c@example.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_year_range() {
        assert!(validate_year(2024).is_ok());
        assert!(validate_year(1999).is_err());
        assert!(validate_year(2101).is_err());
    }
}
