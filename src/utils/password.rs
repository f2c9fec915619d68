use crate::config::AppConfig;
use crate::errors::FPMSError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码或安全码
///
/// 登录密码和找回密码用的安全码走同一套 Argon2id 参数，
/// 安全码不再以明文落库。
pub fn hash_secret(secret: &str) -> Result<String, FPMSError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| FPMSError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| FPMSError::validation(format!("哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码或安全码
pub fn verify_secret(secret: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_secret("S3curePass").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_secret("S3curePass", &hash));
        assert!(!verify_secret("WrongPass", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_secret("whatever", "not-a-phc-string"));
    }
}
