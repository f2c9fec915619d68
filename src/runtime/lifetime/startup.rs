use crate::models::accounts::entities::AccountRole;
use crate::models::accounts::requests::NewAccount;
use crate::storage::Storage;
use crate::utils::password::hash_secret;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何管理员，则创建一个默认的 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    // 检查是否已有管理员
    match storage.count_accounts(AccountRole::Admin).await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} admin account(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No admin accounts found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count admin accounts: {}, skipping admin seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    // 安全码同理
    let security_code = std::env::var("ADMIN_SECURITY_CODE").unwrap_or_else(|_| {
        let code = generate_random_password(8);
        warn!("  Generated admin security code: {}", code);
        code
    });

    // 哈希密码与安全码
    let password_hash = match hash_secret(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };
    let security_code_hash = match hash_secret(&security_code) {
        Ok(hash) => hash,
        Err(e) => {
            warn!(
                "Failed to hash admin security code: {}, skipping admin seed",
                e
            );
            return;
        }
    };

    // 创建管理员账号
    let admin_account = NewAccount {
        login_id: "admin".to_string(),
        password_hash,
        security_code_hash,
        full_name: "Administrator".to_string(),
        department: None,
        email: "admin@localhost".to_string(),
    };

    match storage.create_account(AccountRole::Admin, admin_account).await {
        Ok(account) => {
            info!(
                "Default admin account created successfully (ID: {})",
                account.login_id
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与默认账号播种
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    StartupContext { storage }
}
