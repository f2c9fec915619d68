//! 存储层生命周期测试
//!
//! 全部基于内存 SQLite，直接驱动 Storage trait 验证
//! 草稿/终稿/删除/评分的 upsert 语义。

use rust_fpms_next::models::accounts::entities::AccountRole;
use rust_fpms_next::models::accounts::requests::NewAccount;
use rust_fpms_next::models::scores::entities::ScoreSlots;
use rust_fpms_next::models::submissions::entities::ProofSlots;
use rust_fpms_next::storage::Storage;
use rust_fpms_next::storage::sea_orm_storage::SeaOrmStorage;

async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::new_with_url("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory storage should initialize")
}

fn slots(pairs: &[(&str, &str)]) -> ProofSlots {
    let mut slots = ProofSlots::default();
    for (name, value) in pairs {
        let value = Some(value.to_string());
        match *name {
            "l1_1" => slots.l1_1 = value,
            "l1_2" => slots.l1_2 = value,
            "l2_3" => slots.l2_3 = value,
            "l3_9" => slots.l3_9 = value,
            "l5_5" => slots.l5_5 = value,
            other => panic!("unexpected slot in test fixture: {other}"),
        }
    }
    slots
}

#[tokio::test]
async fn save_draft_twice_merges_fields_per_column() {
    let storage = memory_storage().await;

    // 第一次草稿只带 l1_1
    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://a")]), true)
        .await
        .unwrap();

    // 第二次草稿带 l1_1 的新值和 l2_3
    let merged = storage
        .upsert_submission(
            "VIT0021",
            2024,
            slots(&[("l1_1", "http://b"), ("l2_3", "http://c")]),
            true,
        )
        .await
        .unwrap();

    // 单行、字段并集、逐字段 last-value-wins
    assert_eq!(merged.slots.l1_1.as_deref(), Some("http://b"));
    assert_eq!(merged.slots.l2_3.as_deref(), Some("http://c"));
    assert_eq!(merged.slots.l1_2, None);
    assert!(merged.is_draft);

    let stored = storage.get_submission("VIT0021", 2024).await.unwrap().unwrap();
    assert_eq!(stored.slots.l1_1.as_deref(), Some("http://b"));
    assert_eq!(stored.slots.l2_3.as_deref(), Some("http://c"));
}

#[tokio::test]
async fn submit_forces_final_and_is_idempotent() {
    let storage = memory_storage().await;

    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://x")]), true)
        .await
        .unwrap();

    // 终稿提交：保留草稿里的 l1_1，写入 l1_2，is_draft 归 false
    let submitted = storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_2", "http://y")]), false)
        .await
        .unwrap();
    assert!(!submitted.is_draft);
    assert_eq!(submitted.slots.l1_1.as_deref(), Some("http://x"));
    assert_eq!(submitted.slots.l1_2.as_deref(), Some("http://y"));

    // 幂等：同样的调用得到同样的行
    let again = storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_2", "http://y")]), false)
        .await
        .unwrap();
    assert!(!again.is_draft);
    assert_eq!(again.slots.l1_1, submitted.slots.l1_1);
    assert_eq!(again.slots.l1_2, submitted.slots.l1_2);
}

#[tokio::test]
async fn resubmission_over_final_row_overwrites() {
    let storage = memory_storage().await;

    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://old")]), false)
        .await
        .unwrap();

    // 终稿之后的再次提交按列覆盖（last-write-wins），服务端不拒绝
    let overwritten = storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://new")]), false)
        .await
        .unwrap();
    assert_eq!(overwritten.slots.l1_1.as_deref(), Some("http://new"));
    assert!(!overwritten.is_draft);
}

#[tokio::test]
async fn delete_then_get_returns_not_found() {
    let storage = memory_storage().await;

    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://x")]), false)
        .await
        .unwrap();

    assert!(storage.delete_submission("VIT0021", 2024).await.unwrap());
    assert!(storage.get_submission("VIT0021", 2024).await.unwrap().is_none());

    // 再删一次是 no-op，不报错
    assert!(!storage.delete_submission("VIT0021", 2024).await.unwrap());
}

#[tokio::test]
async fn delete_only_touches_exact_key() {
    let storage = memory_storage().await;

    storage
        .upsert_submission("VIT0021", 2023, slots(&[("l1_1", "http://x")]), false)
        .await
        .unwrap();
    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://y")]), false)
        .await
        .unwrap();

    storage.delete_submission("VIT0021", 2023).await.unwrap();

    assert!(storage.get_submission("VIT0021", 2023).await.unwrap().is_none());
    assert!(storage.get_submission("VIT0021", 2024).await.unwrap().is_some());
}

#[tokio::test]
async fn list_submitted_faculty_excludes_draft_only_rows() {
    let storage = memory_storage().await;

    // 只有草稿的教职工不可见
    storage
        .upsert_submission("DRAFT01", 2024, slots(&[("l1_1", "http://d")]), true)
        .await
        .unwrap();
    // 两个年度都有终稿的教职工收敛为一个条目
    storage
        .upsert_submission("VIT0021", 2023, slots(&[("l1_1", "http://a")]), false)
        .await
        .unwrap();
    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_2", "http://b")]), false)
        .await
        .unwrap();

    let listed = storage.list_submitted_faculty().await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|f| f.faculty_id.as_str()).collect();
    assert_eq!(ids, vec!["VIT0021"]);
}

#[tokio::test]
async fn draft_becomes_visible_after_submit() {
    let storage = memory_storage().await;

    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://x")]), true)
        .await
        .unwrap();
    assert!(storage.list_submitted_faculty().await.unwrap().is_empty());

    storage
        .upsert_submission("VIT0021", 2024, ProofSlots::default(), false)
        .await
        .unwrap();
    let listed = storage.list_submitted_faculty().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].faculty_id, "VIT0021");
}

#[tokio::test]
async fn score_upsert_merges_slots_and_tracks_latest_admin() {
    let storage = memory_storage().await;

    storage
        .upsert_scores(
            "VIT0021",
            2024,
            "ADMIN1",
            ScoreSlots {
                a1_1: Some(80),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let merged = storage
        .upsert_scores(
            "VIT0021",
            2024,
            "ADMIN2",
            ScoreSlots {
                a1_2: Some(90),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(merged.slots.a1_1, Some(80));
    assert_eq!(merged.slots.a1_2, Some(90));
    // scored_by 记录最近一次写入者
    assert_eq!(merged.scored_by, "ADMIN2");
}

#[tokio::test]
async fn score_row_survives_submission_delete() {
    let storage = memory_storage().await;

    storage
        .upsert_submission("VIT0021", 2024, slots(&[("l1_1", "http://x")]), false)
        .await
        .unwrap();
    storage
        .upsert_scores(
            "VIT0021",
            2024,
            "ADMIN1",
            ScoreSlots {
                a1_1: Some(85),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // 提交删除后评分行悬空保留
    storage.delete_submission("VIT0021", 2024).await.unwrap();
    let dangling = storage.get_scores("VIT0021", 2024).await.unwrap();
    assert!(dangling.is_some());
}

#[tokio::test]
async fn score_can_exist_without_submission() {
    let storage = memory_storage().await;

    // 不校验目标提交存在
    let sheet = storage
        .upsert_scores(
            "GHOST99",
            2024,
            "ADMIN1",
            ScoreSlots {
                a5_5: Some(70),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(sheet.faculty_id, "GHOST99");
    assert_eq!(sheet.slots.a5_5, Some(70));
}

fn new_account(login_id: &str, department: Option<&str>) -> NewAccount {
    NewAccount {
        login_id: login_id.to_string(),
        password_hash: "$argon2id$stub$hash".to_string(),
        security_code_hash: "$argon2id$stub$code".to_string(),
        full_name: "Test Person".to_string(),
        department: department.map(|d| d.to_string()),
        email: "person@example.edu".to_string(),
    }
}

#[tokio::test]
async fn accounts_are_scoped_by_role() {
    let storage = memory_storage().await;

    storage
        .create_account(AccountRole::Faculty, new_account("VIT0021", Some("CSE")))
        .await
        .unwrap();

    // 教职工表里有，管理员表里没有
    let faculty = storage
        .get_account_by_login_id(AccountRole::Faculty, "VIT0021")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(faculty.role, AccountRole::Faculty);
    assert_eq!(faculty.department.as_deref(), Some("CSE"));

    let as_admin = storage
        .get_account_by_login_id(AccountRole::Admin, "VIT0021")
        .await
        .unwrap();
    assert!(as_admin.is_none());

    assert_eq!(storage.count_accounts(AccountRole::Faculty).await.unwrap(), 1);
    assert_eq!(storage.count_accounts(AccountRole::Admin).await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_login_id_is_rejected_by_store() {
    let storage = memory_storage().await;

    storage
        .create_account(AccountRole::Faculty, new_account("VIT0021", None))
        .await
        .unwrap();
    let duplicate = storage
        .create_account(AccountRole::Faculty, new_account("VIT0021", None))
        .await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn password_reset_overwrites_hash() {
    let storage = memory_storage().await;

    storage
        .create_account(AccountRole::Admin, new_account("ADMIN1", None))
        .await
        .unwrap();

    let updated = storage
        .update_account_password(AccountRole::Admin, "ADMIN1", "$argon2id$new$hash")
        .await
        .unwrap();
    assert!(updated);

    let account = storage
        .get_account_by_login_id(AccountRole::Admin, "ADMIN1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.password_hash, "$argon2id$new$hash");

    // 未知 ID 返回 false，不报错
    let missing = storage
        .update_account_password(AccountRole::Admin, "NOBODY", "$hash")
        .await
        .unwrap();
    assert!(!missing);
}
