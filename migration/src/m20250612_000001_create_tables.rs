use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 证明链接槽位目录：五个评估板块，共 35 个命名槽位
/// L1 教学 (6) / L2 科研 (9) / L3 专业发展 (9) / L4 学院贡献 (6) / L5 学生发展 (5)
const PROOF_SLOTS: [&str; 35] = [
    "l1_1", "l1_2", "l1_3", "l1_4", "l1_5", "l1_6", "l2_1", "l2_2", "l2_3", "l2_4", "l2_5",
    "l2_6", "l2_7", "l2_8", "l2_9", "l3_1", "l3_2", "l3_3", "l3_4", "l3_5", "l3_6", "l3_7",
    "l3_8", "l3_9", "l4_1", "l4_2", "l4_3", "l4_4", "l4_5", "l4_6", "l5_1", "l5_2", "l5_3",
    "l5_4", "l5_5",
];

/// 评分槽位目录，与证明槽位一一对应
const SCORE_SLOTS: [&str; 35] = [
    "a1_1", "a1_2", "a1_3", "a1_4", "a1_5", "a1_6", "a2_1", "a2_2", "a2_3", "a2_4", "a2_5",
    "a2_6", "a2_7", "a2_8", "a2_9", "a3_1", "a3_2", "a3_3", "a3_4", "a3_5", "a3_6", "a3_7",
    "a3_8", "a3_9", "a4_1", "a4_2", "a4_3", "a4_4", "a4_5", "a4_6", "a5_1", "a5_2", "a5_3",
    "a5_4", "a5_5",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教职工账号表
        manager
            .create_table(
                Table::create()
                    .table(FacultyUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacultyUsers::LoginId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FacultyUsers::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacultyUsers::SecurityCodeHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FacultyUsers::FullName).string().not_null())
                    .col(ColumnDef::new(FacultyUsers::Department).string().null())
                    .col(ColumnDef::new(FacultyUsers::Email).string().not_null())
                    .col(
                        ColumnDef::new(FacultyUsers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建管理员账号表
        manager
            .create_table(
                Table::create()
                    .table(AdminUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminUsers::AdminId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminUsers::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(AdminUsers::SecurityCodeHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminUsers::FullName).string().not_null())
                    .col(ColumnDef::new(AdminUsers::Email).string().not_null())
                    .col(
                        ColumnDef::new(AdminUsers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建证明提交表：每位教职工每年最多一行，35 个命名链接槽位
        let mut submissions = Table::create();
        submissions
            .table(FacultySubmissions::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(FacultySubmissions::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(FacultySubmissions::FacultyId)
                    .string()
                    .not_null(),
            )
            .col(ColumnDef::new(FacultySubmissions::Year).integer().not_null())
            .col(
                ColumnDef::new(FacultySubmissions::IsDraft)
                    .boolean()
                    .not_null()
                    .default(false),
            );
        for slot in PROOF_SLOTS {
            submissions.col(ColumnDef::new(Alias::new(slot)).text().null());
        }
        submissions
            .col(
                ColumnDef::new(FacultySubmissions::CreatedAt)
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(FacultySubmissions::UpdatedAt)
                    .big_integer()
                    .not_null(),
            );
        manager.create_table(submissions.to_owned()).await?;

        // (faculty_id, year) 冲突目标，upsert 依赖此唯一索引
        manager
            .create_index(
                Index::create()
                    .name("idx_faculty_submissions_faculty_year")
                    .table(FacultySubmissions::Table)
                    .col(FacultySubmissions::FacultyId)
                    .col(FacultySubmissions::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建评分表：与提交表同键，独立存在，无外键级联
        let mut scores = Table::create();
        scores
            .table(AdminScores::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(AdminScores::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(AdminScores::FacultyId).string().not_null())
            .col(ColumnDef::new(AdminScores::Year).integer().not_null())
            .col(ColumnDef::new(AdminScores::ScoredBy).string().not_null());
        for slot in SCORE_SLOTS {
            scores.col(ColumnDef::new(Alias::new(slot)).integer().null());
        }
        scores
            .col(
                ColumnDef::new(AdminScores::CreatedAt)
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(AdminScores::UpdatedAt)
                    .big_integer()
                    .not_null(),
            );
        manager.create_table(scores.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_admin_scores_faculty_year")
                    .table(AdminScores::Table)
                    .col(AdminScores::FacultyId)
                    .col(AdminScores::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminScores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacultySubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AdminUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FacultyUsers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum FacultyUsers {
    #[sea_orm(iden = "faculty_users")]
    Table,
    LoginId,
    PasswordHash,
    SecurityCodeHash,
    FullName,
    Department,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AdminUsers {
    #[sea_orm(iden = "admin_users")]
    Table,
    AdminId,
    PasswordHash,
    SecurityCodeHash,
    FullName,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FacultySubmissions {
    #[sea_orm(iden = "faculty_submissions")]
    Table,
    Id,
    FacultyId,
    Year,
    IsDraft,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AdminScores {
    #[sea_orm(iden = "admin_scores")]
    Table,
    Id,
    FacultyId,
    Year,
    ScoredBy,
    CreatedAt,
    UpdatedAt,
}
