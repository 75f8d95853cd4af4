use sea_orm_migration::prelude::*;

use crate::{MigrationReport, SchemaAction, SchemaStep};

pub struct Step;

#[async_trait::async_trait]
impl SchemaStep for Step {
    fn name(&self) -> &'static str {
        "m0003_create_level_attempts"
    }

    async fn apply(
        &self,
        manager: &SchemaManager<'_>,
        report: &mut MigrationReport,
    ) -> Result<(), DbErr> {
        if manager.has_table("level_attempts").await? {
            log::info!("table level_attempts already exists");
            return Ok(());
        }
        // Append-only completion history: no uniqueness across
        // (user_id, level_id), repeated completions add rows.
        manager
            .create_table(
                Table::create()
                    .table(LevelAttempts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LevelAttempts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LevelAttempts::UserId).integer().not_null())
                    .col(ColumnDef::new(LevelAttempts::LevelId).integer().not_null())
                    .col(ColumnDef::new(LevelAttempts::Attempts).integer().not_null())
                    .col(
                        ColumnDef::new(LevelAttempts::StarsEarned)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LevelAttempts::CompletedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        report.record(SchemaAction::CreatedTable("level_attempts".into()));
        Ok(())
    }
}

#[derive(Iden)]
enum LevelAttempts {
    Table,
    Id,
    UserId,
    LevelId,
    Attempts,
    StarsEarned,
    CompletedAt,
}
