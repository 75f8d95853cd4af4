use sea_orm_migration::prelude::*;

use crate::{MigrationReport, SchemaAction, SchemaStep};

pub struct Step;

#[async_trait::async_trait]
impl SchemaStep for Step {
    fn name(&self) -> &'static str {
        "m0001_create_players"
    }

    async fn apply(
        &self,
        manager: &SchemaManager<'_>,
        report: &mut MigrationReport,
    ) -> Result<(), DbErr> {
        if manager.has_table("players").await? {
            log::info!("table players already exists");
            return Ok(());
        }
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Players::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Players::PasswordHash)
                            .char_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Players::Name).string_len(100).null())
                    .col(ColumnDef::new(Players::Dob).string_len(20).null())
                    .col(
                        ColumnDef::new(Players::TotalStars)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        report.record(SchemaAction::CreatedTable("players".into()));
        Ok(())
    }
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    Username,
    PasswordHash,
    Name,
    Dob,
    TotalStars,
    CreatedAt,
}
