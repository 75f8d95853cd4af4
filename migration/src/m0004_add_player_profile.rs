use sea_orm_migration::prelude::*;

use crate::{MigrationReport, SchemaAction, SchemaStep};

/// Heals players tables created before the profile fields existed:
/// adds `name` and `dob` as nullable text columns, row data untouched.
pub struct Step;

#[async_trait::async_trait]
impl SchemaStep for Step {
    fn name(&self) -> &'static str {
        "m0004_add_player_profile"
    }

    async fn apply(
        &self,
        manager: &SchemaManager<'_>,
        report: &mut MigrationReport,
    ) -> Result<(), DbErr> {
        if !manager.has_column("players", "name").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Players::Table)
                        .add_column(ColumnDef::new(Players::Name).string_len(100).null())
                        .to_owned(),
                )
                .await?;
            report.record(SchemaAction::AddedColumn {
                table: "players".into(),
                column: "name".into(),
            });
        } else {
            log::debug!("column players.name already exists");
        }

        if !manager.has_column("players", "dob").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Players::Table)
                        .add_column(ColumnDef::new(Players::Dob).string_len(20).null())
                        .to_owned(),
                )
                .await?;
            report.record(SchemaAction::AddedColumn {
                table: "players".into(),
                column: "dob".into(),
            });
        } else {
            log::debug!("column players.dob already exists");
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Players {
    Table,
    Name,
    Dob,
}
