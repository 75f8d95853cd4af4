use sea_orm_migration::prelude::*;

use crate::{MigrationReport, SchemaAction, SchemaStep};

/// Composite index backing "deaths near this spot" lookups.
pub(crate) const DEATH_SPOT_INDEX: &str = "idx_deaths_level_coords";

pub struct Step;

#[async_trait::async_trait]
impl SchemaStep for Step {
    fn name(&self) -> &'static str {
        "m0002_create_deaths"
    }

    async fn apply(
        &self,
        manager: &SchemaManager<'_>,
        report: &mut MigrationReport,
    ) -> Result<(), DbErr> {
        if manager.has_table("deaths").await? {
            log::info!("table deaths already exists");
        } else {
            manager
                .create_table(
                    Table::create()
                        .table(Deaths::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Deaths::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Deaths::LevelId).integer().not_null())
                        .col(ColumnDef::new(Deaths::CoordX).integer().not_null())
                        .col(ColumnDef::new(Deaths::CoordY).integer().not_null())
                        .col(
                            ColumnDef::new(Deaths::CreatedAt)
                                .timestamp()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
            report.record(SchemaAction::CreatedTable("deaths".into()));
        }

        if manager.has_index("deaths", DEATH_SPOT_INDEX).await? {
            log::info!("index {DEATH_SPOT_INDEX} already exists");
            return Ok(());
        }
        manager
            .create_index(
                Index::create()
                    .name(DEATH_SPOT_INDEX)
                    .table(Deaths::Table)
                    .col(Deaths::LevelId)
                    .col(Deaths::CoordX)
                    .col(Deaths::CoordY)
                    .to_owned(),
            )
            .await?;
        report.record(SchemaAction::CreatedIndex(DEATH_SPOT_INDEX.into()));
        Ok(())
    }
}

#[derive(Iden)]
enum Deaths {
    Table,
    Id,
    LevelId,
    CoordX,
    CoordY,
    CreatedAt,
}
