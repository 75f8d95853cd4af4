pub use sea_orm_migration::prelude::*;

mod bootstrap;
mod report;

mod m0001_create_players;
mod m0002_create_deaths;
mod m0003_create_level_attempts;
mod m0004_add_player_profile;

pub use bootstrap::{DATABASE_NAME, ensure_database, provision, target_url, verify_schema};
pub use report::{MigrationReport, SchemaAction};

use sea_orm::DatabaseConnection;

/// One idempotent piece of the target schema. Steps re-check existence
/// before acting, so the whole list can be applied unconditionally on
/// every startup and converges to a no-op once the structure is there.
#[async_trait::async_trait]
pub trait SchemaStep: Send + Sync {
    fn name(&self) -> &'static str;

    async fn apply(
        &self,
        manager: &SchemaManager<'_>,
        report: &mut MigrationReport,
    ) -> Result<(), DbErr>;
}

pub struct Migrator;

impl Migrator {
    /// Ordered by dependency: tables before the healing step that
    /// alters them.
    pub fn steps() -> Vec<Box<dyn SchemaStep>> {
        vec![
            Box::new(m0001_create_players::Step),
            Box::new(m0002_create_deaths::Step),
            Box::new(m0003_create_level_attempts::Step),
            Box::new(m0004_add_player_profile::Step),
        ]
    }

    /// Brings the connected database up to the target schema, creating
    /// only what is missing and never touching row data. Safe to call
    /// any number of times; the first failing step aborts the rest.
    pub async fn ensure_schema(db: &DatabaseConnection) -> Result<MigrationReport, DbErr> {
        let manager = SchemaManager::new(db);
        let mut report = MigrationReport::default();
        for step in Self::steps() {
            log::debug!("applying schema step {}", step.name());
            step.apply(&manager, &mut report).await?;
        }
        Ok(report)
    }
}
