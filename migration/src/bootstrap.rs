use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement};
use sea_orm_migration::SchemaManager;
use url::Url;

use crate::Migrator;
use crate::m0002_create_deaths::DEATH_SPOT_INDEX;
use crate::report::{MigrationReport, SchemaAction};

/// Database the game backend connects to after provisioning. Used when
/// the configured URL carries no database name of its own.
pub const DATABASE_NAME: &str = "devil_run_db";

/// Resolves the URL the working connection uses. A Postgres URL whose
/// path names no database targets [`DATABASE_NAME`], so the bootstrap
/// check and the schema steps agree on where the tables live.
pub fn target_url(database_url: &str) -> Result<Url, DbErr> {
    let mut url = Url::parse(database_url)
        .map_err(|err| DbErr::Custom(format!("invalid database url: {err}")))?;
    if url.scheme().starts_with("postgres") && url.path().trim_start_matches('/').is_empty() {
        url.set_path(&format!("/{DATABASE_NAME}"));
    }
    Ok(url)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Ensures the target database exists, creating it with default options
/// when absent. Only meaningful for Postgres; a SQLite file is created
/// by the connect itself (`mode=rwc`).
pub async fn ensure_database(
    database_url: &str,
    report: &mut MigrationReport,
) -> Result<(), DbErr> {
    let url = target_url(database_url)?;
    if !url.scheme().starts_with("postgres") {
        log::info!("{} backend, skipping database bootstrap", url.scheme());
        return Ok(());
    }
    let name = url.path().trim_start_matches('/').to_string();

    // The target may not exist yet, so the existence check runs against
    // the maintenance database on the same server.
    let mut admin_url = url.clone();
    admin_url.set_path("/postgres");
    let admin = Database::connect(admin_url.as_str()).await?;

    let exists = admin
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [name.clone().into()],
        ))
        .await?
        .is_some();
    if exists {
        log::info!("database {name} already exists");
    } else {
        admin
            .execute_unprepared(&format!("CREATE DATABASE {}", quote_ident(&name)))
            .await?;
        report.record(SchemaAction::CreatedDatabase(name));
    }
    Ok(())
}

/// Confirms every table and the deaths lookup index are present.
pub async fn verify_schema(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let manager = SchemaManager::new(db);
    Ok(manager.has_table("players").await?
        && manager.has_table("deaths").await?
        && manager.has_table("level_attempts").await?
        && manager.has_index("deaths", DEATH_SPOT_INDEX).await?)
}

/// One-shot provisioning sequence: ensure the database exists, connect
/// to it, apply every schema step, then verify. The connection is held
/// for the whole sequence and dropped on return, success or not.
pub async fn provision(database_url: &str) -> Result<MigrationReport, DbErr> {
    let target = target_url(database_url)?;
    let mut report = MigrationReport::default();
    ensure_database(target.as_str(), &mut report).await?;

    let db = Database::connect(target.as_str()).await?;
    report.merge(Migrator::ensure_schema(&db).await?);

    if !verify_schema(&db).await? {
        return Err(DbErr::Custom(
            "schema verification failed after provisioning".into(),
        ));
    }
    if report.is_noop() {
        log::info!("schema already up to date, nothing to do");
    }
    log::info!(
        "schema verified on {:?}, {} change(s) applied",
        db.get_database_backend(),
        report.actions().len()
    );
    Ok(report)
}
