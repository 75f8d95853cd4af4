use anyhow::Context;
use env_logger::{Env, Target};

/// Local fallback mirroring the desktop build, which keeps progress in
/// a SQLite file next to the executable when no server is configured.
const FALLBACK_URL: &str = "sqlite://devil_run.db?mode=rwc";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        log::warn!("DATABASE_URL not set, falling back to {FALLBACK_URL}");
        FALLBACK_URL.to_string()
    });

    migration::provision(&database_url)
        .await
        .context("schema provisioning failed")?;
    Ok(())
}
