use sea_orm_migration::MigratorTrait;
use tayib_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    migration::Migrator,
};

/// `migrate [up|down|status]`, defaulting to `up`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    match std::env::args().nth(1).as_deref() {
        None | Some("up") => {
            run_migrations(&orm).await?;
            println!("Schema is up to date");
        }
        Some("down") => {
            Migrator::down(&orm, Some(1)).await?;
            println!("Rolled back the last migration");
        }
        Some("status") => Migrator::status(&orm).await?,
        Some(other) => anyhow::bail!("unknown command `{other}`, expected up, down or status"),
    }
    Ok(())
}
