use anyhow::{bail, Context};
use course_catalog::{Catalog, Config};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_line_number(true)
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_owned());

    let config = Config::from_env().context("failed to read configuration")?;
    let catalog = Catalog::connect(config)
        .await
        .context("failed to connect to database")?;

    match command.as_str() {
        "up" => catalog.init_schema().await?,
        "down" => catalog.drop_schema().await?,
        "fresh" => catalog.reset_schema().await?,
        other => bail!("unknown command {other:?}, expected one of: up, down, fresh"),
    }

    tracing::info!(command = %command, "done");

    Ok(())
}
