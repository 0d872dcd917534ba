use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // .env is optional; real env vars win either way.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to init logging: {err}"))?;
    dioxus::launch(medibot::ui::App);
    Ok(())
}
