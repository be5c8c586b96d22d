use anyhow::Result;
use foodreel_api::{setup, telemetry};
use foodreel_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_telemetry();

    let config = Config::from_env()?;
    let state = setup::services::build_state(config.clone())?;
    let app = setup::routes::build_router(state);

    setup::server::start_server(&config, app).await
}
