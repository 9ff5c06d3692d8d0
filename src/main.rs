use std::sync::Arc;
use log::{error, warn};

use partyplan::{PartyPlanner, PlannerConfig};

#[tokio::main]
async fn main()
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    if let Err(e) = run().await
    {   error!("{}: {}", e, e.detail().unwrap_or_default());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), partyplan::Error>
{   let config = PlannerConfig::from_env()?;
    if config.api_key.is_none()
    {   warn!("OPENROUTER_API_KEY is not set; plan requests will fail");
    }

    let planner = Arc::new(PartyPlanner::new(config)?);
    partyplan::server::run_serve(planner).await
}
