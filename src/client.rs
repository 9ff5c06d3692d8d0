use log::{debug, error, info};

use crate::config::PlannerConfig;
use crate::providers::openrouter::OpenRouterClient;
use crate::request::{PartyPlan, PlanRequest};

/// Turns a plan request into a parsed plan via one upstream call.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PartyPlanner
{   config: PlannerConfig
  , openrouter: OpenRouterClient
}

impl PartyPlanner
{   pub fn new(config: PlannerConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating PartyPlanner");
        let openrouter = OpenRouterClient::new(&config)?;
        Ok(PartyPlanner
        {   config
          , openrouter
        })
    }

    pub fn config(&self) -> &PlannerConfig
    {   &self.config
    }

    /// Generate a plan. The parsed model output is returned untouched.
    pub async fn generate_plan(
      &self
    , req: &PlanRequest
    ) -> Result<serde_json::Value, crate::error::Error>
    {   debug!(
          "generate_plan theme={:?} variant={} style={:?}"
        , req.theme
        , req.variant_text()
        , req.variant().and_then(crate::prompt::variant_style)
        );
        let payload = crate::prompt::build_chat_request(req, &self.config);
        let content = self.openrouter.complete(&payload).await?;
        let plan = parse_plan(&content, self.config.strict_plan_shape)?;
        info!("Generated party plan ({} bytes of model output)", content.len());
        Ok(plan)
    }
}

/// Parse model output into a plan value.
///
/// The text must be JSON. With `strict` set it must also deserialize as a
/// [`PartyPlan`]; the original value is still what gets returned.
pub fn parse_plan(content: &str, strict: bool)
  -> Result<serde_json::Value, crate::error::Error>
{   let plan: serde_json::Value
      = serde_json::from_str(content).map_err(|e| {
        error!("Model output is not valid JSON, raw content: {}", content);
        crate::error::Error::InvalidJson(e.to_string())
      })?;

    if strict
    {   serde_json::from_value::<PartyPlan>(plan.clone()).map_err(|e| {
          error!("Model output has the wrong shape: {}", e);
          crate::error::Error::ShapeMismatch(e.to_string())
        })?;
    }

    Ok(plan)
}
