//! Configuration for the party plan relay

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_ENDPOINT: &str
  = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openrouter/sherlock-dash-alpha";
pub const DEFAULT_REFERER: &str
  = "https://your-app-domain-or-localhost";
pub const DEFAULT_APP_TITLE: &str = "Party Planner Demo";

/// Relay configuration, built once at process entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig
{   /// OpenRouter API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>
  , /// Chat completion endpoint
    pub endpoint: String
  , /// Model identifier sent upstream
    pub model: String
  , /// Sampling temperature
    pub temperature: f32
  , /// Value of the `HTTP-Referer` header
    pub referer: String
  , /// Value of the `X-Title` header
    pub app_title: String
  , /// Upstream request timeout in seconds
    pub timeout_secs: u64
  , /// Listen address
    pub bind_addr: String
  , /// Listen port
    pub port: u16
  , /// Directory of bundled front-end files
    pub public_dir: PathBuf
  , /// Map failures to 502/504/422 instead of a blanket 500
    pub distinct_status_codes: bool
  , /// Reject model output that is not shaped like a party plan
    pub strict_plan_shape: bool
}

impl Default for PlannerConfig
{   fn default() -> Self
    {   PlannerConfig
        {   api_key: None
          , endpoint: DEFAULT_ENDPOINT.to_string()
          , model: DEFAULT_MODEL.to_string()
          , temperature: 0.7
          , referer: DEFAULT_REFERER.to_string()
          , app_title: DEFAULT_APP_TITLE.to_string()
          , timeout_secs: 30
          , bind_addr: "0.0.0.0".to_string()
          , port: 3000
          , public_dir: PathBuf::from("public")
          , distinct_status_codes: false
          , strict_plan_shape: false
        }
    }
}

impl PlannerConfig
{   /// Build configuration from the process environment
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Unset or empty keys keep their default.
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let get = |key: &str| {
          lookup(key).filter(|v| !v.trim().is_empty())
        };
        let mut config = PlannerConfig::default();

        config.api_key = get("OPENROUTER_API_KEY");
        if let Some(v) = get("OPENROUTER_ENDPOINT")
        {   config.endpoint = v;
        }
        if let Some(v) = get("OPENROUTER_MODEL")
        {   config.model = v;
        }
        if let Some(v) = get("OPENROUTER_REFERER")
        {   config.referer = v;
        }
        if let Some(v) = get("OPENROUTER_APP_TITLE")
        {   config.app_title = v;
        }
        if let Some(v) = get("PARTYPLAN_TIMEOUT_SECS")
        {   config.timeout_secs = parse_number("PARTYPLAN_TIMEOUT_SECS", &v)?;
            if config.timeout_secs == 0
            {   return Err(crate::error::Error::InvalidConfiguration(
                  "PARTYPLAN_TIMEOUT_SECS must be greater than zero"
                    .to_string()
                ));
            }
        }
        if let Some(v) = get("BIND_ADDR")
        {   config.bind_addr = v;
        }
        if let Some(v) = get("PORT")
        {   config.port = parse_number("PORT", &v)?;
        }
        if let Some(v) = get("PARTYPLAN_PUBLIC_DIR")
        {   config.public_dir = PathBuf::from(v);
        }
        if let Some(v) = get("PARTYPLAN_DISTINCT_STATUS")
        {   config.distinct_status_codes
              = parse_flag("PARTYPLAN_DISTINCT_STATUS", &v)?;
        }
        if let Some(v) = get("PARTYPLAN_STRICT_SHAPE")
        {   config.strict_plan_shape
              = parse_flag("PARTYPLAN_STRICT_SHAPE", &v)?;
        }

        debug!("Loaded configuration: {:?}", config.redacted());
        Ok(config)
    }

    /// Copy with the API key masked, safe to log
    pub fn redacted(&self) -> Self
    {   PlannerConfig
        {   api_key: self.api_key.as_ref().map(|_| "***".to_string())
          , ..self.clone()
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str)
  -> Result<T, crate::error::Error>
{   value.trim().parse().map_err(|_| {
      crate::error::Error::InvalidConfiguration(
        format!("{} is not a valid number: {}", key, value)
      )
    })
}

fn parse_flag(key: &str, value: &str)
  -> Result<bool, crate::error::Error>
{   match value.trim().to_ascii_lowercase().as_str()
    {   "1" | "true" | "yes" | "on" => Ok(true)
      , "0" | "false" | "no" | "off" => Ok(false)
      , _ => Err(crate::error::Error::InvalidConfiguration(
          format!("{} is not a valid boolean: {}", key, value)
        ))
    }
}
