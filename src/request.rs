//! Inbound request, model output and error envelope types

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Body of `POST /api/party-plan`
///
/// Fields stay raw JSON values of any type; they are only rendered
/// into the prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest
{   #[serde(default)]
    pub theme: Option<Value>
  , #[serde(default)]
    pub start_time: Option<Value>
  , #[serde(default)]
    pub people: Option<Value>
  , /// Style preset; absent or null means 0
    #[serde(default)]
    pub variant_index: Option<Value>
}

impl PlanRequest
{   /// Parse an inbound body. An empty body is an empty request.
    pub fn from_body(body: &[u8])
      -> Result<Self, crate::error::Error>
    {   if body.iter().all(|b| b.is_ascii_whitespace())
        {   return Ok(PlanRequest::default());
        }
        serde_json::from_slice(body).map_err(|e| {
          crate::error::Error::InvalidRequest(e.to_string())
        })
    }

    pub fn theme_text(&self) -> Option<String>
    {   self.theme.as_ref().and_then(render_value)
    }

    pub fn start_time_text(&self) -> Option<String>
    {   self.start_time.as_ref().and_then(render_value)
    }

    pub fn people_text(&self) -> Option<String>
    {   self.people.as_ref().and_then(render_value)
    }

    /// Variant as it reads in the prompt, uninterpreted
    pub fn variant_text(&self) -> String
    {   match &self.variant_index
        {   None | Some(Value::Null) => "0".to_string()
          , Some(Value::String(s)) => s.clone()
          , Some(Value::Number(n)) => number_text(n)
          , Some(other) => other.to_string()
        }
    }

    /// Variant as an integer, when it reads as one
    pub fn variant(&self) -> Option<i64>
    {   match &self.variant_index
        {   None | Some(Value::Null) => Some(0)
          , Some(Value::String(s)) => s.trim().parse().ok()
          , Some(Value::Number(n)) => number_text(n).parse().ok()
          , Some(_) => None
        }
    }
}

/// Render a loose field for the prompt.
/// Null, false, zero and empty text count as missing.
pub fn render_value(value: &Value) -> Option<String>
{   match value
    {   Value::Null | Value::Bool(false) => None
      , Value::String(s) if s.is_empty() => None
      , Value::String(s) => Some(s.clone())
      , Value::Number(n) => {
          let zero = n.as_f64().map_or(false, |f| f == 0.0);
          (!zero).then(|| number_text(n))
        }
      , other => Some(other.to_string())
    }
}

/// Integral floats lose their fraction: `10.0` reads as `10`
fn number_text(n: &Number) -> String
{   match n.as_f64()
    {   Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
          format!("{}", f as i64)
        }
      , _ => n.to_string()
    }
}

/// One step of the party timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry
{   pub time: String
  , pub label: String
  , pub detail: String
}

/// Plan shape the model is instructed to produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyPlan
{   pub title: String
  , pub vibe: String
  , pub duration_text: String
  , pub people_text: String
  , pub timeline: Vec<TimelineEntry>
  , pub items: Vec<String>
  , pub tips: String
}

/// Error envelope returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub error: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>
}

impl From<&crate::error::Error> for ErrorResponse
{   fn from(err: &crate::error::Error) -> Self
    {   ErrorResponse
        {   error: err.to_string()
          , detail: err.detail()
        }
    }
}
