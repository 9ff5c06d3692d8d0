use std::fmt;
use std::time::Duration;

/// Error type for party plan generation
/// Implements Clone and PartialEq
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// No OpenRouter API key was configured
    MissingApiKey
  , /// Startup configuration could not be parsed
    InvalidConfiguration(String)
  , /// Inbound request body was not usable
    InvalidRequest(String)
  , /// Upstream answered with a non-success status
    UpstreamStatus
    {   status: u16
      , body: String
    }
  , /// Network failure before any upstream response arrived
    HttpError(String)
  , /// Upstream did not answer within the configured bound
    Timeout(Duration)
  , /// Upstream response envelope could not be decoded
    ParseError(String)
  , /// Upstream succeeded but carried no message content
    NoContent
  , /// Model content is not valid JSON
    InvalidJson(String)
  , /// Model content is JSON but not a party plan
    ShapeMismatch(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// Diagnostic detail for the error envelope, if any
    pub fn detail(&self) -> Option<String>
    {   match self
        {   Error::UpstreamStatus { body, .. } => Some(body.clone())
          , Error::InvalidConfiguration(msg)
          | Error::InvalidRequest(msg)
          | Error::HttpError(msg)
          | Error::ParseError(msg)
          | Error::InvalidJson(msg)
          | Error::ShapeMismatch(msg)
          | Error::Other(msg) => Some(msg.clone())
          , Error::Timeout(after) => {
              Some(format!("no response after {}s", after.as_secs_f64()))
            }
          , Error::MissingApiKey => {
              Some("set OPENROUTER_API_KEY before starting the server"
                .to_string())
            }
          , Error::NoContent => None
        }
    }

    /// HTTP status for this error
    ///
    /// Every generation failure collapses to 500 unless `distinct` is set,
    /// in which case upstream trouble becomes 502, a timeout 504 and a
    /// wrongly shaped plan 422. Bad inbound bodies are always 400.
    pub fn status_code(&self, distinct: bool) -> u16
    {   match self
        {   Error::InvalidRequest(_) => 400
          , _ if !distinct => 500
          , Error::UpstreamStatus { .. }
          | Error::HttpError(_)
          | Error::ParseError(_)
          | Error::NoContent
          | Error::InvalidJson(_) => 502
          , Error::Timeout(_) => 504
          , Error::ShapeMismatch(_) => 422
          , Error::MissingApiKey
          | Error::InvalidConfiguration(_)
          | Error::Other(_) => 500
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "OpenRouter API key is not configured")
            }
          , Error::InvalidConfiguration(_) => {
              write!(f, "Invalid configuration")
            }
          , Error::InvalidRequest(_) => {
              write!(f, "Invalid request body")
            }
          , Error::UpstreamStatus { status, .. } => {
              write!(f, "OpenRouter call failed with status {}", status)
            }
          , Error::HttpError(_) => {
              write!(f, "Failed to generate party plan")
            }
          , Error::Timeout(_) => {
              write!(f, "OpenRouter call timed out")
            }
          , Error::ParseError(_) => {
              write!(f, "OpenRouter response could not be parsed")
            }
          , Error::NoContent => {
              write!(f, "Model returned no content")
            }
          , Error::InvalidJson(_) => {
              write!(f, "Model output is not valid JSON")
            }
          , Error::ShapeMismatch(_) => {
              write!(f, "Model output does not match the party plan shape")
            }
          , Error::Other(_) => {
              write!(f, "Failed to generate party plan")
            }
        }
    }
}

impl std::error::Error for Error {}
