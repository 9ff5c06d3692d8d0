use serde::{Deserialize, Serialize};
use log::{debug, trace, error};
use std::time::Duration;

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
}

// ===== OpenRouter Client =====

/// Single-shot chat completion client for OpenRouter
#[derive(Debug, Clone)]
pub struct OpenRouterClient
{   api_key: Option<String>
  , endpoint: String
  , referer: String
  , app_title: String
  , timeout: Duration
  , http_client: reqwest::Client
}

impl OpenRouterClient
{   /// Create a client with a bounded request timeout
    pub fn new(config: &crate::config::PlannerConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating OpenRouterClient for {}", config.endpoint);
        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
          .timeout(timeout)
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(OpenRouterClient
        {   api_key: config.api_key.clone()
          , endpoint: config.endpoint.clone()
          , referer: config.referer.clone()
          , app_title: config.app_title.clone()
          , timeout
          , http_client
        })
    }

    fn get_api_key(&self) -> Result<&str, crate::error::Error>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("No OpenRouter API key configured");
          crate::error::Error::MissingApiKey
        })
    }

    /// Send one chat completion and return the first choice's text.
    ///
    /// Exactly one HTTP request is made. Dropping the returned future
    /// aborts the in-flight request.
    pub async fn complete(
      &self
    , request: &ChatRequest
    ) -> Result<String, crate::error::Error>
    {   debug!("Sending chat completion for model: {}", request.model);
        let api_key = self.get_api_key()?;

        trace!("OpenRouter request: {:?}", request);

        let response = self.http_client
          .post(&self.endpoint)
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .header("HTTP-Referer", &self.referer)
          .header("X-Title", &self.app_title)
          .json(request)
          .send()
          .await
          .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        trace!("OpenRouter response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenRouter error: {} {}", status, error_text);
            return Err(crate::error::Error::UpstreamStatus
            {   status: status.as_u16()
              , body: error_text
            });
        }

        let body = response.text().await
          .map_err(|e| self.transport_error(e))?;
        extract_content(&body)
    }

    fn transport_error(&self, e: reqwest::Error) -> crate::error::Error
    {   if e.is_timeout()
        {   error!("OpenRouter timed out after {:?}", self.timeout);
            crate::error::Error::Timeout(self.timeout)
        } else
        {   error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
        }
    }
}

/// Pull `choices[0].message.content` out of a completion envelope.
/// Missing, null, non-string and empty content are all `NoContent`.
pub fn extract_content(body: &str)
  -> Result<String, crate::error::Error>
{   let envelope: serde_json::Value
      = serde_json::from_str(body).map_err(|e| {
        error!("Parse error: {}", e);
        crate::error::Error::ParseError(e.to_string())
      })?;

    envelope.pointer("/choices/0/message/content")
      .and_then(|c| c.as_str())
      .filter(|c| !c.is_empty())
      .map(|c| c.to_string())
      .ok_or_else(|| {
        error!("No content in OpenRouter response");
        crate::error::Error::NoContent
      })
}
