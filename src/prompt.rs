//! Prompt templating for party plan generation

use log::trace;
use crate::providers::openrouter::{ChatMessage, ChatRequest};

pub const DEFAULT_THEME: &str = "themed party";
pub const PEOPLE_UNSPECIFIED: &str = "headcount to be decided";
pub const START_TIME_UNSPECIFIED: &str
  = "not specified; please assume a reasonable evening start time \
     yourself, relative times are fine";

/// Style guidance for each variant index
pub const VARIANT_STYLES: [&str; 3] = [
  "basic and relaxed"
, "interactive and lively"
, "ceremonial and atmospheric"
];

pub const SYSTEM_PROMPT: &str = r#"You are a party planning assistant.
Using the theme, start time and headcount supplied by the user, design a clear schedule timeline and a checklist of things to prepare for an in-person party.

You must return strict JSON in exactly this format (no extra nesting and no other fields):

{
  "title": "string, the party title",
  "vibe": "string, the overall atmosphere, e.g. casual / social and lively / cosy family",
  "durationText": "string, approximate duration, e.g. about 3 hours",
  "peopleText": "string, description of the headcount, e.g. around 10 people / headcount to be decided",
  "timeline": [
    {
      "time": "string, a time such as 19:30 / 20:00 / T+30'",
      "label": "string, name of the segment, e.g. Arrival & check-in",
      "detail": "string, what happens in this segment and how to run it"
    }
  ],
  "items": [
    "string, each entry describes one thing to prepare"
  ],
  "tips": "string, overall advice or things to watch out for"
}

Always:
1. Output valid JSON (no comments, no extra text).
2. Use 5 to 8 timeline entries, covering the flow from arrival to wrap-up.
3. If no start time is given, relative times such as T+0' and T+30' are fine.
4. Keep it practical and actionable, avoid empty generic advice."#;

/// Values substituted into the user prompt
#[derive(Debug, Clone, PartialEq)]
pub struct PromptValues
{   pub theme: String
  , pub people_text: String
  , pub start_time: String
  , pub variant: String
}

impl PromptValues
{   /// Apply the defaulting rules to an inbound request
    pub fn from_request(req: &crate::request::PlanRequest) -> Self
    {   let theme = req.theme_text()
          .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let people_text = req.people_text()
          .map(|p| people_text(&p))
          .unwrap_or_else(|| PEOPLE_UNSPECIFIED.to_string());
        let start_time = req.start_time_text()
          .unwrap_or_else(|| START_TIME_UNSPECIFIED.to_string());

        PromptValues
        {   theme
          , people_text
          , start_time
          , variant: req.variant_text()
        }
    }
}

/// Headcount description for a supplied value
pub fn people_text(people: &str) -> String
{   format!("{} people approximately", people)
}

/// Style guidance for a known variant, `None` otherwise
pub fn variant_style(index: i64) -> Option<&'static str>
{   usize::try_from(index).ok()
      .and_then(|i| VARIANT_STYLES.get(i).copied())
}

/// Render the user message
pub fn user_prompt(values: &PromptValues) -> String
{   let legend = VARIANT_STYLES.iter()
      .enumerate()
      .map(|(i, style)| format!("{} {}", i, style))
      .collect::<Vec<_>>()
      .join(", ");

    format!(
      "Party details:\n\
       - Theme: {theme}\n\
       - Headcount: {people}\n\
       - Start time: {start}\n\
       - Style variant: {variant} ({legend})\n\
       \n\
       Produce a plan in the JSON format given earlier.\n\
       Note: output JSON only, no explanation, and do not wrap it in a code block."
    , theme = values.theme
    , people = values.people_text
    , start = values.start_time
    , variant = values.variant
    , legend = legend
    )
}

/// Build the complete upstream payload for one request
pub fn build_chat_request(
  req: &crate::request::PlanRequest
, config: &crate::config::PlannerConfig
) -> ChatRequest
{   let values = PromptValues::from_request(req);
    trace!("Prompt values: {:?}", values);

    ChatRequest
    {   model: config.model.clone()
      , messages: vec![
          ChatMessage::system(SYSTEM_PROMPT)
        , ChatMessage::user(user_prompt(&values))
        ]
      , temperature: Some(config.temperature)
    }
}
