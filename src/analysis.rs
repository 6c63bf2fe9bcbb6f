//! Market analysis text generation.
//!
//! The generator is an explicitly constructed client. Build it once at
//! startup and pass it to whatever needs it.

use crate::config::Config;
use crate::search::Business;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no business data to analyze")]
    NoData,

    #[error("no API token configured for the analysis model")]
    MissingToken,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Produces prose about a set of businesses.
pub trait AnalysisClient: Send + Sync {
    fn generate(
        &self,
        businesses: &[Business],
        category: &str,
        location: &str,
    ) -> Result<String, AnalysisError>;
}

/// Render the analyst prompt for a business list.
pub fn build_prompt(businesses: &[Business], category: &str, location: &str) -> String {
    let data = businesses
        .iter()
        .map(|b| format!("- Name: {}, Type: {}", b.name, b.category))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a professional geo-spatial business intelligence analyst.\n\
         Write a concise, data-driven analysis for a marketing manager.\n\n\
         Businesses found nearby:\n{data}\n\n\
         Using only the data above:\n\
         1. **Summary:** Briefly summarize the market for '{category}' in '{location}'.\n\
         2. **Market Landscape:** Comment on the density and distribution of these businesses.\n\
         3. **Conclusion:** Give a short, professional conclusion with a strategic recommendation.\n\n\
         Format the answer as clean markdown."
    )
}

// ─── Hugging Face chat-completion client ─────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct HuggingFaceClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.hf_timeout())
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            endpoint: config.hf_endpoint.clone(),
            model: config.hf_model.clone(),
            token: config.hf_token.clone().filter(|t| !t.trim().is_empty()),
        }
    }
}

impl AnalysisClient for HuggingFaceClient {
    fn generate(
        &self,
        businesses: &[Business],
        category: &str,
        location: &str,
    ) -> Result<String, AnalysisError> {
        if businesses.is_empty() {
            return Err(AnalysisError::NoData);
        }
        let token = self.token.as_deref().ok_or(AnalysisError::MissingToken)?;

        let prompt = build_prompt(businesses, category, location);
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", token))
            .send_json(&request)
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let parsed: ChatResponse =
            serde_json::from_reader(response.into_reader()).map_err(|e| {
                if e.is_io() {
                    AnalysisError::Network(e.to_string())
                } else {
                    AnalysisError::InvalidResponse(e.to_string())
                }
            })?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AnalysisError::InvalidResponse("no completion text".into()))?;

        tracing::info!(model = %self.model, chars = text.len(), "generated analysis");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafes() -> Vec<Business> {
        vec![
            Business {
                name: "Cafe Coffee Day".into(),
                category: "cafe".into(),
            },
            Business {
                name: "Starbucks".into(),
                category: "coffee".into(),
            },
        ]
    }

    #[test]
    fn test_prompt_lists_each_business() {
        let prompt = build_prompt(&cafes(), "cafe", "Banjara Hills");
        assert!(prompt.contains(
            "- Name: Cafe Coffee Day, Type: cafe\n- Name: Starbucks, Type: coffee"
        ));
        assert!(prompt.contains("'cafe' in 'Banjara Hills'"));
        assert!(prompt.contains("**Market Landscape:**"));
    }

    #[test]
    fn test_empty_data_makes_no_request() {
        let config = Config {
            hf_endpoint: "http://127.0.0.1:1/unreachable".into(),
            hf_token: Some("t".into()),
            ..Config::default()
        };
        let client = HuggingFaceClient::new(&config);
        assert!(matches!(client.generate(&[], "cafe", "x"), Err(AnalysisError::NoData)));
    }

    #[test]
    fn test_missing_token() {
        let config = Config {
            hf_endpoint: "http://127.0.0.1:1/unreachable".into(),
            hf_token: Some("   ".into()),
            ..Config::default()
        };
        let client = HuggingFaceClient::new(&config);
        assert!(matches!(
            client.generate(&cafes(), "cafe", "x"),
            Err(AnalysisError::MissingToken)
        ));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "m",
            messages: [ChatMessage { role: "user", content: "hi" }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["max_tokens"], 1024);
    }
}
