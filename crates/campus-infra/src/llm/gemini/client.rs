//! GeminiProvider -- concrete [`ConversationProvider`] implementation for
//! the Google Generative Language API.
//!
//! Sends the full turn history to `models/{model}:generateContent` with the
//! API key in the `x-goog-api-key` header. Non-streaming only: the sole
//! response unit is the full completion text.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use campus_core::llm::provider::ConversationProvider;
use campus_types::llm::{ProviderError, ProviderTurn};

use super::types::{
    Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};

/// Google Gemini conversation provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and only exposed when
/// constructing the request header. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    max_output_tokens: u32,
    temperature: f64,
}

impl GeminiProvider {
    /// Bounded per-call timeout. The provider call blocks one user turn,
    /// so a hung request must not hold the session open indefinitely.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Generative Language API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
            max_output_tokens: 1024,
            temperature: 0.7,
        }
    }

    /// The model this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the generation knobs.
    pub fn with_generation(mut self, max_output_tokens: u32, temperature: f64) -> Self {
        self.max_output_tokens = max_output_tokens;
        self.temperature = temperature;
        self
    }

    /// Build the full `generateContent` URL for the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert generic turns into the Gemini request body.
    fn to_request(&self, turns: &[ProviderTurn]) -> GenerateContentRequest {
        let contents = turns
            .iter()
            .map(|t| Content::text(t.role.to_string(), t.text.clone()))
            .collect();

        GenerateContentRequest {
            contents,
            generation_config: Some(GenerationConfig {
                max_output_tokens: Some(self.max_output_tokens),
                temperature: Some(self.temperature),
            }),
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug so the key-bearing
// struct is never printed wholesale.

impl ConversationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, turns: &[ProviderTurn]) -> Result<String, ProviderError> {
        let body = self.to_request(turns);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            // The API wraps failures in a JSON error envelope; fall back to
            // the raw body when it isn't one.
            let detail = serde_json::from_str::<ErrorResponse>(&error_body)
                .map(|e| e.error.message)
                .unwrap_or(error_body);

            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationFailed,
                429 => ProviderError::RateLimited,
                _ => ProviderError::Provider {
                    message: format!("HTTP {status}: {detail}"),
                },
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(format!("failed to parse response: {e}")))?;

        parsed.first_text().ok_or(ProviderError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_types::llm::TurnRole;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            "gemini-2.0-flash".to_string(),
        )
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(make_provider().name(), "gemini");
    }

    #[test]
    fn test_url_includes_model_and_action() {
        let provider = make_provider();
        assert_eq!(
            provider.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8081".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:8081/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_to_request_maps_roles() {
        let provider = make_provider();
        let turns = vec![
            ProviderTurn::user("campus context"),
            ProviderTurn::model("Understood."),
            ProviderTurn {
                role: TurnRole::User,
                text: "Where is the library?".to_string(),
            },
        ];

        let req = provider.to_request(&turns);
        assert_eq!(req.contents.len(), 3);
        assert_eq!(req.contents[0].role, "user");
        assert_eq!(req.contents[1].role, "model");
        assert_eq!(req.contents[2].parts[0].text, "Where is the library?");

        let config = req.generation_config.as_ref().unwrap();
        assert_eq!(config.max_output_tokens, Some(1024));
    }

    #[test]
    fn test_with_generation_overrides_knobs() {
        let provider = make_provider().with_generation(2048, 0.2);
        let req = provider.to_request(&[ProviderTurn::user("hi")]);
        let config = req.generation_config.unwrap();
        assert_eq!(config.max_output_tokens, Some(2048));
        assert!((config.temperature.unwrap() - 0.2).abs() < f64::EPSILON);
    }
}
