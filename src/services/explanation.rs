use crate::config::ExplanationConfig;
use crate::error::{AppError, Result};
use crate::models::{HealthProfile, Recommendation, RerouteOption, ScoredRoute};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const CANNED_EXPLANATION: &str = "This route balances health and convenience.";
const CANNED_SAFETY_TIPS: [&str; 2] = ["Wear mask in high AQI areas", "Stay hydrated"];

/// Deterministic reply used when no model is configured or the model call
/// fails: recommend the top-ranked route, list the rest as alternatives.
pub fn canned_recommendation(ranked: &[ScoredRoute]) -> Recommendation {
    Recommendation {
        recommended_route_id: ranked.first().map(|r| r.id().to_string()),
        explanation: CANNED_EXPLANATION.to_string(),
        safety_tips: CANNED_SAFETY_TIPS.iter().map(|t| t.to_string()).collect(),
        alternatives: ranked.iter().skip(1).map(|r| r.id().to_string()).collect(),
    }
}

/// Turns a ranked list into a natural-language recommendation
#[derive(Clone)]
pub struct ExplanationService {
    live: Option<GeminiClient>,
}

impl ExplanationService {
    pub fn canned() -> Self {
        ExplanationService { live: None }
    }

    pub fn new(config: Option<&ExplanationConfig>) -> Result<Self> {
        let live = config.map(GeminiClient::new).transpose()?;
        Ok(ExplanationService { live })
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Never fails: model errors fall back to [`canned_recommendation`]
    pub async fn explain(
        &self,
        ranked: &[ScoredRoute],
        health: &HealthProfile,
        reroute_options: &[RerouteOption],
    ) -> Recommendation {
        let Some(ref client) = self.live else {
            return canned_recommendation(ranked);
        };

        match client.generate(ranked, health, reroute_options).await {
            Ok(recommendation) => recommendation,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    routes = ranked.len(),
                    "Explanation service failed: {}. Using canned recommendation.",
                    e
                );
                canned_recommendation(ranked)
            }
        }
    }
}

#[derive(Clone)]
struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    fn new(config: &ExplanationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(GeminiClient {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    async fn generate(
        &self,
        ranked: &[ScoredRoute],
        health: &HealthProfile,
        reroute_options: &[RerouteOption],
    ) -> Result<Recommendation> {
        let prompt = build_prompt(ranked, health, reroute_options)?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.0,
                "maxOutputTokens": 256,
                "responseMimeType": "application/json",
            },
        });

        tracing::debug!(model = %self.model, routes = ranked.len(), "Explanation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::Explanation(format!("Request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Explanation(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Explanation(format!("Failed to parse response: {}", e)))?;

        let text = reply
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| AppError::Explanation("No candidates returned".to_string()))?;

        parse_recommendation(text)
    }
}

fn build_prompt(
    ranked: &[ScoredRoute],
    health: &HealthProfile,
    reroute_options: &[RerouteOption],
) -> Result<String> {
    let encode = |value: serde_json::Result<String>| {
        value.map_err(|e| AppError::Internal(format!("Failed to encode prompt context: {}", e)))
    };
    let routes = encode(serde_json::to_string(ranked))?;
    let profile = encode(serde_json::to_string(health))?;
    let options = encode(serde_json::to_string(reroute_options))?;

    Ok(format!(
        r#"SYSTEM:
You must NOT invent any numbers. Use only the routes provided.

USER:
Recommend the healthiest route.

CONTEXT:
ROUTES: {routes}
HEALTH_PROFILE: {profile}
REROUTE_OPTIONS: {options}

Return strictly JSON:
{{
 "recommendedRouteId": "...",
 "explanation": "...",
 "safetyTips": [...],
 "alternatives": [...]
}}"#
    ))
}

/// Parse model output, tolerating a surrounding Markdown code fence
fn parse_recommendation(text: &str) -> Result<Recommendation> {
    let trimmed = text.trim();
    let body = match trimmed.strip_prefix("```") {
        Some(fenced) => {
            let after_tag = fenced.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
            after_tag.trim_end().trim_end_matches("```")
        }
        None => trimmed,
    };

    serde_json::from_str(body)
        .map_err(|e| AppError::Explanation(format!("Unparseable recommendation: {}", e)))
}

// Generative Language API response types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}
