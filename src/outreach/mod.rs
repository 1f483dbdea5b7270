// src/outreach/mod.rs
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::OutreachConfig;
use crate::models::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentVideo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachRequest {
    pub channel_name: String,
    pub description: String,
    pub recent_videos: Vec<RecentVideo>,
    pub owner_name: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachMessage {
    pub subject_line: String,
    pub first_line: String,
}

/// Drafts the opening of an outreach email for a creator. Uses a
/// chat-completion call when an API key is available and falls back to a
/// deterministic template otherwise; composing never fails.
pub struct OutreachComposer {
    config: OutreachConfig,
    api_key: Option<String>,
    client: Client,
}

impl OutreachComposer {
    pub fn new(config: OutreachConfig) -> Self {
        let api_key = std::env::var("OUTREACH_API_KEY").ok();
        if api_key.is_none() {
            debug!("No OUTREACH_API_KEY set, outreach will use the template fallback");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            api_key,
            client,
        }
    }

    pub async fn compose(&self, request: &OutreachRequest) -> OutreachMessage {
        let api_key = request.api_key.clone().or_else(|| self.api_key.clone());

        let Some(api_key) = api_key else {
            return template_message(request);
        };

        match self.generate(request, &api_key).await {
            Ok(message) => message,
            Err(e) => {
                warn!(
                    "Outreach generation failed for {}: {}. Using template fallback.",
                    request.channel_name, e
                );
                template_message(request)
            }
        }
    }

    async fn generate(&self, request: &OutreachRequest, api_key: &str) -> Result<OutreachMessage> {
        let videos = request
            .recent_videos
            .iter()
            .map(|video| format!("- {}: {}", video.title, video.description))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "Channel: {}\nAbout: {}\nOwner: {}\nRecent videos:\n{}\n\n\
             Write a personalized outreach email opener for this creator. \
             Respond with JSON: {{\"subject_line\": ..., \"first_line\": ...}}",
            request.channel_name,
            request.description,
            request.owner_name.as_deref().unwrap_or("unknown"),
            videos
        );

        let payload = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": "You write short, specific creator outreach emails."},
                {"role": "user", "content": prompt}
            ],
            "max_tokens": 200
        });

        debug!("Sending outreach generation request to {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("Generation API error: {}", response.status()).into());
        }

        let body: Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("Generation response missing content")?;

        let message: OutreachMessage = serde_json::from_str(content.trim())?;
        Ok(message)
    }
}

/// Deterministic fallback derived from the first recent-video title and the
/// owner's first name.
fn template_message(request: &OutreachRequest) -> OutreachMessage {
    let first_name = request
        .owner_name
        .as_deref()
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or(&request.channel_name)
        .to_string();

    match request.recent_videos.first() {
        Some(video) => OutreachMessage {
            subject_line: format!("Loved \"{}\"", video.title),
            first_line: format!(
                "Hi {}, your video \"{}\" caught my attention and I had to reach out.",
                first_name, video.title
            ),
        },
        None => OutreachMessage {
            subject_line: format!("Reaching out about {}", request.channel_name),
            first_line: format!(
                "Hi {}, I came across {} and I had to reach out.",
                first_name, request.channel_name
            ),
        },
    }
}
