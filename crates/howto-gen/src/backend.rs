use async_trait::async_trait;
use howto_core::Result;
use tracing::info;

/// System instruction sent with every generation request. Demands clean
/// HTML with the fixed section layout the rest of the pipeline parses.
const SYSTEM_PROMPT: &str = r#"You are HowTo Ninja, an expert tutorial creator. Create comprehensive, SEO-optimized step-by-step guides.

IMPORTANT: Return ONLY clean HTML content without any markdown code blocks, backticks, or "html" tags.

Format your response as clean HTML with:
- H1 for title (include "How to" in the title)
- P for introduction (SEO-friendly, 2-3 sentences with relevant keywords)
- H2 for "Step-by-Step Instructions"
- OL with LI for each step (detailed, actionable steps with specific instructions)
- H2 for "Pro Tips & Best Practices"
- UL with LI for tips (practical advice and expert recommendations)
- H2 for "Common Mistakes to Avoid"
- UL with LI for warnings (what NOT to do)
- H2 for "Conclusion"
- P for conclusion (brief summary and encouragement)

Make it comprehensive, practical, and SEO-friendly. Use natural language with relevant keywords. Each step should be detailed and actionable."#;

/// A tutorial-markup source. One attempt per call; retries and fallback
/// policy live in the service, not here.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Human-readable name, e.g. "openai".
    fn name(&self) -> &str;

    /// Produce tutorial markup for a query.
    async fn generate_markup(&self, query: &str) -> Result<String>;
}

/// OpenAI-compatible chat-completions backend (works with OpenAI, Azure,
/// Together, vLLM, etc.)
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            max_tokens: 1200,
            temperature: 0.7,
        }
    }

    /// Use a custom base URL (for Azure, Together, vLLM, etc.)
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_limits(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl GenerationBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate_markup(&self, query: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": &self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT,
                },
                {
                    "role": "user",
                    "content": format!("Create a comprehensive tutorial for: {}", query),
                },
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        info!(model = %self.model, query, "requesting tutorial");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| howto_core::HowToError::Generation(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(howto_core::HowToError::Generation(format!(
                "HTTP {status}: {text}"
            )));
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| howto_core::HowToError::Generation(e.to_string()))?;

        extract_markup(&data)
    }
}

/// Pulls the assistant text out of a chat-completions response body.
/// A missing or empty `choices[0].message.content` counts as no response.
fn extract_markup(data: &serde_json::Value) -> Result<String> {
    let content = data["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string();

    if content.is_empty() {
        return Err(howto_core::HowToError::EmptyResponse);
    }

    Ok(content)
}
