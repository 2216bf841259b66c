//! Client for the remote generation endpoints.
//!
//! The backend exposes two integrations under the application's base path:
//! language generation (`invoke-llm`) and image generation
//! (`generate-image`). Both take a single prompt. Calls are made one at a
//! time; there is no retry and no cancellation.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Client for the generation endpoints, addressed by application id.
#[derive(Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct InvokeTextResponse {
    response: String,
}

/// Result of an image generation call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

impl GenerationClient {
    pub fn new(base_url: String, app_id: String, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("unsettling-zine/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            app_id,
            api_key,
        }
    }

    /// Invoke the language-generation endpoint with a prompt, returning the
    /// generated text.
    pub async fn invoke_text(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/apps/{}/integrations/invoke-llm",
            self.base_url, self.app_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&InvokeRequest { prompt })
            .send()
            .await
            .context("Failed to invoke language generation")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .context("Failed to read error response body")?;
            return Err(anyhow!(
                "Language generation API error: {} - {}",
                status,
                error_text
            ));
        }

        let invoke_response: InvokeTextResponse = response
            .json()
            .await
            .context("Failed to parse language generation response")?;

        Ok(invoke_response.response)
    }

    /// Invoke the image-generation endpoint with a prompt, returning the
    /// location of the generated image.
    pub async fn invoke_image(&self, prompt: &str) -> Result<GeneratedImage> {
        let url = format!(
            "{}/apps/{}/integrations/generate-image",
            self.base_url, self.app_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&InvokeRequest { prompt })
            .send()
            .await
            .context("Failed to invoke image generation")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .context("Failed to read error response body")?;
            return Err(anyhow!(
                "Image generation API error: {} - {}",
                status,
                error_text
            ));
        }

        let image: GeneratedImage = response
            .json()
            .await
            .context("Failed to parse image generation response")?;

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GenerationClient {
        GenerationClient::new(
            server.uri(),
            "app123".to_string(),
            "secret-key".to_string(),
        )
    }

    #[tokio::test]
    async fn test_invoke_text_posts_prompt_and_returns_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/apps/app123/integrations/invoke-llm"))
            .and(header("Authorization", "Bearer secret-key"))
            .and(body_json(json!({ "prompt": "write something" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "response": "a musing" })),
            )
            .mount(&server)
            .await;

        let musing = client_for(&server)
            .invoke_text("write something")
            .await
            .unwrap();
        assert_eq!(musing, "a musing");
    }

    #[tokio::test]
    async fn test_invoke_image_returns_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/apps/app123/integrations/generate-image"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "url": "https://img.example/out.png" })),
            )
            .mount(&server)
            .await;

        let image = client_for(&server).invoke_image("some art").await.unwrap();
        assert_eq!(image.url, "https://img.example/out.png");
    }

    #[tokio::test]
    async fn test_invoke_text_surfaces_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/apps/app123/integrations/invoke-llm"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .invoke_text("write something")
            .await
            .unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Language generation API error"), "{message}");
        assert!(message.contains("boom"), "{message}");
    }
}
