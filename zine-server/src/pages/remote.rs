//! Remote implementation of `PageRepository`.
//!
//! Talks to the backend-as-a-service's entity API, addressed by
//! application id. The backend assigns the page id on create; the final
//! page is composed locally from the draft plus that id.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{ListOrder, PageRepository};
use zine_core::page::{Page, PageDraft, PageId};

/// HTTP client for the backend's page record.
#[derive(Clone)]
pub struct RemotePageRepository {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CreatePageResponse {
    id: PageId,
}

impl RemotePageRepository {
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

    fn entity_url(&self) -> String {
        format!("{}/apps/{}/entities/ZinePage", self.base_url, self.app_id)
    }
}

#[async_trait]
impl PageRepository for RemotePageRepository {
    async fn create(&self, draft: PageDraft) -> Result<Page> {
        let response = self
            .client
            .post(self.entity_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&draft)
            .send()
            .await
            .context("Failed to create page")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .context("Failed to read error response body")?;
            return Err(anyhow!("Page create API error: {} - {}", status, error_text));
        }

        let created: CreatePageResponse = response
            .json()
            .await
            .context("Failed to parse page create response")?;

        Ok(draft.into_page(created.id))
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<Page>> {
        let response = self
            .client
            .get(self.entity_url())
            .query(&[("order_by", order.query_value())])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to list pages")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .context("Failed to read error response body")?;
            return Err(anyhow!("Page list API error: {} - {}", status, error_text));
        }

        let pages: Vec<Page> = response
            .json()
            .await
            .context("Failed to parse page list response")?;

        Ok(pages)
    }
}
