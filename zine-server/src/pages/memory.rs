//! In-memory implementation of `PageRepository`.
//!
//! Assigns sequential ids and creation timestamps. All pages are lost on
//! restart; tests use this in place of the remote backend.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ListOrder, PageRepository};
use zine_core::page::{Page, PageDraft, PageId};

/// In-memory page repository.
#[derive(Default)]
pub struct InMemoryPageRepository {
    pages: RwLock<Vec<Page>>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn create(&self, draft: PageDraft) -> Result<Page> {
        let mut pages = self.pages.write().await;
        let id = PageId(format!("page_{}", pages.len() + 1));
        let mut page = draft.into_page(id);
        page.created_date = Some(Utc::now());
        pages.push(page.clone());
        Ok(page)
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<Page>> {
        let pages = self.pages.read().await;
        let mut listed: Vec<Page> = pages.clone();
        // Insertion order is creation order.
        if order == ListOrder::CreatedDesc {
            listed.reverse();
        }
        Ok(listed)
    }
}
