//! Repository abstraction for persisted zine pages.
//!
//! This module defines the `PageRepository` trait that abstracts the
//! backend's two operations on the page record: create and list. The
//! production implementation talks to the remote backend-as-a-service;
//! the in-memory implementation backs tests.
//!
//! Pages are immutable: there is deliberately no update or delete.

mod memory;
mod remote;

pub use memory::InMemoryPageRepository;
pub use remote::RemotePageRepository;

use anyhow::Result;
use async_trait::async_trait;

use zine_core::page::{Page, PageDraft};

/// Sort order for listing pages, by backend-assigned creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    CreatedAsc,
    CreatedDesc,
}

impl ListOrder {
    /// The backend's `order_by` query value ("-" prefix means descending).
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "created_date",
            Self::CreatedDesc => "-created_date",
        }
    }
}

/// Repository trait for the backend's page record.
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Persist a draft; the backend assigns the id.
    async fn create(&self, draft: PageDraft) -> Result<Page>;

    /// List every persisted page in the given creation-time order.
    async fn list(&self, order: ListOrder) -> Result<Vec<Page>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_query_values() {
        assert_eq!(ListOrder::CreatedAsc.query_value(), "created_date");
        assert_eq!(ListOrder::CreatedDesc.query_value(), "-created_date");
    }
}
