use crate::models::{FeedbackRecord, StoredItem, UserProfile};
use crate::store::error::StoreError;

pub(crate) mod client;
pub use client::StoreClient;
pub mod error;
pub mod query;
pub use query::PageRequest;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the hosted tables the dashboard displays.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Most recently created users, newest first.
    async fn recent_users(&self, limit: u32) -> Result<Vec<UserProfile>, StoreError>;

    /// Every user, ordered by email.
    async fn all_users(&self) -> Result<Vec<UserProfile>, StoreError>;

    /// Feedback rows for one user, newest first.
    async fn feedback_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<FeedbackRecord>, StoreError>;

    /// Stored items for one user, newest first.
    async fn items_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<StoredItem>, StoreError>;
}
