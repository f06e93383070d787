//! Table Service Client
//!
//! A PostgREST client for the hosted table service, covering the reads the
//! dashboard needs.

use crate::consts::dashboard_consts::{network, tables};
use crate::environment::Environment;
use crate::models::{FeedbackRecord, StoredItem, UserProfile};
use crate::store::TableStore;
use crate::store::error::StoreError;
use crate::store::query::{Direction, PageRequest, Query};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with crate version
const USER_AGENT: &str = concat!("transcript-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    environment: Environment,
}

impl StoreClient {
    pub fn new(environment: Environment) -> Result<Self, StoreError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .user_agent(USER_AGENT)
            .default_headers(Self::auth_headers(environment.api_key()))
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn auth_headers(api_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // A key with bytes that are not valid in a header is left out; the
        // service then answers 401, which surfaces through the normal path.
        if let Ok(value) = HeaderValue::from_str(api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(mut value) = HeaderValue::from_str(&format!("Bearer {}", api_key)) {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    fn build_url(&self, query: &Query) -> String {
        format!(
            "{}/{}?{}",
            self.environment.rest_url(),
            query.table_name(),
            query.to_query_string()
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, StoreError> {
        if !response.status().is_success() {
            return Err(StoreError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_rows<T: DeserializeOwned>(&self, query: Query) -> Result<Vec<T>, StoreError> {
        let url = self.build_url(&query);
        log::debug!(target: "store", "GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    pub(crate) fn recent_users_query(limit: u32) -> Query {
        Query::table(tables::USER_PROFILES)
            .select(tables::RECENT_USER_COLUMNS)
            .order("created_at", Direction::Desc)
            .limit(limit)
    }

    pub(crate) fn all_users_query() -> Query {
        Query::table(tables::USER_PROFILES)
            .select(tables::ALL_USER_COLUMNS)
            .order("email", Direction::Asc)
    }

    pub(crate) fn feedback_query(user_id: &str, page: PageRequest) -> Query {
        Query::table(tables::TRANSCRIPT_FEEDBACK)
            .eq("user_id", user_id)
            .order("created_at", Direction::Desc)
            .page(page)
    }

    pub(crate) fn items_query(user_id: &str, page: PageRequest) -> Query {
        Query::table(tables::STORED_ITEMS)
            .eq("user_id", user_id)
            .order("created_at", Direction::Desc)
            .page(page)
    }
}

#[async_trait::async_trait]
impl TableStore for StoreClient {
    async fn recent_users(&self, limit: u32) -> Result<Vec<UserProfile>, StoreError> {
        self.get_rows(Self::recent_users_query(limit)).await
    }

    async fn all_users(&self) -> Result<Vec<UserProfile>, StoreError> {
        self.get_rows(Self::all_users_query()).await
    }

    async fn feedback_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<FeedbackRecord>, StoreError> {
        self.get_rows(Self::feedback_query(user_id, page)).await
    }

    async fn items_for_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<StoredItem>, StoreError> {
        self.get_rows(Self::items_query(user_id, page)).await
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live table service.
mod live_store_tests {
    use crate::environment::Environment;
    use crate::store::{PageRequest, StoreClient, TableStore};

    fn client() -> StoreClient {
        let env = Environment::from_env().expect("SUPABASE_URL and SUPABASE_ANON_KEY must be set");
        StoreClient::new(env).unwrap()
    }

    #[tokio::test]
    #[ignore] // This test requires a live table service.
    /// Should return at most ten users, newest first.
    async fn test_recent_users() {
        let users = client().recent_users(10).await.unwrap();
        assert!(users.len() <= 10);
    }

    #[tokio::test]
    #[ignore] // This test requires a live table service.
    /// Should fetch feedback and items for the first user.
    async fn test_user_detail() {
        let client = client();
        let users = client.all_users().await.unwrap();
        if let Some(user) = users.first() {
            let feedback = client
                .feedback_for_user(&user.user_id, PageRequest::all())
                .await
                .unwrap();
            assert!(feedback.iter().all(|f| f.user_id == user.user_id));
            let items = client
                .items_for_user(&user.user_id, PageRequest::first(Some(5)))
                .await
                .unwrap();
            assert!(items.len() <= 5);
        }
    }
}
