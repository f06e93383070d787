//! Dashboard controller
//!
//! Issues the read queries and folds their results into [`DashboardState`].
//! Each query runs in its own task and reports a [`FetchOutcome`] over a
//! channel; only the owner of the controller ever mutates state.

use crate::consts::dashboard_consts::{messages, tables};
use crate::models::{FeedbackRecord, StoredItem, UserProfile};
use crate::store::error::StoreError;
use crate::store::{PageRequest, TableStore};
use crate::ui::dashboard::DashboardState;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Feedback and items for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetail {
    pub feedback: Vec<FeedbackRecord>,
    pub items: Vec<StoredItem>,
}

/// Result of one spawned fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    RecentUsers(Result<Vec<UserProfile>, StoreError>),
    AllUsers(Result<Vec<UserProfile>, StoreError>),
    Detail {
        generation: u64,
        email: String,
        result: Result<UserDetail, StoreError>,
    },
}

/// Local failures resolving a selection, before any query is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetailError {
    #[error("No user selected")]
    NoSelection,
    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Fetches feedback and items concurrently. Fails if either query fails.
pub async fn fetch_user_detail(
    store: &dyn TableStore,
    user_id: &str,
    page: PageRequest,
) -> Result<UserDetail, StoreError> {
    let (feedback, items) = futures::future::join(
        store.feedback_for_user(user_id, page),
        store.items_for_user(user_id, page),
    )
    .await;
    Ok(UserDetail {
        feedback: feedback?,
        items: items?,
    })
}

pub struct DashboardController {
    store: Arc<dyn TableStore>,
    state: DashboardState,
    /// Last generation handed out to a detail request.
    generation: u64,
    /// Spawned fetches whose outcome has not been applied yet.
    in_flight: usize,
    outcome_sender: mpsc::UnboundedSender<FetchOutcome>,
    outcome_receiver: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl DashboardController {
    pub fn new(store: Arc<dyn TableStore>, state: DashboardState) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::unbounded_channel();
        Self {
            store,
            state,
            generation: 0,
            in_flight: 0,
            outcome_sender,
            outcome_receiver,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Number of fetches still outstanding.
    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn spawn<F>(&mut self, fetch: F)
    where
        F: Future<Output = FetchOutcome> + Send + 'static,
    {
        self.in_flight += 1;
        let sender = self.outcome_sender.clone();
        tokio::spawn(async move {
            let _ = sender.send(fetch.await);
        });
    }

    /// Fetch the newest users for the recent-users strip.
    pub fn load_recent_users(&mut self) {
        log::debug!(target: "users", "Fetching recent users");
        let store = Arc::clone(&self.store);
        self.spawn(async move {
            FetchOutcome::RecentUsers(store.recent_users(tables::RECENT_USERS_LIMIT).await)
        });
    }

    /// Fetch every user for the selector.
    pub fn load_all_users(&mut self) {
        log::info!(target: "users", "Fetching users");
        let store = Arc::clone(&self.store);
        self.spawn(async move { FetchOutcome::AllUsers(store.all_users().await) });
    }

    /// Selects a user by email. An empty email clears the selection.
    pub fn select_user(&mut self, email: &str) -> Result<(), DetailError> {
        if email.is_empty() {
            self.state.clear_selection();
            return Ok(());
        }
        self.state.select_email(email);
        self.load_user_detail().map(|_| ())
    }

    /// Records a selection without fetching. The fetch starts once users load.
    pub fn preselect(&mut self, email: &str) {
        self.state.select_email(email);
    }

    /// Fetch feedback and items for the selected email.
    ///
    /// Resolves the user among already loaded users; no query is sent when
    /// none matches. Returns the generation tagging the spawned request.
    pub fn load_user_detail(&mut self) -> Result<u64, DetailError> {
        let page = self.state.page;
        self.load_user_detail_at(page)
    }

    /// Like [`Self::load_user_detail`] for `page`. The page only becomes
    /// current once the user resolves.
    fn load_user_detail_at(&mut self, page: PageRequest) -> Result<u64, DetailError> {
        let email = self.state.selected_email.clone();
        if email.is_empty() {
            return Err(DetailError::NoSelection);
        }
        let Some(user_id) = self
            .state
            .find_user(&email)
            .map(|user| user.user_id.clone())
        else {
            log::warn!(target: "detail", "No loaded user has email {}", email);
            self.state.fail_detail_locally(messages::USER_NOT_FOUND);
            return Err(DetailError::UserNotFound(email));
        };

        self.generation += 1;
        let generation = self.generation;
        self.state.page = page;
        self.state.begin_detail(generation, user_id.clone());
        log::info!(
            target: "detail",
            "Fetching feedback and items for {} (page {})",
            email,
            page.number()
        );

        let store = Arc::clone(&self.store);
        self.spawn(async move {
            let result = fetch_user_detail(store.as_ref(), &user_id, page).await;
            FetchOutcome::Detail {
                generation,
                email,
                result,
            }
        });
        Ok(generation)
    }

    /// Move to the next page and reload. `false` when paging is off, nothing
    /// is selected or the last load came back short of a full page.
    pub fn next_page(&mut self) -> bool {
        if !self.state.has_more_pages() {
            return false;
        }
        match self.state.page.next() {
            Some(page) => self.reload_page(page),
            None => false,
        }
    }

    /// Move to the previous page and reload. `false` at the first page.
    pub fn previous_page(&mut self) -> bool {
        match self.state.page.previous() {
            Some(page) => self.reload_page(page),
            None => false,
        }
    }

    fn reload_page(&mut self, page: PageRequest) -> bool {
        if self.state.selected_email.is_empty() || self.state.is_loading() {
            return false;
        }
        self.load_user_detail_at(page).is_ok()
    }

    /// Apply every outcome that has already arrived. Returns how many.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait until every spawned fetch, including ones triggered while
    /// applying outcomes, has been applied.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.outcome_receiver.recv().await {
                Some(outcome) => {
                    self.in_flight -= 1;
                    self.apply(outcome);
                }
                None => break,
            }
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::RecentUsers(Ok(users)) => {
                log::debug!(target: "users", "Loaded {} recent users", users.len());
                self.state.set_recent_users(users);
            }
            FetchOutcome::RecentUsers(Err(e)) => {
                // Not surfaced to the operator.
                log::error!(target: "users", "Error fetching recent users: {}", e);
            }
            FetchOutcome::AllUsers(Ok(users)) => {
                log::info!(target: "users", "Loaded {} users", users.len());
                self.state.set_users(users);
                if !self.state.selected_email.is_empty() {
                    // A miss is already recorded in state
                    let _ = self.load_user_detail();
                }
            }
            FetchOutcome::AllUsers(Err(e)) => {
                log::error!(target: "users", "Error fetching users: {}", e);
                self.state.set_error(messages::FAILED_TO_LOAD_USERS);
            }
            FetchOutcome::Detail {
                generation,
                email,
                result: Ok(detail),
            } => {
                let (feedback_count, item_count) = (detail.feedback.len(), detail.items.len());
                if self
                    .state
                    .finish_detail(generation, detail.feedback, detail.items)
                {
                    log::info!(
                        target: "detail",
                        "Loaded {} feedback records and {} items for {}",
                        feedback_count,
                        item_count,
                        email
                    );
                } else {
                    log::debug!(target: "detail", "Discarding stale response for {}", email);
                }
            }
            FetchOutcome::Detail {
                generation,
                email,
                result: Err(e),
            } => {
                if self.state.fail_detail(generation, messages::FAILED_TO_LOAD_DATA) {
                    log::log!(
                        target: "detail",
                        log::Level::from(e.classify()),
                        "Error fetching data for {}: {}",
                        email,
                        e
                    );
                } else {
                    log::debug!(
                        target: "detail",
                        "Discarding stale failure for {}: {}",
                        email,
                        e
                    );
                }
            }
        }
    }
}
