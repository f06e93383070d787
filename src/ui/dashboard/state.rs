//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use super::utils::PlaceholderMode;
use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::models::{FeedbackRecord, StoredItem, UserProfile};
use crate::store::PageRequest;

use std::collections::VecDeque;

/// Progress of the feedback/items fetch for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// Nothing selected.
    Idle,
    /// A fetch tagged with `generation` is in flight.
    Loading { generation: u64 },
    Success,
    Error,
}

/// Display settings fixed for the session.
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    pub placeholder_mode: PlaceholderMode,
    pub with_background_color: bool,
    pub page_size: Option<u32>,
}

/// Everything the dashboard renders.
#[derive(Debug)]
pub struct DashboardState {
    /// Host of the table service, for the header.
    pub service_host: String,
    /// Strip of the newest users.
    pub recent_users: Vec<UserProfile>,
    /// Every user, ordered by email. Backs the selector.
    pub users: Vec<UserProfile>,
    /// Selected email; empty when nothing is selected.
    pub selected_email: String,
    /// Feedback for the last successfully loaded selection.
    pub feedback: Vec<FeedbackRecord>,
    /// Items for the last successfully loaded selection.
    pub items: Vec<StoredItem>,
    /// Generic user-visible error message.
    pub error: Option<String>,
    /// Window applied to feedback and items.
    pub page: PageRequest,
    pub placeholder_mode: PlaceholderMode,
    pub with_background_color: bool,
    /// Developer log entries, newest last.
    pub activity_logs: VecDeque<Event>,
    /// Highlighted selector option; 0 is the placeholder entry.
    pub selector_cursor: usize,
    /// Animation tick counter
    pub tick: usize,

    detail_phase: DetailPhase,
    /// Whether the last loaded page came back full.
    more_pages: bool,
    /// User id the in-flight or last loaded detail belongs to.
    detail_user_id: Option<String>,
}

impl DashboardState {
    pub fn new(service_host: String, display: DisplayConfig) -> Self {
        Self {
            service_host,
            recent_users: Vec::new(),
            users: Vec::new(),
            selected_email: String::new(),
            feedback: Vec::new(),
            items: Vec::new(),
            error: None,
            page: PageRequest::first(display.page_size),
            placeholder_mode: display.placeholder_mode,
            with_background_color: display.with_background_color,
            activity_logs: VecDeque::new(),
            selector_cursor: 0,
            tick: 0,
            detail_phase: DetailPhase::Idle,
            more_pages: false,
            detail_user_id: None,
        }
    }

    pub fn detail_phase(&self) -> DetailPhase {
        self.detail_phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.detail_phase, DetailPhase::Loading { .. })
    }

    /// A page after the current one may hold rows.
    pub fn has_more_pages(&self) -> bool {
        self.more_pages
    }

    pub(crate) fn set_more_pages(&mut self, more_pages: bool) {
        self.more_pages = more_pages;
    }

    pub fn detail_user_id(&self) -> Option<&str> {
        self.detail_user_id.as_deref()
    }

    pub(crate) fn set_detail_phase(&mut self, phase: DetailPhase) {
        self.detail_phase = phase;
    }

    pub(crate) fn set_detail_user_id(&mut self, user_id: Option<String>) {
        self.detail_user_id = user_id;
    }

    /// Loaded user whose email matches exactly.
    pub fn find_user(&self, email: &str) -> Option<&UserProfile> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
