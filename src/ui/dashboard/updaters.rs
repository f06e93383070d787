//! Dashboard state update logic
//!
//! Transitions of the detail-load state machine and selector navigation.

use super::state::{DashboardState, DetailPhase};
use crate::models::{FeedbackRecord, StoredItem, UserProfile};
use crate::store::PageRequest;

impl DashboardState {
    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn set_recent_users(&mut self, users: Vec<UserProfile>) {
        self.recent_users = users;
    }

    /// Replaces the loaded users and keeps the cursor on the selection.
    pub fn set_users(&mut self, users: Vec<UserProfile>) {
        self.users = users;
        self.selector_cursor = match self
            .users
            .iter()
            .position(|user| user.email == self.selected_email)
        {
            Some(index) if !self.selected_email.is_empty() => index + 1,
            _ => self.selector_cursor.min(self.users.len()),
        };
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    /// Records a new selection and rewinds paging.
    pub fn select_email(&mut self, email: &str) {
        self.selected_email = email.to_string();
        self.page = PageRequest::first(self.page.limit);
    }

    /// Back to Idle. Lists keep their last contents.
    pub fn clear_selection(&mut self) {
        self.select_email("");
        self.set_more_pages(false);
        self.set_detail_phase(DetailPhase::Idle);
        self.set_detail_user_id(None);
    }

    /// Enter Loading for the request tagged `generation`.
    pub fn begin_detail(&mut self, generation: u64, user_id: String) {
        self.set_detail_phase(DetailPhase::Loading { generation });
        self.set_detail_user_id(Some(user_id));
    }

    /// Whether `generation` is the request the dashboard is waiting on.
    pub fn is_current(&self, generation: u64) -> bool {
        self.detail_phase() == DetailPhase::Loading { generation }
    }

    /// Applies a successful fetch. Returns `false` for a superseded request.
    pub fn finish_detail(
        &mut self,
        generation: u64,
        feedback: Vec<FeedbackRecord>,
        items: Vec<StoredItem>,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let more_pages = self.page.limit.is_some_and(|limit| {
            feedback.len() >= limit as usize || items.len() >= limit as usize
        });
        self.set_more_pages(more_pages);
        self.feedback = feedback;
        self.items = items;
        self.error = None;
        self.set_detail_phase(DetailPhase::Success);
        true
    }

    /// Applies a failed fetch. Lists are left as they were. Returns `false`
    /// for a superseded request.
    pub fn fail_detail(&mut self, generation: u64, message: &str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.fail_detail_locally(message);
        true
    }

    /// Error state without a request, e.g. an email no loaded user has.
    pub fn fail_detail_locally(&mut self, message: &str) {
        self.set_error(message);
        self.set_detail_phase(DetailPhase::Error);
    }

    pub fn move_cursor_up(&mut self) {
        self.selector_cursor = self.selector_cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        // Placeholder option plus one per user
        if self.selector_cursor < self.users.len() {
            self.selector_cursor += 1;
        }
    }

    /// Email under the cursor; empty for the placeholder option.
    pub fn cursor_email(&self) -> String {
        match self.selector_cursor {
            0 => String::new(),
            n => self
                .users
                .get(n - 1)
                .map(|user| user.email.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::state::DisplayConfig;
    use crate::ui::dashboard::view::fixtures::{feedback, item, user};

    fn state() -> DashboardState {
        DashboardState::new(String::new(), DisplayConfig::default())
    }

    #[test]
    fn test_success_replaces_lists_and_clears_error() {
        let mut state = state();
        state.set_error("Failed to load data");
        state.begin_detail(1, "u-1".to_string());
        assert!(state.is_loading());

        assert!(state.finish_detail(1, vec![feedback(1, "u-1")], vec![item(1, "u-1", None)]));
        assert!(!state.is_loading());
        assert_eq!(state.detail_phase(), DetailPhase::Success);
        assert_eq!(state.error, None);
        assert_eq!(state.feedback.len(), 1);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_lists() {
        let mut state = state();
        state.begin_detail(1, "u-1".to_string());
        state.finish_detail(1, vec![feedback(1, "u-1")], Vec::new());

        state.begin_detail(2, "u-2".to_string());
        assert!(state.fail_detail(2, "Failed to load data"));
        assert_eq!(state.detail_phase(), DetailPhase::Error);
        assert!(!state.is_loading());
        assert_eq!(state.feedback, vec![feedback(1, "u-1")]);
        assert_eq!(state.error.as_deref(), Some("Failed to load data"));
    }

    #[test]
    fn test_superseded_generation_is_ignored() {
        let mut state = state();
        state.begin_detail(1, "u-1".to_string());
        state.begin_detail(2, "u-2".to_string());

        assert!(!state.finish_detail(1, vec![feedback(1, "u-1")], Vec::new()));
        assert!(!state.fail_detail(1, "Failed to load data"));
        assert!(state.is_loading());
        assert!(state.feedback.is_empty());
        assert_eq!(state.error, None);

        assert!(state.finish_detail(2, vec![feedback(2, "u-2")], Vec::new()));
        assert_eq!(state.feedback[0].user_id, "u-2");
    }

    #[test]
    fn test_clear_selection_discards_in_flight() {
        let mut state = state();
        state.select_email("a@example.com");
        state.begin_detail(1, "u-1".to_string());
        state.clear_selection();

        assert_eq!(state.detail_phase(), DetailPhase::Idle);
        assert!(!state.is_loading());
        assert!(!state.finish_detail(1, vec![feedback(1, "u-1")], Vec::new()));
    }

    #[test]
    fn test_selection_rewinds_page() {
        let mut state = DashboardState::new(
            String::new(),
            DisplayConfig {
                page_size: Some(5),
                ..DisplayConfig::default()
            },
        );
        state.page = state.page.next().unwrap();
        state.select_email("a@example.com");
        assert_eq!(state.page, PageRequest::first(Some(5)));
    }

    #[test]
    fn test_full_page_means_more_pages() {
        let mut state = DashboardState::new(
            String::new(),
            DisplayConfig {
                page_size: Some(2),
                ..DisplayConfig::default()
            },
        );
        state.begin_detail(1, "u-1".to_string());
        state.finish_detail(
            1,
            vec![feedback(1, "u-1")],
            vec![item(1, "u-1", None), item(2, "u-1", None)],
        );
        assert!(state.has_more_pages());

        state.begin_detail(2, "u-1".to_string());
        state.finish_detail(2, vec![feedback(1, "u-1")], Vec::new());
        assert!(!state.has_more_pages());

        let mut unpaged = DashboardState::new(String::new(), DisplayConfig::default());
        unpaged.begin_detail(1, "u-1".to_string());
        unpaged.finish_detail(1, vec![feedback(1, "u-1")], Vec::new());
        assert!(!unpaged.has_more_pages());
    }

    #[test]
    fn test_cursor_navigation_and_repositioning() {
        let mut state = state();
        state.move_cursor_down();
        assert_eq!(state.selector_cursor, 0);

        state.select_email("b@example.com");
        state.set_users(vec![user("u-1", "a@example.com"), user("u-2", "b@example.com")]);
        assert_eq!(state.selector_cursor, 2);
        assert_eq!(state.cursor_email(), "b@example.com");

        state.move_cursor_down();
        assert_eq!(state.selector_cursor, 2);
        state.move_cursor_up();
        state.move_cursor_up();
        state.move_cursor_up();
        assert_eq!(state.selector_cursor, 0);
        assert_eq!(state.cursor_email(), "");

        state.selector_cursor = 2;
        state.select_email("");
        state.set_users(vec![user("u-1", "a@example.com")]);
        assert_eq!(state.selector_cursor, 1);
    }
}
