//! Headless mode execution

use super::{
    SessionData,
    messages::{SessionMessage, print_session_exit_success, print_session_starting},
};
use crate::events::Event;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::view::{feedback_row, item_row, recent_user_view};
use std::error::Error;
use tokio::sync::mpsc;

/// Runs the application in headless mode
///
/// Loads users, selects `email` when given, waits for every request and
/// prints the dashboard to stdout. Developer-log events go to stderr.
///
/// # Returns
/// * `Ok(())` - The dashboard ended without an error
/// * `Err` - The dashboard ended showing an error
pub async fn run_headless_mode(
    mut session: SessionData,
    mut event_receiver: mpsc::UnboundedReceiver<Event>,
    email: Option<String>,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.service_host);

    let controller = &mut session.controller;
    if let Some(email) = email.as_deref() {
        controller.preselect(email);
    }
    controller.load_recent_users();
    controller.load_all_users();
    controller.settle().await;

    let mut failures = 0;
    while let Ok(event) = event_receiver.try_recv() {
        if event.is_failure() {
            failures += 1;
        }
        eprintln!("{}", event);
    }
    if failures > 0 {
        SessionMessage::info(format!("{} warnings or errors in the developer log", failures))
            .print();
    }

    let state = controller.state();
    print!("{}", render_plain(state));

    if let Some(error) = &state.error {
        return Err(error.clone().into());
    }
    print_session_exit_success();
    Ok(())
}

/// Plain-text rendering of the dashboard.
pub fn render_plain(state: &DashboardState) -> String {
    let mut out = String::new();

    out.push_str("Recent users:\n");
    for user in &state.recent_users {
        let view = recent_user_view(user, state.placeholder_mode);
        out.push_str(&format!("  {} ({})\n", view.email, view.created_at));
    }

    out.push_str(&format!("Users: {}\n", state.users.len()));
    for user in &state.users {
        let marker = if user.email == state.selected_email { "*" } else { " " };
        out.push_str(&format!(" {} {}\n", marker, user.email));
    }

    if state.selected_email.is_empty() {
        return out;
    }

    match state.detail_user_id() {
        Some(user_id) => out.push_str(&format!(
            "Feedback for {} [{}] ({}):\n",
            state.selected_email,
            user_id,
            state.feedback.len()
        )),
        None => out.push_str(&format!(
            "Feedback for {} ({}):\n",
            state.selected_email,
            state.feedback.len()
        )),
    }
    for record in &state.feedback {
        let row = feedback_row(record, state.placeholder_mode);
        out.push_str(&format!(
            "  {} | {} | {} | {} | {} | {} | {} | {}\n",
            row.created_at,
            row.transcript,
            row.intent,
            row.item,
            row.location,
            row.confidence,
            row.action_type,
            row.was_correct
        ));
        if let Some(detail) = row.detail {
            out.push_str(&format!("      {}\n", detail));
        }
    }

    out.push_str(&format!("Stored items ({}):\n", state.items.len()));
    for item in &state.items {
        let row = item_row(item, state.placeholder_mode);
        out.push_str(&format!(
            "  {} | {} | {} | {}\n",
            row.item_name, row.location, row.notes, row.created_at
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DashboardController;
    use crate::store::MockTableStore;
    use crate::store::error::StoreError;
    use crate::ui::dashboard::DisplayConfig;
    use crate::ui::dashboard::view::fixtures::{feedback, item, user};
    use std::sync::Arc;
    use std::time::Duration;

    fn session(store: MockTableStore) -> SessionData {
        let state = DashboardState::new("abc.supabase.co".to_string(), DisplayConfig::default());
        SessionData {
            controller: DashboardController::new(Arc::new(store), state),
            service_host: "abc.supabase.co".to_string(),
        }
    }

    fn store_with_users() -> MockTableStore {
        let mut store = MockTableStore::new();
        store
            .expect_recent_users()
            .returning(|_| Ok(vec![user("u-1", "a@example.com")]));
        store
            .expect_all_users()
            .returning(|| Ok(vec![user("u-1", "a@example.com")]));
        store
    }

    async fn run(store: MockTableStore, email: Option<&str>) -> Result<(), String> {
        let (_sender, receiver) = mpsc::unbounded_channel();
        tokio::time::timeout(
            Duration::from_secs(5),
            run_headless_mode(session(store), receiver, email.map(str::to_string)),
        )
        .await
        .expect("headless run never finished")
        .map_err(|e| e.to_string())
    }

    #[tokio::test]
    async fn test_unknown_email_ends_in_error() {
        let result = run(store_with_users(), Some("zz@example.com")).await;
        assert_eq!(result, Err("User not found".to_string()));
    }

    #[tokio::test]
    async fn test_users_failure_ends_in_error() {
        let mut store = MockTableStore::new();
        store.expect_recent_users().returning(|_| Ok(Vec::new()));
        store.expect_all_users().returning(|| {
            Err(StoreError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        let result = run(store, None).await;
        assert_eq!(result, Err("Failed to load users".to_string()));
    }

    #[tokio::test]
    async fn test_known_email_succeeds() {
        let mut store = store_with_users();
        store
            .expect_feedback_for_user()
            .times(1)
            .returning(|user_id, _| Ok(vec![feedback(1, user_id)]));
        store
            .expect_items_for_user()
            .times(1)
            .returning(|user_id, _| Ok(vec![item(1, user_id, None)]));
        assert_eq!(run(store, Some("a@example.com")).await, Ok(()));
    }

    #[tokio::test]
    async fn test_detail_failure_ends_in_error() {
        let mut store = store_with_users();
        store
            .expect_feedback_for_user()
            .returning(|_, _| Ok(Vec::new()));
        store.expect_items_for_user().returning(|_, _| {
            Err(StoreError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        let result = run(store, Some("a@example.com")).await;
        assert_eq!(result, Err("Failed to load data".to_string()));
    }

    #[test]
    fn test_plain_output_without_selection() {
        let mut state = DashboardState::new(String::new(), DisplayConfig::default());
        state.set_users(vec![user("u-1", "a@example.com")]);

        let out = render_plain(&state);
        assert!(out.contains("Users: 1"));
        assert!(out.contains("   a@example.com"));
        assert!(!out.contains("Feedback"));
    }

    #[test]
    fn test_plain_output_with_selection() {
        let mut state = DashboardState::new(String::new(), DisplayConfig::default());
        state.set_users(vec![user("u-1", "a@example.com")]);
        state.select_email("a@example.com");
        state.begin_detail(1, "u-1".to_string());
        state.finish_detail(1, vec![feedback(1, "u-1")], vec![item(1, "u-1", Some(""))]);

        let out = render_plain(&state);
        assert!(out.contains(" * a@example.com"));
        assert!(out.contains("Feedback for a@example.com [u-1] (1):"));
        assert!(out.contains("Unknown date | None |  |  | Not provided | n/a |  | ❌ No"));
        assert!(out.contains("drill | garage | – | Unknown date"));
    }
}
