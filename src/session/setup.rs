//! Session setup and initialization

use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::store::{StoreClient, TableStore};
use crate::ui::dashboard::{DashboardState, DisplayConfig};
use std::error::Error;
use std::sync::Arc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Controller owning the dashboard state
    pub controller: DashboardController,
    /// Host of the table service, for messages
    pub service_host: String,
}

/// Sets up a dashboard session
///
/// Builds the table-service client from the environment and wires it into a
/// controller with an empty dashboard.
///
/// # Arguments
/// * `env` - Service URL and key
/// * `display` - Display settings merged from the config file and flags
pub fn setup_session(env: Environment, display: DisplayConfig) -> Result<SessionData, Box<dyn Error>> {
    let service_host = env.host().to_string();
    let store: Arc<dyn TableStore> = Arc::new(StoreClient::new(env)?);
    let state = DashboardState::new(service_host.clone(), display);

    Ok(SessionData {
        controller: DashboardController::new(store, state),
        service_host,
    })
}
