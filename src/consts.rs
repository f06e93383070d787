pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Table names, user-facing messages and display placeholders, grouped by
    //! functional area.

    // =============================================================================
    // REMOTE TABLES
    // =============================================================================

    pub mod tables {
        pub const USER_PROFILES: &str = "user_profiles";
        pub const TRANSCRIPT_FEEDBACK: &str = "transcript_feedback";
        pub const STORED_ITEMS: &str = "stored_items";

        /// Columns projected by the recent-users strip.
        pub const RECENT_USER_COLUMNS: &str = "user_id,email,created_at";
        /// Columns projected by the user selector.
        pub const ALL_USER_COLUMNS: &str = "user_id,email";
        /// Number of users shown in the recent-users strip.
        pub const RECENT_USERS_LIMIT: u32 = 10;
    }

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // USER-FACING MESSAGES
    // =============================================================================

    pub mod messages {
        pub const FAILED_TO_LOAD_USERS: &str = "Failed to load users";
        pub const FAILED_TO_LOAD_DATA: &str = "Failed to load data";
        pub const USER_NOT_FOUND: &str = "User not found";
    }

    // =============================================================================
    // DISPLAY PLACEHOLDERS
    // =============================================================================

    pub mod placeholders {
        pub const UNKNOWN_DATE: &str = "Unknown date";
        pub const NO_TRANSCRIPT: &str = "None";
        pub const NO_LOCATION: &str = "Not provided";
        pub const NO_CONFIDENCE: &str = "n/a";
        pub const NO_NOTES: &str = "–";
        pub const CORRECT: &str = "✅ Yes";
        pub const INCORRECT: &str = "❌ No";
        /// Only used in strict mode, where null and false are told apart.
        pub const UNREVIEWED: &str = "❔ Unknown";
        /// Strict-mode rendering of a present but empty string.
        pub const EMPTY_STRING: &str = "\"\"";
        /// Leading entry of the user selector.
        pub const SELECT_USER: &str = "-- Select a user --";
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }
}
