//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod feedback;
pub mod footer;
pub mod header;
pub mod items;
pub mod logs;
pub mod recent_users;
pub mod selector;
