//! Visitor Check-in Kiosk Server
//!
//! An HTTP server implementing a visitor check-in kiosk flow: a landing page
//! renders a QR code linking to a registration form, submitted visits are
//! persisted to a remote document store, and a scan-intake route turns an
//! inbound check-out QR into a pre-filled record.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Tenant scope from the configured session context, if any.
    ///
    /// Handlers pass this explicitly into every write; a `None` surfaces as
    /// the missing-scope error rather than an ambient lookup failure.
    pub fn school_id(&self) -> Option<store::types::SchoolId> {
        self.config
            .tenant
            .school_id
            .as_deref()
            .map(store::types::SchoolId::new)
    }
}
