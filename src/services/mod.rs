//! Business logic services

pub mod qr;
pub mod visitors;

use std::sync::Arc;

use crate::store::DocumentStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub visitors: visitors::VisitorsService,
}

impl Services {
    /// Create all services backed by the given document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            visitors: visitors::VisitorsService::new(store),
        }
    }
}
