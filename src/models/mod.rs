//! Data models for the kiosk server

pub mod enums;
pub mod visitor;

// Re-export commonly used types
pub use enums::{VisitorStatus, VisitorType};
pub use visitor::{
    FormPageQuery, ScanPayload, VisitorDocument, VisitorForm, VisitorRecord, VisitorUpdate,
};
