//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// VisitorStatus
// ---------------------------------------------------------------------------

/// Visit lifecycle status
///
/// The lifecycle only moves forward: pending -> checked-in -> checked-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VisitorStatus {
    Pending,
    CheckedIn,
    CheckedOut,
}

impl VisitorStatus {
    /// Parse the wire representation ("pending", "checked-in", "checked-out")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(VisitorStatus::Pending),
            "checked-in" => Some(VisitorStatus::CheckedIn),
            "checked-out" => Some(VisitorStatus::CheckedOut),
            _ => None,
        }
    }

    /// Parse an optional QR parameter, defaulting to checked-in
    pub fn parse_or_checked_in(s: Option<&str>) -> Self {
        s.and_then(VisitorStatus::parse)
            .unwrap_or(VisitorStatus::CheckedIn)
    }

    fn rank(self) -> u8 {
        match self {
            VisitorStatus::Pending => 0,
            VisitorStatus::CheckedIn => 1,
            VisitorStatus::CheckedOut => 2,
        }
    }

    /// Whether moving from `self` to `next` keeps the lifecycle moving forward
    pub fn forward_step(self, next: VisitorStatus) -> bool {
        next.rank() >= self.rank()
    }
}

impl std::fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VisitorStatus::Pending => "pending",
            VisitorStatus::CheckedIn => "checked-in",
            VisitorStatus::CheckedOut => "checked-out",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// VisitorType
// ---------------------------------------------------------------------------

/// Visitor type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisitorType {
    New,
    Current,
}

impl VisitorType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(VisitorType::New),
            "current" => Some(VisitorType::Current),
            _ => None,
        }
    }

    /// Parse an optional QR parameter, defaulting to current
    pub fn parse_or_current(s: Option<&str>) -> Self {
        s.and_then(VisitorType::parse).unwrap_or(VisitorType::Current)
    }
}

impl std::fmt::Display for VisitorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VisitorType::New => "new",
            VisitorType::Current => "current",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(VisitorStatus::parse("pending"), Some(VisitorStatus::Pending));
        assert_eq!(
            VisitorStatus::parse("checked-out"),
            Some(VisitorStatus::CheckedOut)
        );
        assert_eq!(VisitorStatus::parse("bogus"), None);
        assert_eq!(
            VisitorStatus::parse_or_checked_in(None),
            VisitorStatus::CheckedIn
        );
        assert_eq!(
            VisitorStatus::parse_or_checked_in(Some("checked-out")),
            VisitorStatus::CheckedOut
        );
    }

    #[test]
    fn test_status_forward_step() {
        assert!(VisitorStatus::Pending.forward_step(VisitorStatus::CheckedIn));
        assert!(VisitorStatus::CheckedIn.forward_step(VisitorStatus::CheckedOut));
        assert!(VisitorStatus::CheckedIn.forward_step(VisitorStatus::CheckedIn));
        assert!(!VisitorStatus::CheckedOut.forward_step(VisitorStatus::CheckedIn));
        assert!(!VisitorStatus::CheckedIn.forward_step(VisitorStatus::Pending));
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&VisitorStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked-in\"");
        let back: VisitorStatus = serde_json::from_str("\"checked-out\"").unwrap();
        assert_eq!(back, VisitorStatus::CheckedOut);
    }

    #[test]
    fn test_visitor_type_parse() {
        assert_eq!(VisitorType::parse("new"), Some(VisitorType::New));
        assert_eq!(VisitorType::parse_or_current(None), VisitorType::Current);
        assert_eq!(
            VisitorType::parse_or_current(Some("garbage")),
            VisitorType::Current
        );
    }
}
