//! Visitor record model and form payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::enums::{VisitorStatus, VisitorType},
    store::types::{DocRef, WriteTime},
};

/// A stored visit, as read back from the document store.
///
/// Field names on the wire are camelCase, matching the inbound QR URL
/// contract. Optional free-text fields are stored as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRecord {
    /// Mirror of the document id, written by the scan-intake path only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
    pub visitor_name: String,
    pub mobile_number: String,
    #[serde(default)]
    pub email: String,
    pub visit_purpose: String,
    #[serde(default)]
    pub host_person: String,
    #[serde(default)]
    pub host_department: String,
    pub status: VisitorStatus,
    pub visitor_type: VisitorType,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Tenant scope, a reference into the school collection
    #[schema(value_type = String)]
    pub school_id: DocRef,
}

/// Write-side shape of a visit document: timestamps may defer to the store
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
    pub visitor_name: String,
    pub mobile_number: String,
    pub email: String,
    pub visit_purpose: String,
    pub host_person: String,
    pub host_department: String,
    pub status: VisitorStatus,
    pub visitor_type: VisitorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<WriteTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<WriteTime>,
    pub created_at: WriteTime,
    pub school_id: DocRef,
}

impl VisitorDocument {
    /// Materialize the document as a stored record, resolving deferred
    /// timestamps against `now`. Used by backends that commit locally.
    pub fn into_record(self, now: DateTime<Utc>) -> VisitorRecord {
        VisitorRecord {
            visitor_id: self.visitor_id,
            visitor_name: self.visitor_name,
            mobile_number: self.mobile_number,
            email: self.email,
            visit_purpose: self.visit_purpose,
            host_person: self.host_person,
            host_department: self.host_department,
            status: self.status,
            visitor_type: self.visitor_type,
            check_in_time: self.check_in_time.map(|t| t.resolve(now)),
            check_out_time: self.check_out_time.map(|t| t.resolve(now)),
            created_at: self.created_at.resolve(now),
            school_id: self.school_id,
        }
    }
}

/// Field-level update of an existing document; absent fields are untouched
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VisitorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<WriteTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<WriteTime>,
}

impl VisitorUpdate {
    /// Apply this update to a stored record, resolving deferred timestamps
    /// against `now`. Used by backends that commit locally.
    pub fn apply(&self, record: &mut VisitorRecord, now: DateTime<Utc>) {
        if let Some(v) = &self.visitor_name {
            record.visitor_name = v.clone();
        }
        if let Some(v) = &self.mobile_number {
            record.mobile_number = v.clone();
        }
        if let Some(v) = &self.email {
            record.email = v.clone();
        }
        if let Some(v) = &self.visit_purpose {
            record.visit_purpose = v.clone();
        }
        if let Some(v) = &self.host_person {
            record.host_person = v.clone();
        }
        if let Some(v) = &self.host_department {
            record.host_department = v.clone();
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(t) = self.check_in_time {
            record.check_in_time = Some(t.resolve(now));
        }
        if let Some(t) = self.check_out_time {
            record.check_out_time = Some(t.resolve(now));
        }
    }
}

/// Registration form payload, shared by the HTML form and the JSON API
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorForm {
    /// Existing record id when the form was reached from a scan
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub visitor_name: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default)]
    pub visit_purpose: String,
    #[serde(default)]
    pub host_person: String,
    #[serde(default)]
    pub host_department: Option<String>,
}

impl VisitorForm {
    /// Trim every field, mapping blank optionals to absent
    pub fn trimmed(&self) -> Self {
        let trim_opt = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            id: trim_opt(&self.id),
            visitor_name: self.visitor_name.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            email: trim_opt(&self.email),
            visit_purpose: self.visit_purpose.trim().to_string(),
            host_person: self.host_person.trim().to_string(),
            host_department: trim_opt(&self.host_department),
        }
    }

    /// Reject if any required field is blank, naming the first missing one,
    /// then check the email format. Expects an already-trimmed form.
    pub fn check(&self) -> AppResult<()> {
        if self.visitor_name.is_empty() {
            return Err(AppError::Validation("Visitor name is required".to_string()));
        }
        if self.mobile_number.is_empty() {
            return Err(AppError::Validation("Mobile number is required".to_string()));
        }
        if self.visit_purpose.is_empty() {
            return Err(AppError::Validation("Visit purpose is required".to_string()));
        }
        if self.host_person.is_empty() {
            return Err(AppError::Validation("Host person is required".to_string()));
        }
        self.validate()
            .map_err(|_| AppError::Validation("Invalid email format".to_string()))
    }
}

/// Query parameters of a check-out QR payload on the scan route
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayload {
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub email: Option<String>,
    pub host_department: Option<String>,
    pub host_person: Option<String>,
    pub mobile_number: Option<String>,
    pub status: Option<String>,
    pub visit_purpose: Option<String>,
    pub visitor_name: Option<String>,
    pub visitor_type: Option<String>,
}

/// Query parameters of the form route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPageQuery {
    pub id: Option<String>,
}
