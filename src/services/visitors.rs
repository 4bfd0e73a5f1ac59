//! Visitor lifecycle service
//!
//! Owns the create / update / scan-intake write contracts. The tenant scope
//! is an explicit parameter on every write: callers supply it or receive a
//! missing-scope error before anything touches the store.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        ScanPayload, VisitorDocument, VisitorForm, VisitorRecord, VisitorStatus, VisitorType,
        VisitorUpdate,
    },
    store::{
        types::{DocRef, SchoolId, WriteTime},
        DocumentStore,
    },
};

#[derive(Clone)]
pub struct VisitorsService {
    store: Arc<dyn DocumentStore>,
}

impl VisitorsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create a new visit from the registration form.
    ///
    /// Returns the store-assigned document id. Validation failures and a
    /// missing tenant scope reject before any write.
    pub async fn create(
        &self,
        form: &VisitorForm,
        school: Option<&SchoolId>,
    ) -> AppResult<String> {
        let form = form.trimmed();
        form.check()?;
        let school = school.ok_or(AppError::MissingSchool)?;

        let doc = VisitorDocument {
            visitor_id: None,
            visitor_name: form.visitor_name,
            mobile_number: form.mobile_number,
            email: form.email.unwrap_or_default(),
            visit_purpose: form.visit_purpose,
            host_person: form.host_person,
            host_department: form.host_department.unwrap_or_default(),
            status: VisitorStatus::Pending,
            visitor_type: VisitorType::New,
            check_in_time: None,
            check_out_time: None,
            created_at: WriteTime::ServerTime,
            school_id: DocRef::school(school),
        };

        let id = self.store.create(&doc).await?;
        tracing::info!(visitor_id = %id, "Visitor created");
        Ok(id)
    }

    /// Overwrite the mutable fields of an existing visit and mark it
    /// checked-in with a server-assigned check-in timestamp.
    pub async fn update(
        &self,
        id: &str,
        form: &VisitorForm,
        school: Option<&SchoolId>,
    ) -> AppResult<()> {
        let form = form.trimmed();
        form.check()?;
        school.ok_or(AppError::MissingSchool)?;

        let existing = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", id)))?;
        if !existing.status.forward_step(VisitorStatus::CheckedIn) {
            // The check-out QR flow legitimately lands here; record it only.
            tracing::warn!(
                visitor_id = %id,
                from = %existing.status,
                "Status moving backward to checked-in"
            );
        }

        let update = VisitorUpdate {
            visitor_name: Some(form.visitor_name),
            mobile_number: Some(form.mobile_number),
            email: Some(form.email.unwrap_or_default()),
            visit_purpose: Some(form.visit_purpose),
            host_person: Some(form.host_person),
            host_department: Some(form.host_department.unwrap_or_default()),
            status: Some(VisitorStatus::CheckedIn),
            check_in_time: Some(WriteTime::ServerTime),
            check_out_time: None,
        };
        self.store.update(id, &update).await?;
        tracing::info!(visitor_id = %id, "Visitor checked in");
        Ok(())
    }

    /// Turn an inbound check-out QR payload into a full record.
    ///
    /// Mints a fresh id, writes the record at that id, and returns the id for
    /// the redirect to the pre-filled form. The write always completes before
    /// this returns, so the form's subsequent fetch is fresh.
    pub async fn scan_intake(
        &self,
        payload: &ScanPayload,
        school: Option<&SchoolId>,
    ) -> AppResult<String> {
        let school = school.ok_or(AppError::MissingSchool)?;

        let id = self.store.new_document_id();
        let check_in_time = WriteTime::from_iso(payload.check_in_time.as_deref());

        let doc = VisitorDocument {
            visitor_id: Some(id.clone()),
            visitor_name: payload.visitor_name.clone().unwrap_or_default(),
            mobile_number: payload.mobile_number.clone().unwrap_or_default(),
            email: payload.email.clone().unwrap_or_default(),
            visit_purpose: payload.visit_purpose.clone().unwrap_or_default(),
            host_person: payload.host_person.clone().unwrap_or_default(),
            host_department: payload.host_department.clone().unwrap_or_default(),
            status: VisitorStatus::parse_or_checked_in(payload.status.as_deref()),
            visitor_type: VisitorType::parse_or_current(payload.visitor_type.as_deref()),
            check_in_time: Some(check_in_time),
            check_out_time: Some(WriteTime::from_iso(payload.check_out_time.as_deref())),
            // Creation time mirrors the check-in time carried by the QR
            created_at: check_in_time,
            school_id: DocRef::school(school),
        };

        self.store.put(&id, &doc).await?;
        tracing::info!(visitor_id = %id, "Scan intake written");
        Ok(id)
    }

    /// Fetch a visit by id
    pub async fn get(&self, id: &str) -> AppResult<VisitorRecord> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", id)))
    }
}
