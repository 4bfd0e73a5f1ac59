//! Scan-intake redirector
//!
//! Turns an inbound check-out QR's query parameters into a written record
//! and redirects to the pre-filled form. Without parameters it forwards to
//! the blank form. The write always completes before the redirect.

use axum::{
    extract::{Query, RawQuery, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    models::ScanPayload,
    pages::{escape_html, layout},
    AppState,
};

pub async fn scan_intake(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    Query(payload): Query<ScanPayload>,
) -> Response {
    // Any query parameter at all means a check-out QR payload arrived
    if raw.as_deref().map_or(true, str::is_empty) {
        return Redirect::to("/visitor/form").into_response();
    }

    let school = state.school_id();
    match state
        .services
        .visitors
        .scan_intake(&payload, school.as_ref())
        .await
    {
        Ok(id) => Redirect::to(&format!("/visitor/form?id={}", id)).into_response(),
        Err(err) => {
            tracing::error!("Error processing QR data: {}", err);
            let body = render_error(&err.to_string());
            (err.status_code(), Html(body)).into_response()
        }
    }
}

/// Terminal error screen with a manual way back to the form
fn render_error(message: &str) -> String {
    let body = format!(
        r#"<h1>Error Processing QR Code</h1>
<p class="error">{}</p>
<p class="center"><a class="button" href="/visitor/form">Go to Form</a></p>
"#,
        escape_html(message)
    );
    layout("Error Processing QR Code", &body)
}
