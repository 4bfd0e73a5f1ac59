//! Registration form page: create and update paths

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::{
    models::{FormPageQuery, VisitorForm, VisitorRecord},
    pages::{escape_html, layout},
    services::qr,
    AppState,
};

/// GET `/visitor/form` — blank form, or pre-filled update form when an id
/// arrived from a scan.
pub async fn show_form(
    State(state): State<AppState>,
    Query(query): Query<FormPageQuery>,
) -> Response {
    let Some(id) = query.id.filter(|id| !id.trim().is_empty()) else {
        return Html(render_form(&VisitorForm::default(), None)).into_response();
    };

    match state.services.visitors.get(id.trim()).await {
        Ok(record) => {
            let form = prefill(id.trim(), &record);
            Html(render_form(&form, None)).into_response()
        }
        Err(err) => {
            let body = render_form(&VisitorForm::default(), Some(&err.to_string()));
            (err.status_code(), Html(body)).into_response()
        }
    }
}

/// POST `/visitor/form` — create a visit, or update when the hidden id field
/// is present. On failure the form is re-rendered with the entered values.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<VisitorForm>,
) -> Response {
    let school = state.school_id();
    let trimmed_id = form.id.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let result = match trimmed_id {
        Some(id) => state
            .services
            .visitors
            .update(id, &form, school.as_ref())
            .await
            .map(|_| (id.to_string(), true)),
        None => state
            .services
            .visitors
            .create(&form, school.as_ref())
            .await
            .map(|id| (id, false)),
    };

    match result {
        Ok((id, updated)) => match render_created(&id, updated) {
            Ok(body) => Html(body).into_response(),
            Err(err) => err.into_response(),
        },
        Err(err) => {
            let body = render_form(&form, Some(&err.to_string()));
            (err.status_code(), Html(body)).into_response()
        }
    }
}

/// Map a stored record back onto the form fields for the update path
fn prefill(id: &str, record: &VisitorRecord) -> VisitorForm {
    VisitorForm {
        id: Some(id.to_string()),
        visitor_name: record.visitor_name.clone(),
        mobile_number: record.mobile_number.clone(),
        email: Some(record.email.clone()).filter(|s| !s.is_empty()),
        visit_purpose: record.visit_purpose.clone(),
        host_person: record.host_person.clone(),
        host_department: Some(record.host_department.clone()).filter(|s| !s.is_empty()),
    }
}

fn render_form(form: &VisitorForm, error: Option<&str>) -> String {
    let update_mode = form.id.is_some();
    let id_field = form
        .id
        .as_deref()
        .map(|id| {
            format!(
                r#"<input type="hidden" name="id" value="{}">"#,
                escape_html(id)
            )
        })
        .unwrap_or_default();
    let error_block = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape_html(msg)))
        .unwrap_or_default();
    let submit_label = if update_mode {
        "Check in visitor"
    } else {
        "Create visitor entry"
    };

    let body = format!(
        r#"<h1>Visitor Registration</h1>
<p class="lead">Please fill in your details below</p>
<form method="post" action="/visitor/form" onsubmit="this.querySelector('button').disabled=true">
{id_field}
<label><span>Visitor name *</span>
<input name="visitorName" value="{visitor_name}" placeholder="John Doe" required></label>
<label><span>Mobile number *</span>
<input name="mobileNumber" value="{mobile_number}" placeholder="98765 43210" required></label>
<label><span>Email</span>
<input name="email" type="email" value="{email}" placeholder="john@example.com"></label>
<label><span>Visit purpose *</span>
<input name="visitPurpose" value="{visit_purpose}" placeholder="Delivery / Meeting / Parent / Vendor" required></label>
<label><span>Host person *</span>
<input name="hostPerson" value="{host_person}" placeholder="Person to meet" required></label>
<label><span>Host department</span>
<input name="hostDepartment" value="{host_department}" placeholder="Department"></label>
{error_block}
<button type="submit">{submit_label}</button>
</form>
"#,
        id_field = id_field,
        visitor_name = escape_html(&form.visitor_name),
        mobile_number = escape_html(&form.mobile_number),
        email = escape_html(form.email.as_deref().unwrap_or("")),
        visit_purpose = escape_html(&form.visit_purpose),
        host_person = escape_html(&form.host_person),
        host_department = escape_html(form.host_department.as_deref().unwrap_or("")),
        error_block = error_block,
        submit_label = submit_label,
    );
    layout("Visitor Registration", &body)
}

fn render_created(id: &str, updated: bool) -> crate::AppResult<String> {
    let svg = qr::render_svg(id, qr::QR_SIZE_SMALL)?;
    let heading = if updated {
        "Visitor checked in"
    } else {
        "Visitor created"
    };
    let body = format!(
        r#"<h1>{heading}</h1>
<p class="lead">Visitor ID:</p>
<p class="center"><code>{id}</code></p>
<div class="qr">{svg}</div>
<p class="lead">Present this QR code when checking out.</p>
<p class="center"><a class="button" href="/visitor/form">New entry</a></p>
"#,
        heading = heading,
        id = escape_html(id),
        svg = svg,
    );
    Ok(layout(heading, &body))
}
