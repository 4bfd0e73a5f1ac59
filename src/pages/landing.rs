//! Landing page: QR code linking to the registration form

use axum::{http::HeaderMap, response::Html};

use crate::{
    error::AppResult,
    pages::{escape_html, layout, request_origin},
    services::qr,
};

pub async fn landing(headers: HeaderMap) -> AppResult<Html<String>> {
    let origin = request_origin(&headers);
    let form_url = qr::form_url(&origin);
    let svg = qr::render_svg(&form_url, qr::QR_SIZE)?;

    let body = format!(
        r#"<h1>Visitor Management</h1>
<p class="lead">Scan this QR code to access the visitor registration form</p>
<div class="qr">{svg}</div>
<p class="center">QR Code contains:</p>
<p class="center"><code>{url}</code></p>
<p class="lead">When visitors scan this QR code, they will be redirected to the visitor registration form.</p>
<p class="center"><a class="button" href="/visitor/form">Go to Form Directly</a></p>
"#,
        svg = svg,
        url = escape_html(&form_url)
    );
    Ok(Html(layout("Visitor Management", &body)))
}
