//! Test QR page: check-out-style scan URL with literal sample field values

use axum::{http::HeaderMap, response::Html};

use crate::{
    error::AppResult,
    pages::{escape_html, layout, request_origin},
    services::qr,
};

pub async fn test_qr(headers: HeaderMap) -> AppResult<Html<String>> {
    let origin = request_origin(&headers);
    let scan_url = qr::sample_scan_url(&origin)?;
    let svg = qr::render_svg(&scan_url, qr::QR_SIZE)?;

    let body = format!(
        r#"<h1>Test QR Code</h1>
<div class="qr">{svg}</div>
<p class="lead">Scan this QR code to test the check-out intake flow.</p>
<p class="center"><code>{url}</code></p>
<p class="center"><a class="button" href="/">Back to Home</a></p>
"#,
        svg = svg,
        url = escape_html(&scan_url)
    );
    Ok(Html(layout("Test QR Code", &body)))
}
