//! Server-rendered kiosk pages
//!
//! The pages are thin HTML renderings over the same service layer the JSON
//! API uses. Markup is kept minimal: one centered card per screen.

pub mod form;
pub mod landing;
pub mod scan;
pub mod test_qr;

use axum::http::{header::HOST, HeaderMap};

/// Escape text for interpolation into HTML body and attribute positions
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Derive the request origin (`scheme://host`) the way the QR payloads need
/// it: forwarded proto when behind a proxy, plain http otherwise.
pub fn request_origin(headers: &HeaderMap) -> String {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}", proto, host)
}

/// Wrap page content in the shared kiosk card layout
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ margin: 0; font-family: system-ui, sans-serif; background: #f8fafc;
          min-height: 100vh; display: flex; align-items: center; justify-content: center; }}
  .card {{ max-width: 640px; width: 100%; background: #fff; border: 1px solid #e9ecef;
           border-radius: 16px; box-shadow: 0 10px 30px rgba(16,24,40,0.08);
           padding: 24px; margin: 16px; }}
  h1 {{ font-size: 26px; text-align: center; color: #0f172a; }}
  p.lead {{ text-align: center; color: #475569; }}
  form {{ display: grid; gap: 12px; }}
  label {{ display: grid; gap: 6px; color: #334155; }}
  input {{ padding: 12px; border: 1px solid #e2e8f0; border-radius: 12px; background: #f8fafc; }}
  button {{ padding: 12px 16px; background: #6c8ef5; color: #fff; border: 0;
            border-radius: 12px; cursor: pointer; }}
  .error {{ color: #dc2626; background: #fef2f2; border: 1px solid #fecaca;
            padding: 10px; border-radius: 10px; }}
  .qr {{ display: flex; justify-content: center; padding: 10px; }}
  code {{ background: #f1f5f9; padding: 8px; border-radius: 10px; word-break: break-all; }}
  .center {{ text-align: center; }}
  a.button {{ display: inline-block; padding: 10px 14px; border-radius: 12px;
              background: #5b9eef; color: #fff; text-decoration: none; }}
</style>
</head>
<body>
<div class="card">
{body}
</div>
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b a="1">&'"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_request_origin_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("kiosk.example.com:8080"));
        assert_eq!(request_origin(&headers), "http://kiosk.example.com:8080");
    }

    #[test]
    fn test_request_origin_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("kiosk.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(request_origin(&headers), "https://kiosk.example.com");
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("<script>", "body");
        assert!(html.contains("<title>&lt;script&gt;</title>"));
        assert!(html.contains("body"));
    }
}
