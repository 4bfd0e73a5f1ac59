//! QR payload construction and SVG rendering

use qrcode::{render::svg, QrCode};
use url::Url;

use crate::error::{AppError, AppResult};

/// Rendered QR edge length, sized for mobile-camera legibility
pub const QR_SIZE: u32 = 256;

/// Smaller variant used on the post-creation screen
pub const QR_SIZE_SMALL: u32 = 220;

/// Render arbitrary data as an inline SVG QR code
pub fn render_svg(data: &str, size: u32) -> AppResult<String> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encoding failed: {}", e)))?;
    let svg = code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .build();
    Ok(svg)
}

/// The registration form URL for a given origin; this is the landing page's
/// QR payload, byte for byte.
pub fn form_url(origin: &str) -> String {
    format!("{}/visitor/form", origin)
}

/// A check-out-style scan URL carrying literal sample field values, used by
/// the test QR page to exercise the intake flow end to end.
pub fn sample_scan_url(origin: &str) -> AppResult<String> {
    let mut url = Url::parse(&format!("{}/visitor/scan", origin))
        .map_err(|e| AppError::Internal(format!("Invalid origin: {}", e)))?;
    url.query_pairs_mut()
        .append_pair("checkInTime", "2025-10-25T13:22:28+05:30")
        .append_pair("checkOutTime", "2025-10-25T13:56:12+05:30")
        .append_pair("email", "ragul26061999@gmail.com")
        .append_pair("hostDepartment", "ftufktfkyuuy")
        .append_pair("hostPerson", "vishal")
        .append_pair("mobileNumber", "8939243996")
        .append_pair("status", "checked-out")
        .append_pair("visitPurpose", "parent")
        .append_pair("visitorName", "ragul")
        .append_pair("visitorType", "current");
    Ok(url.to_string())
}
