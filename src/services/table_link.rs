//! Table deep-link minting and QR rendering.
//!
//! Codes are minted fresh on every call and never persisted: uniqueness is
//! probabilistic over the 62^10 code space, not enforced by a registry.

use crate::error::Result;
use crate::models::table_link::{TableLink, TableLinkMetadata};
use chrono::{DateTime, Duration, Utc};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use std::io::Cursor;

/// The length of a table link code.
pub const CODE_LENGTH: usize = 10;

/// Target edge length of rendered QR images, in pixels.
const QR_TARGET_SIZE: u32 = 600;

/// Quiet zone around the QR modules, in module widths.
const QR_MARGIN: u32 = 4;

/// Brand foreground (dark modules).
const QR_DARK: Rgb<u8> = Rgb([0x4A, 0x2C, 0x17]);
/// Brand background (light modules).
const QR_LIGHT: Rgb<u8> = Rgb([0xFF, 0xF8, 0xF0]);

/// Generates a fresh random alphanumeric code of [`CODE_LENGTH`] characters.
fn generate_code() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Mints a shareable deep link for one table.
///
/// Two calls with identical inputs produce different codes and URLs; no
/// record of the issued code is kept server-side.
///
/// # Arguments
///
/// * `table_id` - The table's identifier in the external registry.
/// * `location_id` - The restaurant location's identifier.
/// * `table_number` - The human-facing table number.
/// * `base_url` - The base URL the link should point at.
///
/// # Returns
///
/// A `TableLink` with the composed URL, the bare code, and minting metadata.
pub fn generate_table_link(
    table_id: &str,
    location_id: &str,
    table_number: i32,
    base_url: &str,
) -> TableLink {
    let code = generate_code();
    let issued_at = Utc::now();

    let url = format!(
        "{}/menu?table={}&location={}&code={}&t={}",
        base_url.trim_end_matches('/'),
        table_id,
        location_id,
        code,
        table_number,
    );

    tracing::info!("🔗 Table link minted for table {} at {}", table_id, location_id);

    TableLink {
        url,
        code: code.clone(),
        metadata: TableLinkMetadata {
            table_id: table_id.to_string(),
            location_id: location_id.to_string(),
            table_number,
            code,
            issued_at,
        },
    }
}

/// Renders a URL as a PNG QR code in brand colors.
///
/// Error-correction level M, roughly [`QR_TARGET_SIZE`] pixels on a side.
/// Deterministic for a given URL.
pub fn render_png(url: &str) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)?;
    let module_count = code.width() as u32;
    let colors = code.to_colors();

    let scale = (QR_TARGET_SIZE / (module_count + QR_MARGIN * 2)).max(1);
    let image_size = (module_count + QR_MARGIN * 2) * scale;
    let mut img = ImageBuffer::from_pixel(image_size, image_size, QR_LIGHT);

    for y in 0..module_count {
        for x in 0..module_count {
            let index = (y * module_count + x) as usize;
            if colors[index] == qrcode::types::Color::Dark {
                let x0 = (x + QR_MARGIN) * scale;
                let y0 = (y + QR_MARGIN) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(x0 + dx, y0 + dy, QR_DARK);
                    }
                }
            }
        }
    }

    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    tracing::debug!("🖼️ QR PNG rendered ({} bytes)", buffer.len());
    Ok(buffer)
}

/// Renders a URL as an SVG QR code in brand colors, for print use.
pub fn render_svg(url: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)?;

    let markup = code
        .render::<svg::Color<'_>>()
        .min_dimensions(QR_TARGET_SIZE, QR_TARGET_SIZE)
        .dark_color(svg::Color("#4A2C17"))
        .light_color(svg::Color("#FFF8F0"))
        .build();

    tracing::debug!("🖼️ QR SVG rendered ({} bytes)", markup.len());
    Ok(markup)
}

/// Checks a table link code's shape and freshness.
///
/// This is a format check, not a security boundary: the code is never
/// matched against a registry of issued codes, so any well-formed,
/// sufficiently fresh code passes regardless of which table it was minted
/// for. The freshness budget is applied against the caller-supplied
/// issuance timestamp.
pub fn validate_code(code: &str, issued_at: DateTime<Utc>, max_age: Duration) -> bool {
    if code.is_empty() || code.chars().count() != CODE_LENGTH {
        return false;
    }

    Utc::now() - issued_at <= max_age
}
