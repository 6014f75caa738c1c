//! Share payloads: a link back to the simulation, the estimate text and a QR code.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use serde::Serialize;
use std::io::Cursor;

use crate::pricing::labels::estimate_text;
use crate::pricing::{QuoteResult, Selection};

const QR_MIN_DIMENSION: u32 = 200;

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("failed to encode QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("failed to render QR code image: {0}")]
    Image(#[from] image::ImageError),
}

/// Everything a buyer needs to pass an estimate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub url: String,
    pub text: String,
    /// `data:image/png;base64,...`
    pub qr_code: String,
}

impl SharePayload {
    pub fn build(
        base_url: &str,
        selection: &Selection,
        quote: &QuoteResult,
        issued_on: NaiveDate,
    ) -> Result<Self, ShareError> {
        let url = share_url(base_url, selection);
        let qr_code = qr_data_uri(&url)?;

        Ok(Self {
            text: estimate_text(selection, quote, issued_on),
            url,
            qr_code,
        })
    }
}

/// Link that reopens the simulation with the category and class preselected.
pub fn share_url(base_url: &str, selection: &Selection) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}ec={}&cc={}",
        base_url,
        separator,
        selection.election_category.code(),
        selection.vehicle_class.code()
    )
}

/// Render `content` as a QR code PNG embedded in a data URI.
pub fn qr_data_uri(content: &str) -> Result<String, ShareError> {
    let code = QrCode::new(content.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_DIMENSION, QR_MIN_DIMENSION)
        .build();

    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;

    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png.into_inner())
    ))
}
