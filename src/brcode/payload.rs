//! Payload assembly for a Pix charge.
//!
//! Fields are encoded in the fixed BR Code order, the checksum field is
//! appended as the literal `6304` placeholder, and the CRC computed over
//! everything up to and including that placeholder is spliced in as the
//! final field value.

use log::{debug, warn};

use super::crc;
use super::tlv::Field;
use super::PayloadError;
use crate::models::pix::PixCharge;

/// GUI identifying the Pix arrangement inside the merchant account field.
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

// Field tags
const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_MERCHANT_ACCOUNT: &str = "26";
const TAG_ACCOUNT_GUI: &str = "00";
const TAG_ACCOUNT_KEY: &str = "01";
const TAG_ACCOUNT_DESCRIPTION: &str = "02";
const TAG_CATEGORY_CODE: &str = "52";
const TAG_CURRENCY: &str = "53";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY: &str = "58";
const TAG_MERCHANT_NAME: &str = "59";
const TAG_MERCHANT_CITY: &str = "60";
const TAG_CRC: &str = "63";

// Value limits from the BR Code layout
const MAX_DESCRIPTION_LEN: usize = 25;
const MAX_MERCHANT_NAME_LEN: usize = 25;
const MAX_MERCHANT_CITY_LEN: usize = 15;

/// Build the complete "Copia e Cola" payload for a charge.
///
/// The result is plain text, safe to render as a QR code or hand to a copy
/// action. The first validation failure aborts assembly; no partial payload
/// is ever returned.
pub fn build_payload(charge: &PixCharge) -> Result<String, PayloadError> {
    validate(charge)?;

    let mut payload = Field::leaf(TAG_PAYLOAD_FORMAT, "01").encode()?;

    let mut account = vec![
        Field::leaf(TAG_ACCOUNT_GUI, PIX_GUI),
        Field::leaf(TAG_ACCOUNT_KEY, charge.pix_key.clone()),
    ];
    if let Some(description) = &charge.description {
        if !description.is_empty() {
            let description = truncated(description, MAX_DESCRIPTION_LEN, "Description");
            ascii_checked(&description, "description")?;
            account.push(Field::leaf(TAG_ACCOUNT_DESCRIPTION, description));
        }
    }
    payload.push_str(&Field::group(TAG_MERCHANT_ACCOUNT, account).encode()?);

    payload.push_str(&Field::leaf(TAG_CATEGORY_CODE, "0000").encode()?);
    payload.push_str(&Field::leaf(TAG_CURRENCY, "986").encode()?);

    if let Some(cents) = charge.amount_in_cents {
        if cents > 0 {
            payload.push_str(&Field::leaf(TAG_AMOUNT, format_amount(cents)).encode()?);
        }
    }

    payload.push_str(&Field::leaf(TAG_COUNTRY, "BR").encode()?);

    let name = truncated(&charge.merchant_name, MAX_MERCHANT_NAME_LEN, "Merchant name");
    ascii_checked(&name, "merchant name")?;
    payload.push_str(&Field::leaf(TAG_MERCHANT_NAME, name.to_ascii_uppercase()).encode()?);

    let city = truncated(&charge.merchant_city, MAX_MERCHANT_CITY_LEN, "Merchant city");
    ascii_checked(&city, "merchant city")?;
    payload.push_str(&Field::leaf(TAG_MERCHANT_CITY, city.to_ascii_uppercase()).encode()?);

    // The CRC covers the payload with the checksum field's own tag and
    // length already in place.
    payload.push_str("6304");
    let checksum = crc::checksum(&payload);
    payload.truncate(payload.len() - 4);
    payload.push_str(&Field::leaf(TAG_CRC, checksum).encode()?);

    debug!("Encoded Pix payload ({} characters).", payload.len());
    Ok(payload)
}

fn validate(charge: &PixCharge) -> Result<(), PayloadError> {
    if charge.pix_key.is_empty() {
        return Err(PayloadError::InvalidRequest("pix key"));
    }
    if charge.merchant_name.is_empty() {
        return Err(PayloadError::InvalidRequest("merchant name"));
    }
    if charge.merchant_city.is_empty() {
        return Err(PayloadError::InvalidRequest("merchant city"));
    }

    ascii_checked(&charge.pix_key, "pix key")
}

/// Reject values the checksum and character-counted lengths cannot carry.
/// Checked before uppercasing; ASCII uppercasing never changes length.
fn ascii_checked(value: &str, field: &'static str) -> Result<(), PayloadError> {
    match value.chars().find(|c| !c.is_ascii()) {
        Some(character) => Err(PayloadError::UnsupportedCharacter { field, character }),
        None => Ok(()),
    }
}

fn truncated(value: &str, max: usize, what: &str) -> String {
    if value.chars().count() > max {
        warn!("{} truncated to {} characters.", what, max);
    }
    value.chars().take(max).collect()
}

fn format_amount(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
