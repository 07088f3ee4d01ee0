//! Pix "Copia e Cola" (BR Code) generation.
//!
//! Builds the text payload a banking app parses to pre-fill a transfer:
//! TLV-encoded fields in a fixed order, closed by a CRC-16/CCITT-FALSE
//! checksum field. Everything here is synchronous and pure; the surrounding
//! application owns storage and delivery of the resulting string.

mod crc;
mod display;
mod payload;
mod tlv;

pub use crc::checksum;
pub use display::{format_brl, format_pix_key};
pub use payload::build_payload;
pub use tlv::Field;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("Field {tag} value is {length} characters, limit is 99")]
    FieldTooLong { tag: String, length: usize },
    #[error("Missing mandatory field: {0}")]
    InvalidRequest(&'static str),
    #[error("Field {field} contains unsupported character {character:?}")]
    UnsupportedCharacter { field: &'static str, character: char },
}
