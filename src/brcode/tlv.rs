//! Tag-length-value field encoding.
//!
//! Every BR Code field is `tag + length + value` where tag and length are
//! two decimal digits and length counts characters, not bytes. A field can
//! carry other fields: the merchant account information field wraps the
//! concatenated encodings of its children.

use super::PayloadError;

/// Largest value length a two-digit length prefix can declare.
pub const MAX_VALUE_LEN: usize = 99;

#[derive(Debug, Clone)]
pub enum Field {
    Leaf { tag: &'static str, value: String },
    Group { tag: &'static str, children: Vec<Field> },
}

impl Field {
    pub fn leaf(tag: &'static str, value: impl Into<String>) -> Self {
        Field::Leaf {
            tag,
            value: value.into(),
        }
    }

    pub fn group(tag: &'static str, children: Vec<Field>) -> Self {
        Field::Group { tag, children }
    }

    pub fn encode(&self) -> Result<String, PayloadError> {
        match self {
            Field::Leaf { tag, value } => encode_tlv(tag, value),
            Field::Group { tag, children } => {
                let mut inner = String::new();
                for child in children {
                    inner.push_str(&child.encode()?);
                }
                encode_tlv(tag, &inner)
            }
        }
    }
}

fn encode_tlv(tag: &str, value: &str) -> Result<String, PayloadError> {
    let length = value.chars().count();
    if length > MAX_VALUE_LEN {
        return Err(PayloadError::FieldTooLong {
            tag: tag.to_string(),
            length,
        });
    }

    Ok(format!("{}{:02}{}", tag, length, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_encoding() {
        assert_eq!(Field::leaf("00", "01").encode().unwrap(), "000201");
        assert_eq!(Field::leaf("58", "BR").encode().unwrap(), "5802BR");
    }

    #[test]
    fn test_length_is_zero_padded() {
        let encoded = Field::leaf("53", "986").encode().unwrap();
        assert_eq!(encoded, "5303986");
        assert_eq!(&encoded[2..4], "03");
    }

    #[test]
    fn test_group_wraps_child_encodings() {
        let group = Field::group(
            "26",
            vec![
                Field::leaf("00", "BR.GOV.BCB.PIX"),
                Field::leaf("01", "11999998888"),
            ],
        );

        assert_eq!(
            group.encode().unwrap(),
            "26330014BR.GOV.BCB.PIX011111999998888"
        );
    }

    #[test]
    fn test_limit_value_still_fits() {
        let value = "a".repeat(MAX_VALUE_LEN);
        let encoded = Field::leaf("01", value).encode().unwrap();
        assert_eq!(&encoded[2..4], "99");
        assert_eq!(encoded.len(), 4 + MAX_VALUE_LEN);
    }

    #[test]
    fn test_overlong_value_is_rejected() {
        let err = Field::leaf("01", "a".repeat(100)).encode().unwrap_err();
        assert_eq!(
            err,
            PayloadError::FieldTooLong {
                tag: "01".to_string(),
                length: 100
            }
        );
    }

    #[test]
    fn test_overlong_group_is_rejected() {
        let children = vec![
            Field::leaf("00", "x".repeat(60)),
            Field::leaf("01", "y".repeat(60)),
        ];
        let err = Field::group("26", children).encode().unwrap_err();
        assert_eq!(
            err,
            PayloadError::FieldTooLong {
                tag: "26".to_string(),
                length: 128
            }
        );
    }
}
