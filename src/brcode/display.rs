//! Display formatting for contributors. Cosmetic only: nothing here ever
//! touches the encoded payload.

use crate::models::pix::PixKeyType;

/// Re-punctuate a raw Pix key for on-screen display.
///
/// CPF and telefone keys are stored as bare digit strings; anything that
/// does not match the expected shape is returned unchanged.
pub fn format_pix_key(key: &str, key_type: PixKeyType) -> String {
    match key_type {
        PixKeyType::Cpf => format_cpf(key),
        PixKeyType::Telefone => format_telefone(key),
        _ => key.to_string(),
    }
}

/// Centavos as a display amount, e.g. `R$ 20,00`.
pub fn format_brl(cents: i64) -> String {
    format!("R$ {},{:02}", cents / 100, (cents % 100).abs())
}

fn all_digits(key: &str, count: usize) -> bool {
    key.len() == count && key.bytes().all(|b| b.is_ascii_digit())
}

fn format_cpf(key: &str) -> String {
    if !all_digits(key, 11) {
        return key.to_string();
    }
    format!("{}.{}.{}-{}", &key[..3], &key[3..6], &key[6..9], &key[9..])
}

fn format_telefone(key: &str) -> String {
    if !all_digits(key, 11) {
        return key.to_string();
    }
    format!("({}) {}-{}", &key[..2], &key[2..7], &key[7..])
}
