use serde::{Deserialize, Serialize};

/// Kind of Pix key the charge receives on. Only affects how the key is
/// shown to contributors; the raw key is embedded in the payload verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PixKeyType {
    Cpf,
    Cnpj,
    Email,
    Telefone,
    ChaveAleatoria,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixCharge {
    pub pix_key: String,
    pub pix_key_type: PixKeyType,
    pub merchant_name: String,
    pub merchant_city: String,
    /// Fixed charge amount in centavos. None leaves the amount open and the
    /// payer fills it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Convert a decimal amount in reais to whole centavos, rounding half to
/// even. Sub-cent input rounds away here, so `0.005` becomes zero centavos.
pub fn cents_from_reais(reais: f64) -> i64 {
    (reais * 100.0).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_wire_names() {
        let parsed: PixKeyType = serde_json::from_str("\"chave_aleatoria\"").unwrap();
        assert_eq!(parsed, PixKeyType::ChaveAleatoria);
        assert_eq!(
            serde_json::to_string(&PixKeyType::Telefone).unwrap(),
            "\"telefone\""
        );
    }

    #[test]
    fn test_charge_wire_names_are_camel_case() {
        let charge = PixCharge {
            pix_key: "11999998888".to_string(),
            pix_key_type: PixKeyType::Telefone,
            merchant_name: "Joao Santos".to_string(),
            merchant_city: "Brasil".to_string(),
            amount_in_cents: Some(2000),
            description: None,
        };

        let json = serde_json::to_string(&charge).unwrap();
        assert!(json.contains("\"pixKey\":\"11999998888\""));
        assert!(json.contains("\"merchantCity\":\"Brasil\""));
        assert!(json.contains("\"amountInCents\":2000"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_cents_from_reais() {
        assert_eq!(cents_from_reais(20.0), 2000);
        assert_eq!(cents_from_reais(12.5), 1250);
        // Half-centavo ties round to even.
        assert_eq!(cents_from_reais(0.005), 0);
        assert_eq!(cents_from_reais(0.125), 12);
    }
}
