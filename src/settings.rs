use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::models::pix::PixKeyType;

#[derive(Debug, Deserialize)]
pub struct Merchant {
    pub name: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct Pix {
    pub key: String,
    pub key_type: PixKeyType,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub merchant: Merchant,
    pub pix: Pix,
}

impl Settings {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_settings_parse() {
        let toml = r#"
            [merchant]
            name = "Joao Santos"
            city = "Brasil"

            [pix]
            key = "11999998888"
            key_type = "telefone"
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.merchant.city, "Brasil");
        assert_eq!(settings.pix.key_type, PixKeyType::Telefone);
    }
}
