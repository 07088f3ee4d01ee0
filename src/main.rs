use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use log::info;

use vaquinha_pix::brcode;
use vaquinha_pix::models::pix::{cents_from_reais, PixCharge};
use vaquinha_pix::settings::Settings;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.toml")]
    config: String,
    /// Fixed amount in reais (e.g. 20.00); omit to let the payer choose.
    #[arg(short, long)]
    amount: Option<f64>,
    /// Free-text description shown in the payer's banking app.
    #[arg(short, long)]
    description: Option<String>,
    /// Print the charge as JSON instead of plain text.
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "log4rs.yaml")]
    log4rs: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args.config).expect("Failed to load settings.");

    init_logging(&args.log4rs).expect("Failed to initialize logging.");
    info!("Generating Pix charge for {}.", settings.merchant.name);

    let charge = PixCharge {
        pix_key: settings.pix.key,
        pix_key_type: settings.pix.key_type,
        merchant_name: settings.merchant.name,
        merchant_city: settings.merchant.city,
        amount_in_cents: args.amount.map(cents_from_reais),
        description: args.description,
    };

    let payload = brcode::build_payload(&charge)?;
    let display_key = brcode::format_pix_key(&charge.pix_key, charge.pix_key_type);

    if args.json {
        let charge_json = serde_json::json!({
            "payload": payload,
            "pixKey": display_key,
            "amount": charge.amount_in_cents.map(brcode::format_brl),
        });
        println!("{}", serde_json::to_string_pretty(&charge_json)?);
    } else {
        println!("[*] Pix key: {}", display_key);
        if let Some(cents) = charge.amount_in_cents {
            println!("[*] Amount: {}", brcode::format_brl(cents));
        }
        println!("{}", payload);
    }

    Ok(())
}

fn init_logging(path: &str) -> Result<(), anyhow::Error> {
    if !Path::new("logs").exists() {
        fs::create_dir("logs")?;
    }

    match log4rs::init_file(path, Default::default()) {
        Ok(_) => Ok(()),
        Err(e) => {
            println!("[ERROR] Failed to initialize logging: {}", e);
            Err(anyhow::anyhow!("Could not initialize logging: {}", e))
        }
    }
}
