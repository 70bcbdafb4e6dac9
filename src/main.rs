use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Instrument};

use qr_inventory::app_system::{setup_tracing, AppConfig, InventorySystem};
use qr_inventory::domain::ProductCreate;
use qr_inventory::scanner::ScanOutcome;

#[derive(Debug, Parser)]
#[command(name = "qr_inventory", about = "QR-coded inventory with scan limits")]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a sample product and scan it until the gate closes
    Demo,
    /// Seed configured products, then treat each stdin line as decoded QR text
    Scan,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    setup_tracing(&config.logging.filter);
    info!(
        config_file = ?cli.config,
        buffer_size = config.actor.buffer_size,
        products = config.products.len(),
        "Configuration loaded"
    );

    let system = InventorySystem::new(&config);
    let result = match cli.command {
        Command::Demo => run_demo(&system).await,
        Command::Scan => run_scan(&system, &config.products).await,
    };

    system.shutdown().await?;
    result
}

async fn run_demo(system: &InventorySystem) -> Result<(), Box<dyn Error>> {
    let sample = ProductCreate {
        name: "Sample crate".to_string(),
        location: "Dock 1".to_string(),
        quantity: 3,
        price: 10.0,
        check_in_date: NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid check-in date")?,
        check_out_date: NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("invalid check-out date")?,
        scan_limit: 2,
    };

    let product = system.product_client.create_product(sample).await?;
    info!(product_id = %product.id, payload = %product.qr_payload, "Sample product created");

    let span = tracing::info_span!("demo_scans", product_id = %product.id);
    async {
        for _ in 0..3 {
            let outcome = system.scan_client.handle_scanned_text(product.qr_payload.as_str()).await?;
            print_outcome(&outcome);
        }
        let outcome = system.scan_client.handle_scanned_text("not json").await?;
        print_outcome(&outcome);
        Ok::<(), Box<dyn Error>>(())
    }
    .instrument(span)
    .await
}

async fn run_scan(system: &InventorySystem, products: &[ProductCreate]) -> Result<(), Box<dyn Error>> {
    for product in system.seed(products).await? {
        println!("{}\t{}\t{}", product.id, product.name, product.qr_payload);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let outcome = system.scan_client.handle_scanned_text(text).await?;
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &ScanOutcome) {
    println!("{}", outcome.notice());
    if let (Some(product), Some(status), Some(count)) =
        (outcome.product(), outcome.status(), outcome.scan_count())
    {
        println!(
            "  {} @ {}: {} | remaining {} | scans {}",
            product.name, product.location, status, product.quantity, count
        );
    }
}
