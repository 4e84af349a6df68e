//! Command-line front end: load the catalog file and run read queries.
//!
//! Usage:
//!   catalog list
//!   catalog get 3
//!   catalog top-ten
//!   catalog search --manufacturer acme --sku '' --name ''
//!   CATALOG_DATA_PATH=/srv/products.json catalog count

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use catalog_core::ProductId;
use catalog_infra::{CatalogConfig, ProductCatalog, ProductRepository};
use catalog_products::ProductReportFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Query the in-memory product catalog")]
pub struct Cli {
    /// Catalog file; overrides CATALOG_DATA_PATH.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Human-readable logs instead of JSON.
    #[arg(long, global = true)]
    pub pretty_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every product.
    List,
    /// Print one product.
    Get { id: ProductId },
    /// Print the ten products with the most stock.
    TopTen,
    /// Print products matching any of the given criteria.
    ///
    /// Omitted criteria are empty and match everything.
    Search {
        #[arg(long, default_value = "")]
        manufacturer: String,
        #[arg(long, default_value = "")]
        sku: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Print the number of loaded products.
    Count,
}

impl Command {
    fn filter(&self) -> Option<ProductReportFilter> {
        match self {
            Command::Search {
                manufacturer,
                sku,
                name,
            } => Some(ProductReportFilter::new(manufacturer, sku, name)),
            _ => None,
        }
    }
}

/// Resolve configuration, load the catalog, and run the command.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match cli.data {
        Some(path) => CatalogConfig::default().with_data_path(path),
        None => CatalogConfig::from_env().context("reading catalog configuration")?,
    };

    let catalog = ProductCatalog::open(&config)
        .with_context(|| format!("loading catalog from {}", config.data_path().display()))?;

    execute(&catalog, &cli.command, out)
}

/// Run one command against an already loaded catalog, writing JSON to `out`.
pub fn execute<S>(catalog: &ProductCatalog<S>, command: &Command, out: &mut impl Write) -> Result<()>
where
    S: ProductRepository,
{
    match command {
        Command::List => write_json(out, &catalog.list_products()),
        Command::Get { id } => match catalog.get_product(*id) {
            Some(product) => write_json(out, &product),
            None => bail!("product id [{id}] not found"),
        },
        Command::TopTen => write_json(out, &catalog.top_ten_products()),
        Command::Search { .. } => {
            let filter = command.filter().unwrap_or_default();
            write_json(out, &catalog.search_products(&filter))
        }
        Command::Count => write_json(out, &catalog.count()),
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("writing JSON output")?;
    writeln!(out).context("writing JSON output")?;
    Ok(())
}
