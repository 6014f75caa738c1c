use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use senkyocar_quote::catalog::{ElectionCategory, Region, VehicleClass};
use senkyocar_quote::config::AppConfig;
use senkyocar_quote::pricing::labels::{format_yen, format_yen_tax_included, quote_delivery_label};
use senkyocar_quote::pricing::{QuoteEngine, QuoteResult, Selection};
use senkyocar_quote::{app, load_tables, telemetry, AppState};

#[derive(Parser, Debug)]
#[command(
    name = "senkyocar-quote",
    about = "Quote campaign vehicle rentals from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute a quote for a selection read from a JSON file or stdin
    Quote(QuoteArgs),
    /// Show delivery terms for a region code
    Delivery {
        /// Region code, e.g. tokyo
        region: String,
    },
    /// List every region code with its delivery terms
    Regions,
    /// Compare base prices across vehicle classes
    Compare {
        #[arg(long, value_parser = parse_category)]
        category: ElectionCategory,
        /// Currently selected class
        #[arg(long = "class", value_parser = parse_class)]
        class: VehicleClass,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Selection JSON file; stdin when omitted
    input: Option<PathBuf>,
    /// Print the quote as JSON
    #[arg(long)]
    json: bool,
}

fn parse_category(value: &str) -> Result<ElectionCategory, String> {
    ElectionCategory::from_code(value)
        .ok_or_else(|| format!("unknown election category '{value}' (unity, general, national, ad)"))
}

fn parse_class(value: &str) -> Result<VehicleClass, String> {
    VehicleClass::from_code(value)
        .ok_or_else(|| format!("unknown vehicle class '{value}' (s, m, l, ll)"))
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Quote(args) => {
            let tables = load_tables(&config)?;
            let selection = read_selection(args.input.as_ref())?;
            let quote = QuoteEngine::new(&tables).compute_quote(&selection)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_quote(&selection, &quote);
            }
            Ok(())
        }
        Command::Delivery { region } => {
            let tables = load_tables(&config)?;
            let delivery = QuoteEngine::new(&tables).delivery_quote(Some(region.as_str()));
            let name = delivery.region_name.unwrap_or("(unknown region)");
            println!("{} {}", region, name);
            println!("  one way:    {}", delivery.label);
            println!("  round trip: {}", delivery.round_trip_label);
            Ok(())
        }
        Command::Regions => {
            let tables = load_tables(&config)?;
            let engine = QuoteEngine::new(&tables);
            for region in Region::ALL {
                let delivery = engine.delivery_quote(Some(region.code()));
                println!("{:<10} {:<6} {}", region.code(), region.name(), delivery.label);
            }
            Ok(())
        }
        Command::Compare { category, class } => {
            let tables = load_tables(&config)?;
            let rows = QuoteEngine::new(&tables).compare_classes(category, class)?;
            println!("{}", category.label());
            for row in rows {
                let marker = if row.is_current { "*" } else { " " };
                let recommended = if row.is_recommended { " おすすめ" } else { "" };
                println!(
                    "{} {:<8} {:>12} {:>+10}{}",
                    marker,
                    row.label,
                    format_yen(row.base_price),
                    row.price_difference,
                    recommended
                );
            }
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let environment = config.environment;
    let addr = config.server.socket_addr()?;
    let state = AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(?environment, %addr, "quote service ready");

    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn read_selection(input: Option<&PathBuf>) -> anyhow::Result<Selection> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read selection from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&json).context("invalid selection JSON")
}

fn print_quote(selection: &Selection, quote: &QuoteResult) {
    println!(
        "{} / {} / {}",
        selection.election_category.label(),
        selection.vehicle_class.label(),
        selection.vehicle_type().name()
    );
    println!("  車両基本料金  {}", format_yen(quote.subs.car_price));
    println!("  アンプ        {}", format_yen(quote.subs.amp_size));
    println!("  回転灯        {}", format_yen(quote.subs.signal_light));
    println!("  登壇台        {}", format_yen(quote.subs.taking_platform));
    println!("  小計          {}", format_yen(quote.sub_total_price));
    println!("  オプション    {}", format_yen(quote.option_total_price));
    println!("  配送料金      {}", quote_delivery_label(quote));
    if quote.options.body_wrapping_consultation {
        println!("  ラッピング    要相談");
    }
    println!("  合計          {}", format_yen_tax_included(quote.total_price));
}
