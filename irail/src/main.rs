use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use irail::api::{ConnectionQuery, Language, LiveboardQuery};
use irail::domain::DynamicValue;
use irail::{IrailClient, IrailConfig, IrailError};

const USAGE: &str = "\
Usage:
  irail stations [PREFIX]     List stations, optionally by name prefix
  irail connections FROM TO   Connections between two stations
  irail liveboard STATION     Departures from a station
  irail vehicle ID            Details for a vehicle, e.g. BE.NMBS.IC1832

Environment:
  IRAIL_BASE_URL   API base URL (default https://api.irail.be)
  IRAIL_LANG       en, nl, fr or de (default en)
  RUST_LOG         log filter, e.g. irail=debug";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let client = match build_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create iRail client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.as_slice() {
        ["stations"] => stations(&client, "").await,
        ["stations", prefix] => stations(&client, prefix).await,
        ["connections", from, to] => connections(&client, from, to).await,
        ["liveboard", station] => liveboard(&client, station).await,
        ["vehicle", id] => vehicle(&client, id).await,
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client() -> Result<IrailClient, IrailError> {
    let mut config = IrailConfig::new();

    if let Ok(url) = std::env::var("IRAIL_BASE_URL") {
        config = config.with_base_url(url);
    }

    if let Ok(lang) = std::env::var("IRAIL_LANG") {
        let language: Language = lang
            .parse()
            .map_err(|e| IrailError::InvalidConfig(format!("IRAIL_LANG: {e}")))?;
        config = config.with_language(language);
    }

    IrailClient::new(config)
}

async fn stations(client: &IrailClient, prefix: &str) -> Result<(), IrailError> {
    let list = client.search_stations(prefix).await?;
    for station in &list {
        println!("{station}");
    }
    println!();
    println!(
        "{} stations (API {}, generated {})",
        list.len(),
        list.envelope.version,
        list.envelope.timestamp
    );
    Ok(())
}

async fn connections(client: &IrailClient, from: &str, to: &str) -> Result<(), IrailError> {
    let list = client
        .get_connections(from, to, &ConnectionQuery::new())
        .await?;
    for connection in &list {
        println!("{connection}");
        println!(
            "  towards {} on {}",
            connection.departure.direction.name(),
            connection.departure.vehicle
        );
        println!();
    }
    Ok(())
}

async fn liveboard(client: &IrailClient, station: &str) -> Result<(), IrailError> {
    let board = client
        .get_liveboard_by_name(station, &LiveboardQuery::new())
        .await?;

    let departures = board_departures(&board);
    if departures.is_empty() {
        println!("No departures from {station}");
        return Ok(());
    }
    departures.into_iter().for_each(print_departure);
    Ok(())
}

/// Departures on a board. A board with a single departure arrives as one
/// record rather than a list.
fn board_departures(board: &DynamicValue) -> Vec<&DynamicValue> {
    match board {
        DynamicValue::List(departures) => departures.iter().collect(),
        DynamicValue::Record(record) if !record.is_empty() => vec![board],
        _ => Vec::new(),
    }
}

fn print_departure(departure: &DynamicValue) {
    let text = |field: &str| {
        departure
            .get(field)
            .and_then(DynamicValue::as_str)
            .unwrap_or("?")
    };
    let destination = departure
        .get("stationinfo")
        .and_then(|s| s.get("name"))
        .and_then(DynamicValue::as_str)
        .unwrap_or_else(|| text("station"));
    let delay_mins = departure
        .get("delay")
        .and_then(DynamicValue::as_i64)
        .unwrap_or(0)
        / 60;

    println!(
        "{:<12} platform {:<3} +{:<3} {}",
        text("vehicle"),
        text("platform"),
        delay_mins,
        destination
    );
}

async fn vehicle(client: &IrailClient, id: &str) -> Result<(), IrailError> {
    let info = client.get_vehicle(id).await?;
    match info.as_record() {
        Some(record) if record.contains("name") => {
            for (field, value) in record.iter() {
                match value {
                    DynamicValue::Text(s) => println!("{field}: {s}"),
                    DynamicValue::Number(n) => println!("{field}: {n}"),
                    DynamicValue::Bool(b) => println!("{field}: {b}"),
                    _ => {}
                }
            }
        }
        _ => println!("No details for {id}"),
    }
    Ok(())
}
