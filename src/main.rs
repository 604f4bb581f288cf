//! pda-engine CLI
//!
//! Estimate port call costs from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Quote a call with the terminal's stored defaults
//! pda-engine quote --port delta-dock --ship ship.json
//!
//! # Quote with an exchange rate and a parameter override, as JSON
//! pda-engine quote --port san-pedro --ship ship.json --rate 1475 --params override.json --format json
//!
//! # List terminals
//! pda-engine ports
//!
//! # Show a terminal's stored defaults and fallbacks
//! pda-engine defaults --port vitco
//! ```

use pda_engine::core::vessel::ShipParticulars;
use pda_engine::pricing::config::EngineConfig;
use pda_engine::pricing::engine::PdaEngine;
use pda_engine::tariff::parameters::ParameterOverride;
use pda_engine::terminals::Terminal;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"pda-engine — proforma disbursement account estimates for port terminals

USAGE:
    pda-engine <COMMAND> [OPTIONS]

COMMANDS:
    quote       Price a port call
    ports       List known terminals
    defaults    Show a terminal's stored defaults and fallbacks
    help        Show this message

OPTIONS (quote):
    --port <ID>            Terminal id (see `ports`)
    --ship <FILE>          Path to JSON vessel particulars
    --rate <N>             Local currency per USD (sell)
    --params <FILE>        JSON parameter override (replaces stored defaults)
    --format <FORMAT>      Output format: text (default) or json
    --config <FILE>        JSON engine config
    --default-rate <N>     Rate used when none is supplied (default: 1450)

OPTIONS (defaults):
    --port <ID>            Terminal id

EXAMPLES:
    pda-engine quote --port delta-dock --ship ship.json
    pda-engine quote --port san-pedro --ship ship.json --rate 1475 --format json
    pda-engine defaults --port del-guazu"#
    );
}

#[derive(serde::Serialize)]
struct QuoteOutput<'a> {
    port: &'a str,
    terminal: &'a str,
    exchange_rate: Decimal,
    #[serde(flatten)]
    bill: &'a pda_engine::core::bill::ItemizedBill,
}

#[derive(serde::Serialize)]
struct PortOutput {
    id: &'static str,
    name: &'static str,
    rate_sensitive: bool,
}

#[derive(serde::Serialize)]
struct DefaultsOutput {
    port: &'static str,
    fields: &'static [&'static str],
    stored: ParameterOverride,
    fallback: pda_engine::tariff::parameters::TariffParameters,
}

fn load_json<T: DeserializeOwned>(path: &str, what: &str) -> T {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {} file '{}': {}", what, path, e);
        process::exit(1);
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing {} JSON: {}", what, e);
        process::exit(1);
    })
}

fn parse_decimal(flag: &str, value: Option<&String>) -> Decimal {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{} requires a number", flag);
            process::exit(1);
        })
}

fn require_value(flag: &str, value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

fn lookup_terminal(port: &str) -> Terminal {
    Terminal::from_id(port).unwrap_or_else(|| {
        eprintln!("Unknown port '{}'. Run `pda-engine ports` for the list.", port);
        process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_quote(args: &[String]) {
    let mut port = None;
    let mut ship_path = None;
    let mut rate = None;
    let mut params_path = None;
    let mut format = "text".to_string();
    let mut config_path = None;
    let mut default_rate = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                i += 1;
                port = Some(require_value("--port", args.get(i)));
            }
            "--ship" => {
                i += 1;
                ship_path = Some(require_value("--ship", args.get(i)));
            }
            "--rate" => {
                i += 1;
                rate = Some(parse_decimal("--rate", args.get(i)));
            }
            "--params" => {
                i += 1;
                params_path = Some(require_value("--params", args.get(i)));
            }
            "--format" => {
                i += 1;
                format = require_value("--format", args.get(i));
            }
            "--config" => {
                i += 1;
                config_path = Some(require_value("--config", args.get(i)));
            }
            "--default-rate" => {
                i += 1;
                default_rate = Some(parse_decimal("--default-rate", args.get(i)));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let port = port.unwrap_or_else(|| {
        eprintln!("Error: --port <ID> is required");
        process::exit(1);
    });
    let ship_path = ship_path.unwrap_or_else(|| {
        eprintln!("Error: --ship <FILE> is required");
        process::exit(1);
    });

    let mut config = match config_path {
        Some(path) => EngineConfig::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => EngineConfig::default(),
    };
    if let Some(default_rate) = default_rate {
        config = EngineConfig::new(default_rate).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        });
    }

    let terminal = lookup_terminal(&port);
    let ship: ShipParticulars = load_json(&ship_path, "ship");
    let params: Option<ParameterOverride> = params_path.map(|path| load_json(&path, "parameters"));

    let engine = PdaEngine::new(config);
    let bill = engine.calculate(terminal.id(), &ship, rate, params.as_ref());

    if format == "json" {
        print_json(&QuoteOutput {
            port: terminal.id(),
            terminal: terminal.name(),
            exchange_rate: engine.effective_exchange_rate(&ship, rate),
            bill: &bill,
        });
    } else {
        if let Some(name) = &ship.vessel_name {
            println!("Vessel:   {}", name);
        }
        println!("Terminal: {}", terminal.name());
        if terminal.is_rate_sensitive() {
            println!("Rate:     {} ARS/USD", engine.effective_exchange_rate(&ship, rate));
        }
        println!();
        print!("{}", bill);
    }
}

fn cmd_ports() {
    let ports: Vec<PortOutput> = Terminal::ALL
        .iter()
        .map(|t| PortOutput {
            id: t.id(),
            name: t.name(),
            rate_sensitive: t.is_rate_sensitive(),
        })
        .collect();
    print_json(&ports);
}

fn cmd_defaults(args: &[String]) {
    let mut port = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                i += 1;
                port = Some(require_value("--port", args.get(i)));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let port = port.unwrap_or_else(|| {
        eprintln!("Error: --port <ID> is required");
        process::exit(1);
    });
    let terminal = lookup_terminal(&port);

    print_json(&DefaultsOutput {
        port: terminal.id(),
        fields: terminal.parameter_fields(),
        stored: terminal.default_parameters(),
        fallback: terminal.fallback_parameters(),
    });
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "quote" => cmd_quote(rest),
        "ports" => cmd_ports(),
        "defaults" => cmd_defaults(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
