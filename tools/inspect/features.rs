// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use std::process::ExitCode;

use clap::Parser;
use cryptoplug::config::plugin_key;
use cryptoplug::publisher::USE_RNG;
use cryptoplug::{Availability, Config, Layout, Publisher, Settings};

#[derive(Parser)]
#[command(version, about = "Prints the features the botan backend publishes")]
struct Arguments {
    /// Configuration file, the default search path is used if omitted
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Do not advertise random number generators
    #[arg(long)]
    no_rng: bool,

    /// Restrict the compiled capabilities to these flags (repeatable)
    #[arg(short = 'o', long = "only", value_name = "FLAG")]
    only: Vec<String>,

    /// Print the table as JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// List the compiled capability flags and exit
    #[arg(long)]
    flags: bool,
}

fn load_config(args: &Arguments) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::load_default().map_err(|e| e.to_string())?,
    };
    if args.no_rng {
        let key = plugin_key(&config, USE_RNG);
        config.set_bool(&key, false).map_err(|e| e.to_string())?;
    }
    Ok(config)
}

fn availability(only: &[String]) -> Result<Availability, String> {
    let compiled = Availability::compiled();
    if only.is_empty() {
        return Ok(compiled);
    }
    let mut selected = Availability::empty();
    for name in only {
        match Availability::from_name(&name.to_ascii_uppercase()) {
            Some(flag) => selected |= flag,
            None => return Err(format!("unknown capability flag '{}'", name)),
        }
    }
    Ok(selected & compiled)
}

fn main() -> ExitCode {
    let args = Arguments::parse();

    if args.flags {
        for (name, _) in Availability::compiled().iter_names() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    let available = match availability(&args.only) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::from(1);
        }
    };

    let publisher = Publisher::new(Layout::standard(), available);
    let table = publisher.get_features(&config);

    if args.json {
        match serde_json::to_string_pretty(table.as_slice()) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize features: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        for feature in table.iter() {
            println!("{}", feature);
        }
        println!(
            "{} features in namespace '{}'",
            table.len(),
            config.namespace()
        );
    }

    ExitCode::SUCCESS
}
