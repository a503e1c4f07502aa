//! Utility to estimate nutrition for a food description from the command line
//!
//! Usage: foodcal-estimate [--lookup] <description...>

use foodcal::config::Config;
use foodcal::nutrition::{analyze, lookup_match};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let lookup = args.first().map(|a| a == "--lookup").unwrap_or(false);
    if lookup {
        args.remove(0);
    }

    if args.is_empty() {
        eprintln!("Usage: foodcal-estimate [--lookup] <description...>");
        std::process::exit(2);
    }
    let text = args.join(" ");

    let json = if lookup {
        serde_json::to_string_pretty(&lookup_match(&text))?
    } else {
        let config = Config::from_env()?;
        serde_json::to_string_pretty(&analyze(&text, config.match_mode))?
    };
    println!("{}", json);

    Ok(())
}
