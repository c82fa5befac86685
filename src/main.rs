use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use poe_item_parser::{parse_clipboard, Database, Result};

/// Parse a copied item tooltip and print the item record as JSON.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// File with the copied tooltip text; reads stdin when omitted
    input: Option<PathBuf>,

    /// Load the knowledge base from a directory instead of the bundled snapshot
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let clipboard = match read_input(&args) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error reading input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let loaded;
    let db = match &args.data_dir {
        Some(dir) => match Database::load_from_dir(dir) {
            Ok(db) => {
                loaded = db;
                &loaded
            }
            Err(err) => {
                eprintln!("Error loading knowledge base: {}", err);
                return ExitCode::FAILURE;
            }
        },
        None => Database::shared(),
    };

    match parse_clipboard(&clipboard, db) {
        Some(item) => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&item)
            } else {
                serde_json::to_string(&item)
            };
            match json {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Error serializing item: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
        None => {
            eprintln!("Not a recognizable item");
            ExitCode::FAILURE
        }
    }
}

fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
