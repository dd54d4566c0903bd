//! Hash table generation CLI
//!
//! Usage: shadowtable_generate <token> [options]
//!
//! Options:
//!   -n <count>       Number of records (default: 100)
//!   -a <algorithm>   Hash algorithm: sha256 or sha512 (default: sha512)
//!   -t <dir>         Hash tables directory (default: hash_tables)
//!   --help, -h       Show help
//!
//! Example: shadowtable_generate alice -n 1000 -a sha256 -t ~/.hash_tables

use shadowtable::Algorithm;
use shadowtable::app::generator::{TableRequest, generate_table_interactive};
use shadowtable::constants::{DEFAULT_ALGORITHM, DEFAULT_AMOUNT, DEFAULT_TABLES_DIR};
use std::env;
use std::path::PathBuf;

struct Args {
    token: String,
    amount: String,
    algorithm: String,
    tables_dir: PathBuf,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <token> [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <token>          Name of the table file (a single path segment)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n <count>       Number of records (default: {})", DEFAULT_AMOUNT);
    eprintln!("  -a <algorithm>   Hash algorithm (default: {})", DEFAULT_ALGORITHM);
    eprintln!("  -t <dir>         Hash tables directory (default: {})", DEFAULT_TABLES_DIR);
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Supported algorithms: {:?}", Algorithm::names());
    eprintln!("The tables directory must be accessible only by its owner (e.g. mode 0700).");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut token: Option<String> = None;
    let mut amount = DEFAULT_AMOUNT.to_string();
    let mut algorithm = DEFAULT_ALGORITHM.to_string();
    let mut tables_dir = PathBuf::from(DEFAULT_TABLES_DIR);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "-a" | "-t" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("Missing value for {}", args[i]))?
                    .clone();
                match args[i].as_str() {
                    "-n" => amount = value,
                    "-a" => algorithm = value,
                    _ => tables_dir = PathBuf::from(value),
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if token.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                token = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let token = token.ok_or("Missing token argument")?;

    Ok(Args {
        token,
        amount,
        algorithm,
        tables_dir,
    })
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let request = TableRequest {
        token: &args.token,
        amount: &args.amount,
        algorithm: &args.algorithm,
        tables_dir: &args.tables_dir,
    };

    if let Err(e) = generate_table_interactive(&request) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    log::info!("table for {:?} is ready", args.token);
}
