//! Hash table verification CLI
//!
//! Usage: shadowtable_verify <token> [-t <dir>]
//!
//! Prompts for a password and reports how many records of the token's table
//! it reproduces. Exits with status 1 when none match.

use shadowtable::app::verifier::verify_table_interactive;
use shadowtable::constants::DEFAULT_TABLES_DIR;
use std::env;
use std::path::PathBuf;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <token> [-t <dir>]", program);
    eprintln!("  -t <dir>         Hash tables directory (default: {})", DEFAULT_TABLES_DIR);
}

fn parse_args() -> Result<(String, PathBuf), String> {
    let args: Vec<String> = env::args().collect();

    let mut token: Option<String> = None;
    let mut tables_dir = PathBuf::from(DEFAULT_TABLES_DIR);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-t" => {
                let value = args.get(i + 1).ok_or("Missing value for -t")?;
                tables_dir = PathBuf::from(value);
                i += 1;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') && token.is_none() => token = Some(arg.to_string()),
            arg => return Err(format!("Unexpected argument: {}", arg)),
        }
        i += 1;
    }

    let token = token.ok_or("Missing token argument")?;
    Ok((token, tables_dir))
}

fn main() {
    env_logger::init();

    let (token, tables_dir) = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    match verify_table_interactive(&tables_dir, &token) {
        Ok(report) => {
            println!("{} of {} records match", report.matched, report.total);
            if report.matched == 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
