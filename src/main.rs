//! CLI entry point for vitrina
//!
//! Replays the page timeline (loading screen, hero entrance, typewriter,
//! scroll highlighting) without a browser.

use std::path::PathBuf;
use std::process;
use vitrina::cli::simulate::{self, SimulateOptions};
use vitrina::runtime::debug::{DebugConfig, DebugLogger, LogLevel};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "simulate" => {
            let (options, debug) = match parse_simulate_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("Error: {}", message);
                    eprintln!();
                    print_usage();
                    process::exit(1);
                }
            };
            run_simulate(options, debug);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("vitrina - Portfolio page timeline engine");
    println!();
    println!("USAGE:");
    println!("    cargo run -- simulate [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    simulate                 Replay loading, hero, typewriter and scroll frames");
    println!("    --help, -h               Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <file.json>     Engine configuration (defaults for missing fields)");
    println!("    --prefs <file.json>      Preference store holding the saved theme");
    println!("    --ticks <n>              Typewriter ticks to replay (default 40)");
    println!("    --toggle-theme           Flip and persist the theme before replaying");
    println!("    --realtime               Sleep between frames");
    println!("    --debug                  Log engine decisions to stderr");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run -- simulate --ticks 60");
    println!("    cargo run -- simulate --prefs prefs.json --toggle-theme --debug");
}

fn parse_simulate_args(args: &[String]) -> Result<(SimulateOptions, bool), String> {
    let mut options = SimulateOptions::default();
    let mut debug = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("Missing value for --config")?;
                options.config = Some(PathBuf::from(path));
            }
            "--prefs" => {
                let path = iter.next().ok_or("Missing value for --prefs")?;
                options.prefs = Some(PathBuf::from(path));
            }
            "--ticks" => {
                let value = iter.next().ok_or("Missing value for --ticks")?;
                options.ticks = value
                    .parse()
                    .map_err(|_| format!("Invalid tick count '{}'", value))?;
            }
            "--toggle-theme" => options.toggle_theme = true,
            "--realtime" => options.realtime = true,
            "--debug" => debug = true,
            other => return Err(format!("Unknown option '{}'", other)),
        }
    }

    Ok((options, debug))
}

fn run_simulate(options: SimulateOptions, debug: bool) {
    let debug_config = if debug {
        DebugConfig::verbose(LogLevel::Debug)
    } else {
        DebugConfig::default()
    };
    if let Err(err) = DebugLogger::init(debug_config) {
        eprintln!("Warning: Failed to install logger: {}", err);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: Failed to start runtime");
            eprintln!("Reason: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = runtime.block_on(simulate::run(options)) {
        eprintln!("Error: Simulation failed");
        eprintln!("Reason: {}", err);
        process::exit(1);
    }
}
