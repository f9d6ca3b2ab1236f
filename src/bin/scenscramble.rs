//! Scenario Scrambler CLI (scenscramble) - Main binary entry point

use scenscramble::cli::args::{CliArgs, output_joins_corpus, parse_args};
use scenscramble::cli::output::{format_inventory_json, format_report_json, format_report_text};
use scenscramble::{ScrambleOptions, StreamSink};
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug scenscramble scenarios/ 1000
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => {
            print_help();
            return;
        }
        Some("--version" | "-v") => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = if cli_args.inventory {
        handle_inventory(&cli_args)
    } else {
        handle_scramble(&cli_args)
    };

    process::exit(exit_code);
}

fn options_from(args: &CliArgs) -> ScrambleOptions {
    let mut opts = ScrambleOptions {
        seed: args.seed,
        max_passes: args.max_passes,
        sorted: args.sorted,
        ..ScrambleOptions::default()
    };
    if let Some(ext) = &args.extension {
        opts.extension.clone_from(ext);
    }
    opts
}

fn exit_code_for(err: &scenscramble::Error) -> i32 {
    match err {
        scenscramble::Error::InvalidInput(_) => 2,
        scenscramble::Error::Exhausted { .. } => 3,
        scenscramble::Error::Io(_) => 4,
    }
}

fn handle_scramble(args: &CliArgs) -> i32 {
    let opts = options_from(args);

    if output_joins_corpus(args, &opts.extension) {
        eprintln!("Error: --output must not be a .{} file inside the scenario directory", opts.extension);
        return 2;
    }

    let result = if let Some(path) = &args.output {
        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error: Failed to create {path}: {e}");
                return 4;
            }
        };
        let mut sink = StreamSink::new(BufWriter::new(file));
        scenscramble::scramble(&args.directory, args.amount, &opts, &mut sink)
    } else {
        let mut sink = StreamSink::new(io::stdout().lock());
        scenscramble::scramble(&args.directory, args.amount, &opts, &mut sink)
    };

    match result {
        Ok(report) => {
            log::info!("{}", format_report_text(&report));
            if args.report {
                eprintln!("{}", format_report_json(&report));
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn handle_inventory(args: &CliArgs) -> i32 {
    match scenscramble::inventory(&args.directory, &options_from(args)) {
        Ok(inventory) => {
            println!("{}", format_inventory_json(&inventory));
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn print_help() {
    println!("Scenario Scrambler (scenscramble) - Sample data lines from scenario files");
    println!();
    println!("USAGE:");
    println!("    scenscramble <DIRECTORY> <AMOUNT> [OPTIONS]");
    println!("    scenscramble <DIRECTORY> --inventory [OPTIONS]");
    println!();
    println!("Reads every *.scen file directly under DIRECTORY, skips each file's first");
    println!("line, and prints 'version 1' followed by AMOUNT randomly selected lines.");
    println!("Files are re-read from the start until AMOUNT lines have been printed.");
    println!();
    println!("OPTIONS:");
    println!("    --seed <N>                Seed the random source for reproducible output");
    println!("    --max-passes <N>          Fail after N full passes short of AMOUNT");
    println!("    --extension <EXT>         Scenario file extension (default: scen)");
    println!("    --sorted                  Visit files in path order");
    println!("    --output <FILE>           Write the sample to FILE instead of stdout");
    println!("    --report                  Print a JSON run report to stderr");
    println!("    --inventory               Print file and line counts as JSON, no sampling");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("NOTE:");
    println!("    With no eligible lines and AMOUNT > 0 the sampler never finishes");
    println!("    unless --max-passes is given.");
    println!();
    println!("EXAMPLES:");
    println!("    scenscramble maps/scenarios 1000 > sample.scen");
    println!("    scenscramble maps/scenarios 500 --seed 42 --sorted --report");
    println!("    scenscramble maps/scenarios --inventory");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("scenscramble {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
