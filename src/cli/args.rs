//! CLI argument parsing

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub directory: String,
    pub amount: u64,
    pub seed: Option<u64>,
    pub max_passes: Option<u64>,
    pub extension: Option<String>,
    pub sorted: bool,
    pub output: Option<String>,
    pub report: bool,
    pub inventory: bool,
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

/// Parse command line arguments
///
/// `args[0]` is the program name; `DIRECTORY` and `AMOUNT` are positional and
/// may be interleaved with options.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut directory: Option<String> = None;
    let mut amount: Option<&str> = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                let value = next_value(args, &mut i, "--seed")?;
                cli.seed = Some(
                    value
                        .parse()
                        .map_err(|_| "--seed must be a non-negative integer".to_string())?,
                );
            }
            "--max-passes" => {
                let value = next_value(args, &mut i, "--max-passes")?;
                let passes: u64 = value
                    .parse()
                    .map_err(|_| "--max-passes must be a positive integer".to_string())?;
                if passes == 0 {
                    return Err("--max-passes must be greater than zero".to_string());
                }
                cli.max_passes = Some(passes);
            }
            "--extension" => {
                let value = next_value(args, &mut i, "--extension")?;
                let ext = value.trim_start_matches('.');
                if ext.is_empty() {
                    return Err("--extension must not be empty".to_string());
                }
                cli.extension = Some(ext.to_string());
            }
            "--output" => {
                cli.output = Some(next_value(args, &mut i, "--output")?.to_string());
            }
            "--sorted" => {
                cli.sorted = true;
            }
            "--report" => {
                cli.report = true;
            }
            "--inventory" => {
                cli.inventory = true;
            }
            arg if !arg.starts_with("--") => {
                if directory.is_none() {
                    directory = Some(arg.to_string());
                } else if amount.is_none() {
                    amount = Some(arg);
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    cli.directory = directory.ok_or_else(|| "Missing required argument: DIRECTORY".to_string())?;

    cli.amount = match amount {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("AMOUNT must be a non-negative integer, got '{raw}'"))?,
        None if cli.inventory => 0,
        None => return Err("Missing required argument: AMOUNT".to_string()),
    };

    Ok(cli)
}

/// Whether `--output` names a scenario file inside `DIRECTORY`
///
/// Such a file would be created before the pre-scan and then sampled along
/// with the rest of the corpus. Paths that cannot be resolved are compared
/// as given.
#[must_use]
pub fn output_joins_corpus(args: &CliArgs, extension: &str) -> bool {
    let Some(output) = args.output.as_deref() else {
        return false;
    };
    let output = Path::new(output);

    if output.extension().and_then(OsStr::to_str) != Some(extension.trim_start_matches('.')) {
        return false;
    }

    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let resolve = |p: &Path| fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf());

    resolve(parent) == resolve(Path::new(&args.directory))
}
