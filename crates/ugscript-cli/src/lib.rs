// ugscript-cli: shared utilities for CLI tools.

use std::process;

use tracing_subscriber::EnvFilter;
use ugscript_core::{ConversionOptions, ScriptId};

/// Environment variable holding the default source script code.
pub const SOURCE_ENV: &str = "UGSCRIPT_SOURCE";

/// Environment variable holding the default target script code.
pub const TARGET_ENV: &str = "UGSCRIPT_TARGET";

/// Environment variable turning the apostrophe regime on by default.
pub const APOSTROPHE_ENV: &str = "UGSCRIPT_APOSTROPHE";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "UGSCRIPT_LOG";

const DEFAULT_SOURCE: ScriptId = ScriptId::LatinComputer;
const DEFAULT_TARGET: ScriptId = ScriptId::Arabic;

/// Resolved settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub source: ScriptId,
    pub target: ScriptId,
    pub options: ConversionOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE,
            target: DEFAULT_TARGET,
            options: ConversionOptions::default(),
        }
    }
}

/// Parse conversion flags from command line args.
///
/// Precedence, highest first:
/// 1. `-s/--source`, `-t/--target`, `--apostrophe`
/// 2. `UGSCRIPT_SOURCE`, `UGSCRIPT_TARGET`, `UGSCRIPT_APOSTROPHE`
/// 3. `ULS -> UAS`, apostrophe regime off
///
/// Returns `(config, remaining_args)`.
pub fn parse_config(args: &[String]) -> Result<(CliConfig, Vec<String>), String> {
    parse_config_with_env(args, |key| std::env::var(key).ok())
}

/// `parse_config` with an explicit environment lookup.
pub fn parse_config_with_env(
    args: &[String],
    env: impl Fn(&str) -> Option<String>,
) -> Result<(CliConfig, Vec<String>), String> {
    let mut config = CliConfig::default();

    if let Some(code) = env(SOURCE_ENV) {
        config.source = parse_script(&code, SOURCE_ENV)?;
    }
    if let Some(code) = env(TARGET_ENV) {
        config.target = parse_script(&code, TARGET_ENV)?;
    }
    if let Some(flag) = env(APOSTROPHE_ENV) {
        config.options.apostrophe = is_truthy(&flag);
    }

    let mut remaining = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--source=") {
            config.source = parse_script(val, "--source")?;
        } else if let Some(val) = arg.strip_prefix("--target=") {
            config.target = parse_script(val, "--target")?;
        } else if arg == "--source" || arg == "-s" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            config.source = parse_script(val, arg)?;
        } else if arg == "--target" || arg == "-t" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            config.target = parse_script(val, arg)?;
        } else if arg == "--apostrophe" || arg == "-a" {
            config.options.apostrophe = true;
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((config, remaining))
}

fn parse_script(code: &str, origin: &str) -> Result<ScriptId, String> {
    code.parse().map_err(|e| format!("{origin}: {e}"))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Install a stderr `tracing` subscriber filtered by `UGSCRIPT_LOG`.
///
/// Defaults to `warn` when the variable is unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
