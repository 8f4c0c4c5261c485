// ugscript-routes: List the supported conversions.
//
// Prints every supported (source, target) pair and the stages its
// conversion runs through.
//
// Usage:
//   ugscript-routes [OPTIONS]
//
// Options:
//   -s, --source CODE   Only list pairs with this source script
//   -h, --help          Print help

use std::io::{self, Write};

use ugscript_core::ScriptId;
use ugscript_engine::ConversionPath;

fn main() {
    ugscript_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if ugscript_cli::wants_help(&args) {
        println!("ugscript-routes: List the supported conversions.");
        println!();
        println!("Usage: ugscript-routes [OPTIONS]");
        println!();
        println!("Prints one line per supported pair:");
        println!("  SRC -> TGT    stage, stage");
        println!();
        println!("Options:");
        println!("  -s, --source CODE   Only list pairs with this source script");
        println!("  -h, --help          Print this help");
        return;
    }

    let source_filter = source_filter(&args).unwrap_or_else(|e| ugscript_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (source, target) in ConversionPath::supported_pairs() {
        if source_filter.is_some_and(|s| s != source) {
            continue;
        }
        let path = ConversionPath::resolve(source, target)
            .unwrap_or_else(|e| ugscript_cli::fatal(&e.to_string()));
        let pair = format!("{source} -> {target}");
        let _ = writeln!(out, "{pair:14} {path}");
    }
}

fn source_filter(args: &[String]) -> Result<Option<ScriptId>, String> {
    let value = match args {
        [] => return Ok(None),
        [flag, value] if flag == "--source" || flag == "-s" => value.as_str(),
        [flag] if flag.starts_with("--source=") => &flag["--source=".len()..],
        [flag] if flag == "--source" || flag == "-s" => {
            return Err(format!("{flag} requires a value"));
        }
        _ => return Err(format!("unexpected arguments: {}", args.join(" "))),
    };
    value.parse().map(Some).map_err(|e| format!("--source: {e}"))
}
