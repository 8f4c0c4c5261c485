// ugscript-convert: Convert Uyghur text between scripts.
//
// Converts the TEXT arguments (joined with spaces), or stdin line by line
// when no TEXT is given, and prints the result.
//
// Usage:
//   ugscript-convert [-s SRC] [-t TGT] [--apostrophe] [TEXT...]
//
// Options:
//   -s, --source CODE   Source script (UAS, ULS, UYS, UCS, CTS); default ULS
//   -t, --target CODE   Target script (UAS, ULS, UYS, UCS, CTS, UZBEK); default UAS
//   -a, --apostrophe    Use the apostrophe regime for glottal-stop markers
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use tracing::debug;
use ugscript_engine::Converter;

fn main() {
    ugscript_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if ugscript_cli::wants_help(&args) {
        println!("ugscript-convert: Convert Uyghur text between scripts.");
        println!();
        println!("Usage: ugscript-convert [-s SRC] [-t TGT] [--apostrophe] [TEXT...]");
        println!();
        println!("Converts TEXT, or stdin line by line when no TEXT is given.");
        println!();
        println!("Scripts:");
        println!("  UAS    Arabic script");
        println!("  ULS    Latin computer script");
        println!("  UYS    New Latin script");
        println!("  UCS    Cyrillic script");
        println!("  CTS    Common Turkic script");
        println!("  UZBEK  Uzbek Latin (target only)");
        println!();
        println!("Options:");
        println!("  -s, --source CODE   Source script (default ULS, or $UGSCRIPT_SOURCE)");
        println!("  -t, --target CODE   Target script (default UAS, or $UGSCRIPT_TARGET)");
        println!("  -a, --apostrophe    Apostrophe regime (or $UGSCRIPT_APOSTROPHE=1)");
        println!("  -h, --help          Print this help");
        println!();
        println!("Logging is controlled by $UGSCRIPT_LOG (default: warn).");
        return;
    }

    let (config, text_args) =
        ugscript_cli::parse_config(&args).unwrap_or_else(|e| ugscript_cli::fatal(&e));
    debug!(source = %config.source, target = %config.target, apostrophe = config.options.apostrophe, "resolved config");

    let converter = Converter::new();
    let convert = |text: &str| {
        converter
            .convert(text, config.source, config.target, config.options)
            .unwrap_or_else(|e| ugscript_cli::fatal(&e.to_string()))
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !text_args.is_empty() {
        let _ = writeln!(out, "{}", convert(&text_args.join(" ")));
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let _ = writeln!(out, "{}", convert(&line));
    }
}
