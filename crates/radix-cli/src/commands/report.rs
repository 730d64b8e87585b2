use crate::support::{load_report_config_or_exit, print_json_or_exit};
use radix_kernel::{ConversionAdapter, ReportConfig, write_report};
use serde_json::json;
use std::fs::File;
use std::io;

pub struct Args {
    pub config: Option<String>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub min_radix: Option<u32>,
    pub max_radix: Option<u32>,
    pub output: String,
    pub json: bool,
}

const STDOUT_MARKER: &str = "-";

pub fn run(args: Args) {
    let config = resolve_config(&args);
    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    let adapter = ConversionAdapter::default();

    let result = if args.output == STDOUT_MARKER {
        write_report(&config, &adapter, io::stdout().lock())
    } else {
        File::create(&args.output)
            .map_err(Into::into)
            .and_then(|file| write_report(&config, &adapter, file))
    };
    let rows = result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    // Report lines own stdout when writing there.
    if args.output == STDOUT_MARKER {
        tracing::info!(rows, "report written to stdout");
        return;
    }

    if args.json {
        print_json_or_exit(
            &json!({
                "output": args.output,
                "rows": rows,
                "config": config,
            }),
            "report",
        );
    } else {
        println!("radix report");
        println!("  Output: {}", args.output);
        println!("  Values: {}..={}", config.min_value, config.max_value);
        println!("  Radices: {}..={}", config.min_radix, config.max_radix);
        println!("  Rows: {rows}");
    }
}

fn resolve_config(args: &Args) -> ReportConfig {
    let mut config = load_report_config_or_exit(args.config.as_deref());
    if let Some(min_value) = args.min_value {
        config.min_value = min_value;
    }
    if let Some(max_value) = args.max_value {
        config.max_value = max_value;
    }
    if let Some(min_radix) = args.min_radix {
        config.min_radix = min_radix;
    }
    if let Some(max_radix) = args.max_radix {
        config.max_radix = max_radix;
    }
    config
}
