use radix_kernel::{ConversionError, Decoding, Encoding, ReportConfig};
use serde_json::{Value, json};

pub fn print_json_or_exit(payload: &Value, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

/// Report a conversion failure and exit with status 1.
pub fn exit_conversion_error(err: &ConversionError, json_output: bool) -> ! {
    if json_output {
        print_json_or_exit(
            &json!({
                "error": err.kind(),
                "message": err.to_string(),
            }),
            "error",
        );
    }
    eprintln!("error: {err} [{}]", err.kind());
    std::process::exit(1);
}

/// Degraded and silent-zero results are defined outcomes, not failures.
/// They still print their legacy text, but say why on stderr.
pub fn warn_if_degraded(encoding: &Encoding) {
    if encoding.is_degraded() {
        tracing::warn!(?encoding, "encoding degraded to empty output");
    }
}

pub fn warn_if_silent_zero(decoding: &Decoding) {
    if decoding.is_silent_zero() {
        tracing::warn!(?decoding, "sexagesimal decode fell back to zero");
    }
}

pub fn load_report_config_or_exit(path: Option<&str>) -> ReportConfig {
    let Some(path) = path else {
        return ReportConfig::default();
    };
    ReportConfig::load(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}
