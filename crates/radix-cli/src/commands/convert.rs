use crate::support::{exit_conversion_error, print_json_or_exit, warn_if_degraded};
use radix_kernel::{ConversionAdapter, Converter, RadixFamily};
use serde_json::json;

pub fn run(text: String, from: u32, to: u32, json_output: bool) {
    let adapter = ConversionAdapter::default();
    let encoding = adapter
        .convert(&text, from, to)
        .unwrap_or_else(|err| exit_conversion_error(&err, json_output));

    if json_output {
        print_json_or_exit(
            &json!({
                "text": text,
                "source": { "radix": from, "family": RadixFamily::for_radix(from) },
                "target": { "radix": to, "family": RadixFamily::for_radix(to) },
                "encoding": encoding,
            }),
            "convert",
        );
        return;
    }

    warn_if_degraded(&encoding);
    println!("{encoding}");
}
