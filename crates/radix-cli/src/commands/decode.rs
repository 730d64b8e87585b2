use crate::support::{exit_conversion_error, print_json_or_exit, warn_if_silent_zero};
use radix_kernel::{ConversionAdapter, Converter, RadixFamily};
use serde_json::json;

pub fn run(text: String, radix: u32, json_output: bool) {
    let adapter = ConversionAdapter::default();
    let decoding = adapter
        .decode(&text, radix)
        .unwrap_or_else(|err| exit_conversion_error(&err, json_output));

    if json_output {
        print_json_or_exit(
            &json!({
                "text": text,
                "radix": radix,
                "family": RadixFamily::for_radix(radix),
                "decoding": decoding,
            }),
            "decode",
        );
        return;
    }

    warn_if_silent_zero(&decoding);
    println!("{}", decoding.value());
}
