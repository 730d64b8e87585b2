use crate::support::{print_json_or_exit, warn_if_degraded};
use radix_kernel::{ConversionAdapter, Converter, RadixFamily};
use serde_json::json;

pub fn run(value: i64, radix: u32, json_output: bool) {
    let adapter = ConversionAdapter::default();
    let encoding = adapter.encode(value, radix);

    if json_output {
        print_json_or_exit(
            &json!({
                "value": value,
                "radix": radix,
                "family": RadixFamily::for_radix(radix),
                "encoding": encoding,
            }),
            "encode",
        );
        return;
    }

    warn_if_degraded(&encoding);
    println!("{encoding}");
}
