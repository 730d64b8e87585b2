use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "radix",
    about = "Radix: convert non-negative integers between radices 2-36 and sexagesimal (60)",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a decimal value in a radix
    Encode {
        /// Decimal value (negative values encode to empty output)
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Target radix: 2-36, or 60 for sexagesimal
        #[arg(long, short)]
        radix: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode text written in a radix to its decimal value
    Decode {
        /// Digits to decode (sexagesimal groups separated by `;`)
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Source radix: 2-36, or 60 for sexagesimal
        #[arg(long, short)]
        radix: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert text from one radix to another through its decimal value
    Convert {
        /// Digits to convert
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Source radix
        #[arg(long)]
        from: u32,

        /// Target radix
        #[arg(long)]
        to: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a `value,radix,text` CSV line for every value and radix in range
    Report {
        /// TOML file with a `[report]` table; flags override its values
        #[arg(long)]
        config: Option<String>,

        /// First value (default 0)
        #[arg(long)]
        min_value: Option<i64>,

        /// Last value, inclusive (default 20000)
        #[arg(long)]
        max_value: Option<i64>,

        /// First radix (default 2)
        #[arg(long)]
        min_radix: Option<u32>,

        /// Last radix, inclusive; radices above 36 select sexagesimal (default 37)
        #[arg(long)]
        max_radix: Option<u32>,

        /// Output path, or `-` for stdout
        #[arg(long, short, default_value = "output.csv")]
        output: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
