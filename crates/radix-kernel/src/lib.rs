//! # Radix Kernel
//!
//! Conversions between non-negative integers and their positional
//! representations in two numbering families:
//!
//! - **consecutive** radices 2 through 36, one glyph per digit (`0-9A-Z`);
//! - **sexagesimal** radix 60, decimal groups separated by `;`.
//!
//! Both families meet in one contract, [`Converter`], and the
//! [`ConversionAdapter`] dispatches on the radix, bridging the families
//! through the decimal value.
//!
//! ## Architecture
//!
//! ```text
//! glyph / positional     ← digit ↔ glyph, digits ↔ value
//!     │
//! ConsecutiveRadix       ← radices 2..=36
//! SexagesimalConverter   ← radix 60
//!     │
//! ConversionAdapter      ← Converter over both, selected by RadixFamily
//!     │
//! report                 ← value × radix enumeration as CSV lines
//! ```
//!
//! ## Failure policies
//!
//! | operation            | bad input yields                  |
//! |----------------------|-----------------------------------|
//! | any encode           | [`Encoding::Empty`] (text `""`)   |
//! | consecutive decode   | `Err(`[`ConversionError`]`)`      |
//! | sexagesimal decode   | [`Decoding::SilentZero`] (`0`)    |

pub mod adapter;
pub mod consecutive;
pub mod error;
pub mod glyph;
pub mod outcome;
pub mod positional;
pub mod radix;
pub mod report;
pub mod sexagesimal;

pub use adapter::{ConversionAdapter, Converter};
pub use consecutive::ConsecutiveRadix;
pub use error::{ConversionError, ErrorKind};
pub use outcome::{Decoding, EmptyReason, Encoding, SilentZeroReason};
pub use radix::{
    MAXIMUM_CONSECUTIVE_RADIX, MINIMUM_RADIX, RadixFamily, SEXAGESIMAL_DELIMITER,
    SEXAGESIMAL_RADIX,
};
pub use report::{ReportConfig, ReportError, ReportRow, report_rows, write_report};
pub use sexagesimal::SexagesimalConverter;
