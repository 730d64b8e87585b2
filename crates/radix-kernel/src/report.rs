//! Batch report: every value in a range encoded in every radix in a range.
//!
//! Each row is written as `value,radix,text` with no header. Radices above
//! 36 select the sexagesimal family; the radix column keeps the enumerated
//! number so existing consumers see the same columns.

use crate::adapter::Converter;
use crate::radix::{MAXIMUM_CONSECUTIVE_RADIX, MINIMUM_RADIX, SEXAGESIMAL_RADIX};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Largest radix a report may enumerate.
pub const MAXIMUM_REPORT_RADIX: u32 = SEXAGESIMAL_RADIX + 1;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report config: {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid report config: {0}")]
    Config(String),

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Value and radix ranges for a report. Both ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub min_value: i64,
    pub max_value: i64,
    pub min_radix: u32,
    pub max_radix: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_value: 0,
            max_value: 20_000,
            min_radix: MINIMUM_RADIX,
            max_radix: MAXIMUM_CONSECUTIVE_RADIX + 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportFile {
    #[serde(default)]
    report: ReportConfig,
}

impl ReportConfig {
    /// Parse the `[report]` table of a TOML document. Missing keys take
    /// their defaults.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ReportError> {
        let file: ReportFile = toml::from_str(text).map_err(|source| ReportError::ParseConfig {
            path: origin.to_string(),
            source,
        })?;
        Ok(file.report)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::ReadConfig {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.min_value < 0 {
            return Err(ReportError::Config(format!(
                "min_value must be non-negative, got {}",
                self.min_value
            )));
        }
        if self.min_value > self.max_value {
            return Err(ReportError::Config(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            )));
        }
        if self.min_radix < MINIMUM_RADIX || self.max_radix > MAXIMUM_REPORT_RADIX {
            return Err(ReportError::Config(format!(
                "radix range {}..={} must lie within {MINIMUM_RADIX}..={MAXIMUM_REPORT_RADIX}",
                self.min_radix, self.max_radix
            )));
        }
        if self.min_radix > self.max_radix {
            return Err(ReportError::Config(format!(
                "min_radix {} exceeds max_radix {}",
                self.min_radix, self.max_radix
            )));
        }
        Ok(())
    }

    /// Number of rows the report produces. Assumes a validated config.
    pub fn row_count(&self) -> u64 {
        let values = self.max_value.abs_diff(self.min_value) + 1;
        let radices = u64::from(self.max_radix.abs_diff(self.min_radix)) + 1;
        values.saturating_mul(radices)
    }
}

/// One `value,radix,text` line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub value: i64,
    pub radix: u32,
    pub text: String,
}

impl std::fmt::Display for ReportRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.value, self.radix, self.text)
    }
}

/// The radix actually used to encode a report column.
pub fn effective_radix(radix: u32) -> u32 {
    if radix > MAXIMUM_CONSECUTIVE_RADIX {
        SEXAGESIMAL_RADIX
    } else {
        radix
    }
}

/// Rows in report order: values outer, radices inner.
pub fn report_rows<'a, C: Converter + ?Sized>(
    config: &ReportConfig,
    converter: &'a C,
) -> impl Iterator<Item = ReportRow> + 'a {
    let radices = config.min_radix..=config.max_radix;
    (config.min_value..=config.max_value).flat_map(move |value| {
        radices.clone().map(move |radix| ReportRow {
            value,
            radix,
            text: converter.encode(value, effective_radix(radix)).into_string(),
        })
    })
}

/// Validate `config` and write every row to `sink`, one per line.
///
/// Returns the number of rows written.
pub fn write_report<C, W>(config: &ReportConfig, converter: &C, sink: W) -> Result<u64, ReportError>
where
    C: Converter + ?Sized,
    W: Write,
{
    config.validate()?;
    tracing::info!(
        min_value = config.min_value,
        max_value = config.max_value,
        min_radix = config.min_radix,
        max_radix = config.max_radix,
        "writing radix report"
    );

    let mut out = BufWriter::new(sink);
    let mut rows = 0_u64;
    for row in report_rows(config, converter) {
        writeln!(out, "{row}")?;
        rows += 1;
    }
    out.flush()?;

    tracing::debug!(rows, "radix report complete");
    Ok(rows)
}
