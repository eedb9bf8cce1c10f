//! JSON output format.

use serde::Serialize;
use std::io::Write;
use ventana_types::ReturnRecord;

use crate::{FormatError, Formatter, PriceHistory};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_items<T, I, W>(&self, items: I, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
        W: Write,
    {
        match self.style {
            JsonStyle::Array => {
                let items: Vec<T> = items.into_iter().collect();
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &items)?;
                } else {
                    serde_json::to_writer(&mut writer, &items)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for item in items {
                    serde_json::to_writer(&mut writer, &item)?;
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_returns<W: Write + Send>(
        &self,
        records: &[ReturnRecord],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_items(records, writer)
    }

    fn write_prices<W: Write + Send>(
        &self,
        history: &PriceHistory,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_items(history.rows(), writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
