//! CSV and JSON Lines export of corrupted records.
//!
//! CSV output uses the headers `Index, Identifier, Name, Address, Phone`.
//! JSON Lines output writes one object per record with lower-case keys.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::Serialize;
use tracing::info;

use crate::atomic_io::write_atomic;
use crate::error::ExportError;
use crate::record::CorruptedRecord;

/// Supported export encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// One JSON object per line.
    JsonLines,
}

impl ExportFormat {
    /// Returns the canonical name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parses `csv`, `jsonl`, `json` or `ndjson`, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" | "json" | "ndjson" => Ok(Self::JsonLines),
            _ => Err(ExportError::UnsupportedFormat {
                name: value.to_owned(),
            }),
        }
    }
}

/// Header row of CSV exports, in column order.
pub const CSV_HEADERS: [&str; 5] = ["Index", "Identifier", "Name", "Address", "Phone"];

/// One CSV row; field order matches [`CSV_HEADERS`].
#[derive(Serialize)]
struct CsvRow<'a> {
    index: u64,
    identifier: &'a str,
    name: &'a str,
    address: &'a str,
    phone: &'a str,
}

impl<'a> From<&'a CorruptedRecord> for CsvRow<'a> {
    fn from(record: &'a CorruptedRecord) -> Self {
        Self {
            index: record.index,
            identifier: &record.identifier,
            name: &record.fields.name,
            address: &record.fields.address,
            phone: &record.fields.phone,
        }
    }
}

/// Writes `records` as CSV with a header row.
///
/// The header row is written even when `records` is empty.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] when serialisation or the writer fails.
///
/// # Example
///
/// ```
/// use persona_data::{CorruptedRecord, PersonFields, write_csv};
///
/// let record = CorruptedRecord {
///     index: 1,
///     identifier: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
///     fields: PersonFields {
///         name: "Ada Lovelace".to_owned(),
///         address: "12 Marylebone Rd, London".to_owned(),
///         phone: "555-0100".to_owned(),
///     },
/// };
/// let mut out = Vec::new();
/// write_csv(&[record], &mut out).expect("csv export");
///
/// let text = String::from_utf8(out).expect("utf-8");
/// assert!(text.starts_with("Index,Identifier,Name,Address,Phone\n"));
/// assert!(text.contains("\"12 Marylebone Rd, London\""));
/// ```
pub fn write_csv<W: Write>(records: &[CorruptedRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADERS).map_err(|err| csv_error(&err))?;
    for record in records {
        csv_writer
            .serialize(CsvRow::from(record))
            .map_err(|err| csv_error(&err))?;
    }
    csv_writer.flush().map_err(|err| ExportError::Csv {
        message: err.to_string(),
    })
}

/// Writes `records` as JSON Lines.
///
/// # Errors
///
/// Returns [`ExportError::Json`] when serialisation or the writer fails.
pub fn write_json_lines<W: Write>(
    records: &[CorruptedRecord],
    mut writer: W,
) -> Result<(), ExportError> {
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(|err| ExportError::Json {
            message: err.to_string(),
        })?;
        writer.write_all(b"\n").map_err(|err| json_io_error(&err))?;
    }
    writer.flush().map_err(|err| json_io_error(&err))
}

/// Encodes `records` in `format` into memory.
///
/// # Errors
///
/// Returns [`ExportError`] when serialisation fails.
pub fn render(format: ExportFormat, records: &[CorruptedRecord]) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_records(format, records, &mut buffer)?;
    Ok(buffer)
}

/// Writes `records` in `format` to `writer`.
///
/// # Errors
///
/// Returns [`ExportError`] when serialisation or the writer fails.
pub fn write_records<W: Write>(
    format: ExportFormat,
    records: &[CorruptedRecord],
    writer: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(records, writer),
        ExportFormat::JsonLines => write_json_lines(records, writer),
    }
}

/// Exports `records` to the file at `path`, replacing it atomically.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`ExportError::Write`] when the directory cannot be opened or the
/// file cannot be written, and the format's error when encoding fails.
pub fn export_to_file(
    format: ExportFormat,
    records: &[CorruptedRecord],
    path: &Utf8Path,
) -> Result<(), ExportError> {
    let Some(file_name) = path.file_name() else {
        return Err(ExportError::Write {
            path: path.to_path_buf(),
            message: "export path must name a file".to_owned(),
        });
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        ExportError::Write {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    let contents = render(format, records)?;
    write_atomic(&dir, Utf8Path::new(file_name), path, &contents)?;

    info!(%path, %format, records = records.len(), "records exported");
    Ok(())
}

fn csv_error(err: &csv::Error) -> ExportError {
    ExportError::Csv {
        message: err.to_string(),
    }
}

fn json_io_error(err: &std::io::Error) -> ExportError {
    ExportError::Json {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::record::PersonFields;

    #[fixture]
    fn records() -> Vec<CorruptedRecord> {
        vec![
            CorruptedRecord {
                index: 1,
                identifier: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
                fields: PersonFields {
                    name: "Иванов Иван Иванович".to_owned(),
                    address: "101000, г. Москва, ул. Ленина, д. 5, кв. 12".to_owned(),
                    phone: "+7 (912) 345-67-89".to_owned(),
                },
            },
            CorruptedRecord {
                index: 2,
                identifier: "7fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
                fields: PersonFields {
                    name: "Jane \"JJ\" Doe".to_owned(),
                    address: "1 Main St".to_owned(),
                    phone: "555-0100".to_owned(),
                },
            },
        ]
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv)]
    #[case("CSV", ExportFormat::Csv)]
    #[case("jsonl", ExportFormat::JsonLines)]
    #[case(" json ", ExportFormat::JsonLines)]
    #[case("ndjson", ExportFormat::JsonLines)]
    fn parses_format_names(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_format() {
        assert_eq!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat {
                name: "xml".to_owned()
            })
        );
    }

    #[rstest]
    fn csv_quotes_fields_with_separators(records: Vec<CorruptedRecord>) {
        let text = String::from_utf8(render(ExportFormat::Csv, &records).expect("render"))
            .expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first(), Some(&"Index,Identifier,Name,Address,Phone"));
        assert!(text.contains("\"101000, г. Москва, ул. Ленина, д. 5, кв. 12\""));
        assert!(text.contains("\"Jane \"\"JJ\"\" Doe\""));
    }

    #[test]
    fn csv_writes_header_for_empty_export() {
        let text = String::from_utf8(render(ExportFormat::Csv, &[]).expect("render"))
            .expect("utf-8");
        assert_eq!(text, "Index,Identifier,Name,Address,Phone\n");
    }

    #[rstest]
    fn json_lines_round_trip(records: Vec<CorruptedRecord>) {
        let text = String::from_utf8(render(ExportFormat::JsonLines, &records).expect("render"))
            .expect("utf-8");

        let parsed: Vec<CorruptedRecord> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(parsed, records);

        let first: serde_json::Value =
            serde_json::from_str(text.lines().next().expect("line")).expect("json");
        assert_eq!(first["index"], 1);
        assert_eq!(first["phone"], "+7 (912) 345-67-89");
    }

    #[test]
    fn export_fails_for_missing_directory() {
        let path = Utf8Path::new("target/persona-data-tests/missing-dir/records.csv");
        let err = export_to_file(ExportFormat::Csv, &[], path).expect_err("missing dir");
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
