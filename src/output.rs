//! Report serialization
//!
//! Both formats carry the same 20 fields in the same order
//! ([`FIELD_NAMES`]). `Count` is a plain integer; every other field is
//! rendered with exactly two decimals.
//!
//! - JSON: one object on one line, e.g. `{"Sum":55.00,"Count":10,...}`.
//!   Non-finite values are written as `null`.
//! - CSV: a header row of field names followed by one data row.

use crate::error::{Error, Result};
use crate::stats::{Field, Report, FIELD_NAMES};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::io::Write;

/// Serialization format of the report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Write `report` to `out` in the chosen format
pub fn write_report<W: Write>(report: &Report, format: OutputFormat, out: W) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(report, out),
        OutputFormat::Csv => write_csv(report, out),
    }
}

/// Write `report` as a single-line JSON object followed by a newline
pub fn write_json<W: Write>(report: &Report, mut out: W) -> Result<()> {
    serde_json::to_writer(&mut out, &JsonRecord(report))?;
    out.write_all(b"\n").map_err(Error::Write)?;
    out.flush().map_err(Error::Write)
}

/// Write `report` as a CSV header row and one data row
pub fn write_csv<W: Write>(report: &Report, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(FIELD_NAMES)?;
    writer.write_record(report.fields().iter().map(|(_, field)| render(*field)))?;
    writer.flush().map_err(Error::Write)
}

/// Text of one field: an integer count or a two-decimal float
pub fn render(field: Field) -> String {
    match field {
        Field::Count(count) => count.to_string(),
        Field::Value(value) => format!("{:.2}", value),
    }
}

struct JsonRecord<'a>(&'a Report);

impl Serialize for JsonRecord<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = self.0.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, field) in fields {
            match field {
                Field::Count(count) => map.serialize_entry(name, &count)?,
                Field::Value(value) if value.is_finite() => {
                    // Raw so the two decimals survive ("5.50", not 5.5)
                    let raw = RawValue::from_string(render(field)).map_err(S::Error::custom)?;
                    map.serialize_entry(name, &raw)?;
                }
                Field::Value(_) => map.serialize_entry(name, &())?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SortedSample;

    fn one_to_ten() -> Report {
        let sorted = SortedSample::new((1..=10).map(f64::from).collect()).unwrap();
        Report::from_sorted(&sorted)
    }

    fn to_string(report: &Report, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_report(report, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render() {
        assert_eq!(render(Field::Count(10)), "10");
        assert_eq!(render(Field::Value(5.5)), "5.50");
        assert_eq!(render(Field::Value(2.8722813232690143)), "2.87");
        assert_eq!(render(Field::Value(-0.001)), "-0.00");
        assert_eq!(render(Field::Value(f64::INFINITY)), "inf");
    }

    #[test]
    fn test_json() {
        let json = to_string(&one_to_ten(), OutputFormat::Json);
        assert_eq!(
            json,
            "{\"Sum\":55.00,\"Count\":10,\"Mean\":5.50,\"Variance\":8.25,\"StdDev\":2.87,\
             \"Min\":1.00,\"Max\":10.00,\"p25\":3.25,\"p30\":3.70,\"p40\":4.60,\"p50\":5.50,\
             \"p60\":6.40,\"p70\":7.30,\"p75\":7.75,\"p80\":8.20,\"p90\":9.10,\"p95\":9.55,\
             \"p99\":9.91,\"p99.9\":9.99,\"p99.99\":10.00}\n"
        );
    }

    #[test]
    fn test_json_parses_back() {
        let json = to_string(&one_to_ten(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), FIELD_NAMES.len());
        assert_eq!(object["Count"], serde_json::json!(10));
        assert_eq!(object["p50"].as_f64(), Some(5.5));
    }

    #[test]
    fn test_json_non_finite_is_null() {
        let sorted = SortedSample::new(vec![1.0, f64::INFINITY]).unwrap();
        let json = to_string(&Report::from_sorted(&sorted), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["Min"].as_f64(), Some(1.0));
        assert!(value["Max"].is_null());
        assert!(value["Sum"].is_null());
    }

    #[test]
    fn test_csv() {
        let csv = to_string(&one_to_ten(), OutputFormat::Csv);
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some(FIELD_NAMES.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some(
                "55.00,10,5.50,8.25,2.87,1.00,10.00,3.25,3.70,4.60,5.50,6.40,7.30,7.75,\
                 8.20,9.10,9.55,9.91,9.99,10.00"
            )
        );
        assert_eq!(lines.next(), None);
        assert!(csv.ends_with('\n'));
    }

    /// Writer whose reader went away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_broken_pipe_is_write_error() {
        let err = write_json(&one_to_ten(), ClosedPipe).unwrap_err();
        match err {
            Error::Write(source) => assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected a write error, got {:?}", other),
        }
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
