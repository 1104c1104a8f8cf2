//! The tabular projection every report is reduced to.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::format::ReportFormat;

/// A typed report row that can be projected onto string cells.
///
/// `HEADERS` and the vector returned by [`ReportRecord::cells`] must have the
/// same length and order.
pub trait ReportRecord {
    /// Column labels, in display order.
    const HEADERS: &'static [&'static str];

    /// Display values, aligned with `HEADERS`.
    fn cells(&self, format: &ReportFormat) -> Vec<String>;
}

/// One report row: header label to display value, kept in insertion order.
///
/// Serializes as a JSON object whose keys follow the order the values were
/// set in, which for projected rows is the header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow(Vec<(String, String)>);

impl ReportRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value under a header, builder style.
    ///
    /// Setting a header twice replaces the value in place.
    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(header.into(), value.into());
        self
    }

    fn insert(&mut self, header: String, value: String) {
        match self.0.iter_mut().find(|(existing, _)| *existing == header) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((header, value)),
        }
    }

    /// Returns the value under a header, or `""` when absent.
    pub fn get(&self, header: &str) -> &str {
        self.0
            .iter()
            .find(|(existing, _)| existing == header)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Returns true if a value (possibly empty) is present under the header.
    pub fn contains(&self, header: &str) -> bool {
        self.0.iter().any(|(existing, _)| existing == header)
    }

    /// Iterates over `(header, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(header, value)| (header.as_str(), value.as_str()))
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (header, value) in &self.0 {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReportRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = ReportRow;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of header labels to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ReportRow, A::Error> {
                let mut row = ReportRow::new();
                while let Some((header, value)) = access.next_entry::<String, String>()? {
                    row.insert(header, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// A derived, never-persisted report view: title, filename stem, headers and
/// rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProjection {
    /// Human-readable title (also the spreadsheet sheet name).
    pub title: String,
    /// Filename stem, without date suffix or extension.
    pub filename: String,
    /// Column labels in display order.
    pub headers: Vec<String>,
    /// Rows in display order.
    pub rows: Vec<ReportRow>,
}

impl ReportProjection {
    /// Projects typed records onto a complete table.
    pub fn from_records<R: ReportRecord>(
        title: &str,
        filename: &str,
        records: &[R],
        format: &ReportFormat,
    ) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                R::HEADERS
                    .iter()
                    .zip(record.cells(format))
                    .fold(ReportRow::new(), |row, (header, value)| row.with(*header, value))
            })
            .collect();

        Self {
            title: title.to_string(),
            filename: filename.to_string(),
            headers: R::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// Returns true if every row carries a value for every header.
    pub fn is_complete(&self) -> bool {
        self.rows
            .iter()
            .all(|row| self.headers.iter().all(|header| row.contains(header)))
    }

    /// Returns the body as a grid aligned with `headers`; missing values
    /// become empty strings.
    pub fn body(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .map(|header| row.get(header).to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, u32);

    impl ReportRecord for Pair {
        const HEADERS: &'static [&'static str] = &["Name", "Count"];

        fn cells(&self, _format: &ReportFormat) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_from_records_is_complete() {
        let projection = ReportProjection::from_records(
            "Pairs",
            "pairs",
            &[Pair("a", 1), Pair("b", 2)],
            &ReportFormat::default(),
        );

        assert!(projection.is_complete());
        assert_eq!(projection.headers, vec!["Name", "Count"]);
        assert_eq!(projection.rows[1].get("Count"), "2");
    }

    #[test]
    fn test_body_fills_missing_values_with_empty_strings() {
        let projection = ReportProjection {
            title: "T".to_string(),
            filename: "t".to_string(),
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![ReportRow::new().with("B", "x")],
        };

        assert!(!projection.is_complete());
        assert_eq!(projection.body(), vec![vec!["".to_string(), "x".to_string()]]);
    }

    #[test]
    fn test_row_serializes_as_object() {
        let row = ReportRow::new().with("Department", "Engineering");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Department"], "Engineering");
    }

    #[test]
    fn test_row_keys_serialize_in_header_order() {
        let headers = ["Zeta", "Alpha", "Mid", "Beta", "Omega", "Gamma", "Delta", "Kappa"];
        let row = headers
            .iter()
            .enumerate()
            .fold(ReportRow::new(), |row, (i, h)| row.with(*h, i.to_string()));

        let json = serde_json::to_string(&row).unwrap();
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| json.find(&format!("\"{h}\"")).unwrap())
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{json}");
    }

    #[test]
    fn test_row_round_trips_through_json_keeping_order() {
        let row = ReportRow::new().with("B", "1").with("A", "2");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"B":"1","A":"2"}"#);

        let back: ReportRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.iter().collect::<Vec<_>>(), vec![("B", "1"), ("A", "2")]);
    }

    #[test]
    fn test_with_replaces_existing_value_in_place() {
        let row = ReportRow::new().with("A", "1").with("B", "2").with("A", "3");
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![("A", "3"), ("B", "2")]);
    }
}
