use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod auth;

pub use auth::*;

/// Column order of an entry row in the spreadsheet (columns A..G)
pub const ENTRY_COLUMNS: [&str; 7] = [
    "id",
    "date",
    "category",
    "description",
    "status",
    "type",
    "value",
];

/// A single financial transaction record as stored in the sheet.
///
/// Fields other than `id` hold whatever JSON the client sent, so a text
/// amount or a numeric date reaches the sheet untouched. Use the accessors
/// to read them for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique identifier, assigned once at creation
    pub id: String,
    /// Calendar date of the transaction, kept as entered
    pub date: Option<Value>,
    pub category: Option<Value>,
    pub description: Option<Value>,
    /// e.g. "pending" or "paid" (not validated)
    pub status: Option<Value>,
    /// e.g. "income" or "expense" (not validated)
    #[serde(rename = "type")]
    pub entry_type: Option<Value>,
    /// Monetary amount
    pub value: Option<Value>,
}

/// Body of `POST /api/entries`.
///
/// Every field is optional and untyped: the endpoint does no schema
/// validation and forwards whatever it receives, leaving absent fields empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEntry {
    pub date: Option<Value>,
    pub category: Option<Value>,
    pub description: Option<Value>,
    pub status: Option<Value>,
    #[serde(rename = "type")]
    pub entry_type: Option<Value>,
    pub value: Option<Value>,
}

impl Entry {
    /// Attach an identifier to the fields of a new entry
    pub fn from_new(id: String, new_entry: NewEntry) -> Self {
        Self {
            id,
            date: new_entry.date,
            category: new_entry.category,
            description: new_entry.description,
            status: new_entry.status,
            entry_type: new_entry.entry_type,
            value: new_entry.value,
        }
    }

    /// Render the entry as a sheet row following `ENTRY_COLUMNS`.
    /// Present fields are written as received; absent ones become empty cells.
    pub fn to_row(&self) -> Vec<Value> {
        let cell = |field: &Option<Value>| match field {
            Some(Value::Null) | None => Value::String(String::new()),
            Some(value) => value.clone(),
        };

        vec![
            Value::String(self.id.clone()),
            cell(&self.date),
            cell(&self.category),
            cell(&self.description),
            cell(&self.status),
            cell(&self.entry_type),
            cell(&self.value),
        ]
    }

    /// Interpret a sheet row as an entry.
    ///
    /// Returns `None` for rows without an id. Short rows and blank cells
    /// leave the matching fields empty.
    pub fn from_row(row: &[Value]) -> Option<Self> {
        let id = cell_text(row.first())?;
        let field = |index: usize| row.get(index).filter(|cell| !is_blank(cell)).cloned();

        Some(Self {
            id,
            date: field(1),
            category: field(2),
            description: field(3),
            status: field(4),
            entry_type: field(5),
            value: field(6),
        })
    }

    /// `type` as text, when it is text
    pub fn type_label(&self) -> Option<&str> {
        self.entry_type.as_ref().and_then(Value::as_str)
    }

    /// `value` read as a number; numeric text counts, anything else is `None`
    pub fn amount(&self) -> Option<f64> {
        self.value.as_ref().and_then(cell_number)
    }
}

/// Display form of a cell: strings without quotes, empty for absent cells
pub fn display_cell(cell: &Option<Value>) -> String {
    cell_text(cell.as_ref()).unwrap_or_default()
}

fn is_blank(cell: &Value) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn cell_text(cell: Option<&Value>) -> Option<String> {
    match cell? {
        cell if is_blank(cell) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn cell_number(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Cell range as returned by the spreadsheet service.
///
/// This is passed through to API callers unchanged. `values` is absent when
/// the range holds no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Vec<Value>>>,
}

impl ValueRange {
    /// Raw rows of the range, empty when the range has no values
    pub fn rows(&self) -> &[Vec<Value>] {
        self.values.as_deref().unwrap_or(&[])
    }

    /// Interpret the rows as entries for display, skipping a header row
    /// and any row without an id.
    pub fn entries(&self) -> Vec<Entry> {
        self.rows()
            .iter()
            .filter(|row| !is_header_row(row))
            .filter_map(|row| Entry::from_row(row))
            .collect()
    }
}

fn is_header_row(row: &[Value]) -> bool {
    row.len() == ENTRY_COLUMNS.len()
        && row
            .iter()
            .zip(ENTRY_COLUMNS.iter())
            .all(|(cell, name)| matches!(cell, Value::String(s) if s.trim().eq_ignore_ascii_case(name)))
}

/// Body returned by `POST /api/entries`.
///
/// Success is `{}`; a failure carries `err`, and the HTTP status is 200 in
/// both cases, so clients must look at the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEntryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Error body returned by `GET /api/entries` with status 500
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Log line forwarded by the frontend to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
