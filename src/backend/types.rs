//! Backend request and response shapes
//!
//! The backend owns these formats. Trend payloads are passed through
//! untouched; only the helpers below look inside them, and only to
//! decide how to display them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Email and password as submitted from the login form
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be present before anything is sent
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a login call that got an HTTP response
#[derive(Debug, Clone, Default)]
pub struct LoginResponse {
    /// HTTP status returned by the backend
    pub status: u16,
    /// Raw `Set-Cookie` values to hand back to the browser
    pub set_cookies: Vec<String>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Filter for the trending audio endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrendQuery {
    #[serde(default)]
    pub niche: Option<String>,
}

impl TrendQuery {
    pub fn new(niche: Option<String>) -> Self {
        Self { niche }
    }

    /// The niche to filter on; an empty string counts as no filter
    pub fn niche(&self) -> Option<&str> {
        self.niche.as_deref().filter(|n| !n.is_empty())
    }

    /// Drop a niche that is only whitespace, as submitted by a blank form field
    pub fn without_blank_niche(mut self) -> Self {
        if self.niche.as_deref().is_some_and(|n| n.trim().is_empty()) {
            self.niche = None;
        }
        self
    }
}

/// Keys under which list-shaped payloads commonly nest their items
const ITEM_KEYS: [&str; 4] = ["items", "results", "data", "trends"];

/// Trend data exactly as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TrendPayload(pub Value);

impl TrendPayload {
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// The list of trend entries, if the payload is list-shaped
    pub fn items(&self) -> Option<&Vec<Value>> {
        match &self.0 {
            Value::Array(items) => Some(items),
            Value::Object(map) => ITEM_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array)),
            _ => None,
        }
    }

    /// Tabular view of the entries
    ///
    /// Only produced when every entry is a JSON object. Columns are the
    /// union of keys in first-seen order.
    pub fn table(&self) -> Option<TrendTable> {
        let items = self.items()?;
        let objects: Vec<&Map<String, Value>> =
            items.iter().map(Value::as_object).collect::<Option<_>>()?;

        let mut columns: Vec<String> = Vec::new();
        for object in &objects {
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = objects
            .iter()
            .map(|object| {
                columns
                    .iter()
                    .map(|column| object.get(column).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Some(TrendTable { columns, rows })
    }
}

/// Display text for a single value
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Trend entries flattened for display
#[derive(Debug, Clone, PartialEq)]
pub struct TrendTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
