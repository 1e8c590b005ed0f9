use serde_json::Value;

/// One raw entity returned by the API.
///
/// Records are not validated; every accessor treats missing fields, `null`
/// and non-object records as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Field value, with `null` reported as absent.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Integer field; floats with no fractional part are accepted.
    pub fn i64_field(&self, name: &str) -> Option<i64> {
        let value = self.field(name)?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        })
    }

    /// Nested records under an array field. `None` when the field is missing or not an array.
    pub fn list_field(&self, name: &str) -> Option<Vec<Record>> {
        self.field(name)
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().map(Record::new).collect())
    }

    /// Field rendered as plain text; missing or `null` renders empty.
    pub fn text(&self, name: &str) -> String {
        self.field(name).map(value_text).unwrap_or_default()
    }

    /// Non-empty text of a field, if any.
    pub fn non_empty_text(&self, name: &str) -> Option<String> {
        Some(self.text(name)).filter(|text| !text.is_empty())
    }

    /// The record identifier as text, `unknown` when missing.
    pub fn id_label(&self) -> String {
        self.non_empty_text("id")
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
