//! Decoded form submissions.

use serde_json::{Map, Value};

/// Submitted form fields.
///
/// A field sent once holds its value directly; a field sent several times
/// holds an array of its values in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSubmission {
    fields: Map<String, Value>,
}

impl FormSubmission {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut fields = Map::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            let value = Value::String(value.into_owned());
            match fields.get_mut(key.as_ref()) {
                None => {
                    fields.insert(key.into_owned(), value);
                }
                Some(Value::Array(values)) => values.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            }
        }
        Self { fields }
    }

    /// Decode a JSON object body. Anything but an object is an error.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The value of `field` when it was sent exactly once, as a string.
    pub fn single_string(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}
