use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value::{FieldValue, Fields};

/// One JSON object as delivered by the storefront API.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Raw JSON value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.0.field(name)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Accepts only JSON objects; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}
