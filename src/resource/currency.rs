use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Currency value substituted into a template placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 currency code.
    pub code: String,
    /// Amount already expressed in the unit the API expects (value x 1000).
    pub amount: i64,
    /// Text shown when the client cannot localize the amount.
    pub fallback_value: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, amount: i64, fallback_value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            amount,
            fallback_value: fallback_value.into(),
        }
    }

    /// Wire representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "fallback_value": self.fallback_value,
            "code": self.code,
            "amount_1000": self.amount,
        })
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Currency", 3)?;
        state.serialize_field("fallback_value", &self.fallback_value)?;
        state.serialize_field("code", &self.code)?;
        // Renamed only; the amount is never rescaled here.
        state.serialize_field("amount_1000", &self.amount)?;
        state.end()
    }
}
