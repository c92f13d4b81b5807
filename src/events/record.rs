//! Structured records emitted once per processed event

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::catalog::{EventSpec, LegRole, RecordLayout};
use super::decoded::DecodedEvent;
use crate::{NormalizedAmount, TokenAmount, TokenDecimals, TokenType, UsdValue};

/// A leg after metadata resolution and pricing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLeg {
    pub role: LegRole,
    pub token: TokenType,
    pub raw: TokenAmount,
    pub decimals: TokenDecimals,
    pub normalized: NormalizedAmount,
    pub usd: UsdValue,
}

/// One entry of a multi-asset record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub input: String,
    pub input_amount: String,
    pub normalized_input_amount: String,
    pub input_amount_usd: String,
}

impl From<&PricedLeg> for AssetEntry {
    fn from(leg: &PricedLeg) -> Self {
        Self {
            input: leg.token.to_string(),
            input_amount: leg.raw.to_string(),
            normalized_input_amount: leg.normalized.to_string(),
            input_amount_usd: leg.usd.to_string(),
        }
    }
}

/// Value of a record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Assets(Vec<AssetEntry>),
}

/// Named record with ordered fields
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    name: &'static str,
    fields: Vec<(&'static str, FieldValue)>,
}

impl EventRecord {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.fields.push((key, FieldValue::Text(value.into())));
    }

    fn push_assets(&mut self, key: &'static str, assets: Vec<AssetEntry>) {
        self.fields.push((key, FieldValue::Assets(assets)));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Text value of a field
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            FieldValue::Text(text) => Some(text),
            FieldValue::Assets(_) => None,
        }
    }

    /// Asset list of a multi-asset record
    pub fn assets(&self) -> Option<&[AssetEntry]> {
        match self.get("assets")? {
            FieldValue::Assets(assets) => Some(assets),
            FieldValue::Text(_) => None,
        }
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Assemble the record for `event` from its priced legs
    pub(crate) fn build(event: &DecodedEvent, spec: &EventSpec, legs: &[PricedLeg]) -> Self {
        let mut record = Self::new(spec.record);
        let leg = |role: LegRole| legs.iter().find(|leg| leg.role == role);

        for (key, value) in event.payload.leading_attributes() {
            record.push(key, value);
        }

        match spec.layout {
            RecordLayout::Plain | RecordLayout::TypeOnly => {}
            RecordLayout::Single => {
                if let Some(input) = leg(LegRole::Input) {
                    record.push("input", input.token.to_string());
                    record.push("input_amount", input.raw.to_string());
                    record.push("normalized_input_amount", input.normalized.to_string());
                    record.push("input_amount_usd", input.usd.to_string());
                }
                if let Some(label) = event.payload.fee_label() {
                    record.push("event", label);
                }
            }
            RecordLayout::Pair => {
                if let (Some(input), Some(output)) = (leg(LegRole::Input), leg(LegRole::Output)) {
                    record.push("input", input.token.to_string());
                    record.push("output", output.token.to_string());
                    record.push("input_amount", input.raw.to_string());
                    record.push("output_amount", output.raw.to_string());
                    record.push("normalized_input_amount", input.normalized.to_string());
                    record.push("normalized_output_amount", output.normalized.to_string());
                    record.push("input_amount_usd", input.usd.to_string());
                    record.push("output_amount_usd", output.usd.to_string());
                }
            }
            RecordLayout::List => {
                record.push_assets("assets", legs.iter().map(AssetEntry::from).collect());
                record.push("event", event.id.to_string());
            }
            RecordLayout::Resolve => {
                record.push("resolved_on", event.timestamp.to_rfc3339());
                if let Some(fee) = leg(LegRole::Fee) {
                    record.push("fee", fee.raw.to_string());
                    record.push("normalized_fee", fee.normalized.to_string());
                    record.push("fee_usd", fee.usd.to_string());
                }
                if let Some(input) = leg(LegRole::Input) {
                    record.push("input_amount", input.raw.to_string());
                    record.push("normalized_input_amount", input.normalized.to_string());
                    record.push("input_amount_usd", input.usd.to_string());
                }
                if let Some(output) = leg(LegRole::Output) {
                    record.push("output_amount", output.raw.to_string());
                    record.push("normalized_output_amount", output.normalized.to_string());
                    record.push("output_amount_usd", output.usd.to_string());
                }
            }
        }

        record.push("sender", event.sender.clone());
        record
    }
}

impl Serialize for EventRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
