use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::configuration::error::{ConfigurationError, ConfigurationResult};
use crate::configuration::setting::{
    DatabaseConnectionSetting, FileInputSetting, RelationalInputSetting, TableInputSetting,
};

/// The values bound to one requirement, grouped by setting type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ValuePayload {
    Strings(Vec<String>),
    Integers(Vec<i64>),
    Booleans(Vec<bool>),
    Selections(Vec<String>),
    FileInputs(Vec<FileInputSetting>),
    TableInputs(Vec<TableInputSetting>),
    DatabaseConnections(Vec<DatabaseConnectionSetting>),
    RelationalInputs(Vec<RelationalInputSetting>),
}

impl ValuePayload {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValuePayload::Strings(_) => "string",
            ValuePayload::Integers(_) => "integer",
            ValuePayload::Booleans(_) => "boolean",
            ValuePayload::Selections(_) => "selection",
            ValuePayload::FileInputs(_) => "file input",
            ValuePayload::TableInputs(_) => "table input",
            ValuePayload::DatabaseConnections(_) => "database connection",
            ValuePayload::RelationalInputs(_) => "relational input",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ValuePayload::Strings(values) => values.len(),
            ValuePayload::Integers(values) => values.len(),
            ValuePayload::Booleans(values) => values.len(),
            ValuePayload::Selections(values) => values.len(),
            ValuePayload::FileInputs(values) => values.len(),
            ValuePayload::TableInputs(values) => values.len(),
            ValuePayload::DatabaseConnections(values) => values.len(),
            ValuePayload::RelationalInputs(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A finalized configuration value, ready to be handed to an algorithm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigurationValue {
    identifier: String,
    payload: ValuePayload,
}

impl ConfigurationValue {
    pub fn new(identifier: impl Into<String>, payload: ValuePayload) -> Self {
        Self {
            identifier: identifier.into(),
            payload,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn payload(&self) -> &ValuePayload {
        &self.payload
    }
}

/// All values for one algorithm run, keyed by requirement identifier
///
/// The typed accessors return [`ConfigurationError::UnknownIdentifier`] for
/// identifiers never declared and [`ConfigurationError::WrongValueKind`] when
/// the value exists under a different setting type, so algorithms can rely on
/// the payloads they read matching the requirements they declared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Configuration {
    values: HashMap<String, ConfigurationValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, rejecting identifiers that are already present
    pub fn insert(&mut self, value: ConfigurationValue) -> ConfigurationResult<()> {
        if self.values.contains_key(value.identifier()) {
            return Err(ConfigurationError::DuplicateIdentifier {
                identifier: value.identifier().to_string(),
            });
        }
        self.values.insert(value.identifier().to_string(), value);
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&ConfigurationValue> {
        self.values.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Identifiers of all contained values, sorted for deterministic output
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.values.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }

    pub fn strings(&self, identifier: &str) -> ConfigurationResult<&[String]> {
        match self.require(identifier)?.payload() {
            ValuePayload::Strings(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "string", other)),
        }
    }

    pub fn integers(&self, identifier: &str) -> ConfigurationResult<&[i64]> {
        match self.require(identifier)?.payload() {
            ValuePayload::Integers(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "integer", other)),
        }
    }

    pub fn booleans(&self, identifier: &str) -> ConfigurationResult<&[bool]> {
        match self.require(identifier)?.payload() {
            ValuePayload::Booleans(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "boolean", other)),
        }
    }

    pub fn selections(&self, identifier: &str) -> ConfigurationResult<&[String]> {
        match self.require(identifier)?.payload() {
            ValuePayload::Selections(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "selection", other)),
        }
    }

    pub fn file_inputs(&self, identifier: &str) -> ConfigurationResult<&[FileInputSetting]> {
        match self.require(identifier)?.payload() {
            ValuePayload::FileInputs(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "file input", other)),
        }
    }

    pub fn table_inputs(&self, identifier: &str) -> ConfigurationResult<&[TableInputSetting]> {
        match self.require(identifier)?.payload() {
            ValuePayload::TableInputs(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "table input", other)),
        }
    }

    pub fn database_connections(
        &self,
        identifier: &str,
    ) -> ConfigurationResult<&[DatabaseConnectionSetting]> {
        match self.require(identifier)?.payload() {
            ValuePayload::DatabaseConnections(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "database connection", other)),
        }
    }

    pub fn relational_inputs(
        &self,
        identifier: &str,
    ) -> ConfigurationResult<&[RelationalInputSetting]> {
        match self.require(identifier)?.payload() {
            ValuePayload::RelationalInputs(values) => Ok(values),
            other => Err(self.wrong_kind(identifier, "relational input", other)),
        }
    }

    fn require(&self, identifier: &str) -> ConfigurationResult<&ConfigurationValue> {
        self.values
            .get(identifier)
            .ok_or_else(|| ConfigurationError::UnknownIdentifier {
                identifier: identifier.to_string(),
            })
    }

    fn wrong_kind(
        &self,
        identifier: &str,
        expected: &'static str,
        actual: &ValuePayload,
    ) -> ConfigurationError {
        ConfigurationError::WrongValueKind {
            identifier: identifier.to_string(),
            expected,
            actual: actual.kind_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        let value = ConfigurationValue::new(
            "threshold",
            ValuePayload::Strings(vec!["0.9".to_string()]),
        );
        assert_eq!(value.identifier(), "threshold");
        assert_eq!(value.payload().kind_name(), "string");
        assert_eq!(value.payload().len(), 1);
    }

    #[test]
    fn test_payload_len_and_empty() {
        let empty = ValuePayload::Integers(Vec::new());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());

        let filled = ValuePayload::Booleans(vec![true, false]);
        assert_eq!(filled.len(), 2);
        assert!(!filled.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut configuration = Configuration::new();
        configuration
            .insert(ConfigurationValue::new(
                "max_size",
                ValuePayload::Integers(vec![5]),
            ))
            .unwrap();

        assert_eq!(configuration.len(), 1);
        assert!(configuration.get("max_size").is_some());
        assert!(configuration.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut configuration = Configuration::new();
        configuration
            .insert(ConfigurationValue::new(
                "flag",
                ValuePayload::Booleans(vec![true]),
            ))
            .unwrap();

        let duplicate = configuration.insert(ConfigurationValue::new(
            "flag",
            ValuePayload::Booleans(vec![false]),
        ));
        assert_eq!(
            duplicate.unwrap_err(),
            ConfigurationError::DuplicateIdentifier {
                identifier: "flag".to_string(),
            }
        );
        assert_eq!(configuration.booleans("flag").unwrap(), &[true]);
    }

    #[test]
    fn test_typed_accessor_returns_values() {
        let mut configuration = Configuration::new();
        configuration
            .insert(ConfigurationValue::new(
                "limits",
                ValuePayload::Integers(vec![1, 2, 3]),
            ))
            .unwrap();

        assert_eq!(configuration.integers("limits").unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_unknown_identifier() {
        let configuration = Configuration::new();
        let result = configuration.strings("absent");
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::UnknownIdentifier {
                identifier: "absent".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_value_kind() {
        let mut configuration = Configuration::new();
        configuration
            .insert(ConfigurationValue::new(
                "inputs",
                ValuePayload::FileInputs(vec![FileInputSetting::new("data.csv")]),
            ))
            .unwrap();

        let result = configuration.integers("inputs");
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::WrongValueKind {
                identifier: "inputs".to_string(),
                expected: "integer",
                actual: "file input",
            }
        );
    }

    #[test]
    fn test_identifiers_sorted() {
        let mut configuration = Configuration::new();
        for identifier in ["zeta", "alpha", "midway"] {
            configuration
                .insert(ConfigurationValue::new(
                    identifier,
                    ValuePayload::Strings(vec!["x".to_string()]),
                ))
                .unwrap();
        }
        assert_eq!(configuration.identifiers(), ["alpha", "midway", "zeta"]);
    }

    #[test]
    fn test_configuration_serialization_round_trip() {
        let mut configuration = Configuration::new();
        configuration
            .insert(ConfigurationValue::new(
                "connections",
                ValuePayload::DatabaseConnections(vec![DatabaseConnectionSetting::new(
                    "jdbc:postgresql://localhost/db",
                    "reader",
                    "pw",
                    crate::configuration::setting::DbSystem::PostgreSql,
                )]),
            ))
            .unwrap();

        let json = serde_json::to_string(&configuration).unwrap();
        let parsed: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, configuration);
    }
}
