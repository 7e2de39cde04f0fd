// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use thiserror::Error;

/// Errors raised while declaring, binding, or building algorithm configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Requirement identifier must not be empty")]
    EmptyIdentifier,

    #[error("Invalid cardinality: min {min} and max {max} must satisfy 1 <= min <= max")]
    InvalidCardinality { min: usize, max: usize },

    #[error(
        "Wrong number of settings for {identifier}: got {actual}, expected {}",
        expected_settings(.min, .max)
    )]
    WrongNumberOfSettings {
        identifier: String,
        actual: usize,
        min: usize,
        max: usize,
    },

    #[error("Requirement {identifier} has no settings; bind settings before building values")]
    MissingSettings { identifier: String },

    #[error("Duplicate requirement identifier: {identifier}")]
    DuplicateIdentifier { identifier: String },

    #[error("No configuration value for identifier {identifier}")]
    UnknownIdentifier { identifier: String },

    #[error("Configuration value {identifier} holds {actual} values, not {expected} values")]
    WrongValueKind {
        identifier: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid column identifier {0:?}: expected \"table.column\"")]
    InvalidColumnIdentifier(String),
}

/// Result type for configuration operations
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

fn expected_settings(min: &usize, max: &usize) -> String {
    if min == max {
        format!("exactly {}", min)
    } else if *max == usize::MAX {
        format!("at least {}", min)
    } else {
        format!("between {} and {}", min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_number_of_settings_exact() {
        let error = ConfigurationError::WrongNumberOfSettings {
            identifier: "inputs".to_string(),
            actual: 3,
            min: 2,
            max: 2,
        };
        assert_eq!(
            error.to_string(),
            "Wrong number of settings for inputs: got 3, expected exactly 2"
        );
    }

    #[test]
    fn test_wrong_number_of_settings_range() {
        let error = ConfigurationError::WrongNumberOfSettings {
            identifier: "inputs".to_string(),
            actual: 1,
            min: 2,
            max: 4,
        };
        assert_eq!(
            error.to_string(),
            "Wrong number of settings for inputs: got 1, expected between 2 and 4"
        );
    }

    #[test]
    fn test_wrong_number_of_settings_unbounded() {
        let error = ConfigurationError::WrongNumberOfSettings {
            identifier: "inputs".to_string(),
            actual: 0,
            min: 1,
            max: usize::MAX,
        };
        assert_eq!(
            error.to_string(),
            "Wrong number of settings for inputs: got 0, expected at least 1"
        );
    }

    #[test]
    fn test_invalid_cardinality() {
        let error = ConfigurationError::InvalidCardinality { min: 3, max: 2 };
        assert_eq!(
            error.to_string(),
            "Invalid cardinality: min 3 and max 2 must satisfy 1 <= min <= max"
        );
    }

    #[test]
    fn test_missing_settings() {
        let error = ConfigurationError::MissingSettings {
            identifier: "tables".to_string(),
        };
        assert!(error.to_string().contains("tables"));
        assert!(error.to_string().contains("no settings"));
    }

    #[test]
    fn test_invalid_column_identifier() {
        let error = ConfigurationError::InvalidColumnIdentifier("nodots".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid column identifier \"nodots\": expected \"table.column\""
        );
    }

    #[test]
    fn test_error_debug() {
        let error = ConfigurationError::EmptyIdentifier;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("EmptyIdentifier"));
    }

    #[test]
    fn test_configuration_result() {
        let ok: ConfigurationResult<u32> = Ok(7);
        assert!(ok.is_ok());

        let err: ConfigurationResult<u32> = Err(ConfigurationError::EmptyIdentifier);
        assert!(err.is_err());
    }
}
