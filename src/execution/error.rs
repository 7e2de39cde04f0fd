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

use crate::configuration::error::ConfigurationError;
use crate::store::error::StoreError;

/// Errors raised while driving an algorithm execution
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Config snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Algorithm failed: {0}")]
    Algorithm(String),
}

/// Result type for execution operations
pub type ExecutionResult<T> = Result<T, ExecutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_conversion() {
        let source = ConfigurationError::EmptyIdentifier;
        let error: ExecutionError = source.into();
        assert_eq!(
            error.to_string(),
            "Configuration error: Requirement identifier must not be empty"
        );
        assert!(matches!(error, ExecutionError::Configuration(_)));
    }

    #[test]
    fn test_store_error_conversion() {
        let source = StoreError::NotFound {
            entity: "algorithm",
            id: 5,
        };
        let error: ExecutionError = source.into();
        assert_eq!(error.to_string(), "Store error: No algorithm with id 5");
    }

    #[test]
    fn test_algorithm_error_display() {
        let error = ExecutionError::Algorithm("out of memory at level 3".to_string());
        assert_eq!(
            error.to_string(),
            "Algorithm failed: out of memory at level 3"
        );
    }

    #[test]
    fn test_snapshot_error_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: ExecutionError = source.into();
        assert!(error.to_string().starts_with("Config snapshot error:"));
    }

    #[test]
    fn test_question_mark_conversion() {
        fn run() -> ExecutionResult<()> {
            Err(StoreError::AlreadyFinished { id: 1 })?;
            Ok(())
        }
        assert!(matches!(run(), Err(ExecutionError::Store(_))));
    }
}
