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

/// Errors raised by the execution metadata store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unique constraint violated on {constraint}: {value}")]
    UniqueViolation {
        constraint: &'static str,
        value: String,
    },

    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: u64 },

    #[error("Input {id} is not a {expected}")]
    InvalidReference { id: u64, expected: &'static str },

    #[error("Execution {id} already has an end time")]
    AlreadyFinished { id: u64 },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_display() {
        let error = StoreError::UniqueViolation {
            constraint: "algorithm file name",
            value: "profiler.jar".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unique constraint violated on algorithm file name: profiler.jar"
        );
    }

    #[test]
    fn test_not_found_display() {
        let error = StoreError::NotFound {
            entity: "execution",
            id: 17,
        };
        assert_eq!(error.to_string(), "No execution with id 17");
    }

    #[test]
    fn test_invalid_reference_display() {
        let error = StoreError::InvalidReference {
            id: 3,
            expected: "database connection",
        };
        assert_eq!(error.to_string(), "Input 3 is not a database connection");
    }

    #[test]
    fn test_already_finished_display() {
        let error = StoreError::AlreadyFinished { id: 9 };
        assert_eq!(error.to_string(), "Execution 9 already has an end time");
    }

    #[test]
    fn test_store_result() {
        let ok: StoreResult<()> = Ok(());
        assert!(ok.is_ok());

        let err: StoreResult<()> = Err(StoreError::AlreadyFinished { id: 1 });
        assert!(err.is_err());
    }
}
