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

//! Execution metadata persistence
//!
//! Registered algorithms, registered inputs, executions, and stored results
//! live in an id-keyed in-memory store. Entities reference each other by id,
//! and the store validates every reference and uniqueness constraint at the
//! moment an entity enters it.

pub mod entities;
pub mod error;
pub mod metadata;

// Public exports
pub use entities::{
    Algorithm, AlgorithmId, AlgorithmType, Execution, ExecutionId, Input, InputId, InputKind,
    ResultFile, ResultId,
};
pub use error::{StoreError, StoreResult};
pub use metadata::MetadataStore;
