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

//! # Metanome
//!
//! A Rust library for data profiling: running metadata discovery algorithms and
//! recording what they found.
//!
//! Metanome separates algorithm configuration, algorithm execution, and result
//! handling. Algorithms declare typed configuration requirements, the framework
//! validates the settings bound to them and builds the configuration a run
//! receives, and every run is recorded as an execution with its results.
//!
//! ## Features
//!
//! - **Typed configuration**: requirements with validated setting counts for
//!   strings, integers, booleans, list boxes, files, tables, and databases
//! - **Profiling results**: unique column combinations, functional, inclusion,
//!   and order dependencies, conditional uniques, and basic statistics
//! - **Execution metadata**: algorithms, inputs, executions, and result files
//!   in an id-keyed store with validated references
//! - **Performance tracking**: built-in phase timing with Chrome tracing export
//!
//! ## Quick Start
//!
//! ### Declaring and Binding Requirements
//!
//! ```rust,no_run
//! use metanome::configuration::{
//!     ConfigurationFactory, ConfigurationRequirement, Requirement, StringSetting,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! // Declare: an algorithm asks for between one and three pattern strings
//! let mut requirement = Requirement::<StringSetting>::with_range("patterns", 1, 3)?;
//!
//! // Bind: a batch whose size is out of range is rejected as a whole
//! requirement.check_and_set_settings(vec![StringSetting::new("[0-9]+")])?;
//!
//! // Build: turn bound requirements into the configuration a run receives
//! let configuration =
//!     ConfigurationFactory::build_all(&[ConfigurationRequirement::String(requirement)])?;
//! assert_eq!(configuration.strings("patterns")?, ["[0-9]+"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running an Algorithm
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use metanome::configuration::{Configuration, ConfigurationRequirement};
//! use metanome::execution::{AlgorithmExecutor, ExecutionResult, ProfilingAlgorithm};
//! use metanome::results::{
//!     ColumnCombination, ColumnIdentifier, ProfilingResult, UniqueColumnCombination,
//! };
//! use metanome::store::{Algorithm, AlgorithmType, MetadataStore};
//!
//! struct KeyFinder;
//!
//! #[async_trait]
//! impl ProfilingAlgorithm for KeyFinder {
//!     fn requirements(&self) -> Vec<ConfigurationRequirement> {
//!         Vec::new()
//!     }
//!
//!     async fn execute(
//!         &self,
//!         _configuration: &Configuration,
//!     ) -> ExecutionResult<Vec<ProfilingResult>> {
//!         let key = "customers.id".parse::<ColumnIdentifier>()?;
//!         Ok(vec![
//!             UniqueColumnCombination::new(ColumnCombination::new(vec![key])).into(),
//!         ])
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let mut store = MetadataStore::new();
//! let algorithm_id = store.register_algorithm(
//!     Algorithm::new("key_finder.jar")
//!         .with_name("Key Finder")
//!         .with_algorithm_type(AlgorithmType::Ucc),
//! )?;
//!
//! let mut executor = AlgorithmExecutor::builder().with_store(store).build();
//! let report = executor
//!     .execute(algorithm_id, &KeyFinder, Vec::new(), Vec::new())
//!     .await?;
//!
//! // Print the execution report
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`configuration`] - Requirement declaration, setting validation, and configuration building
//! - [`execution`] - The algorithm trait and the executor that records runs
//! - [`results`] - Column identifiers and profiling result types
//! - [`store`] - Execution metadata persistence
//! - [`util`] - Utility functions and helpers

pub mod configuration;
pub mod execution;
pub mod results;
pub mod store;
pub mod util;

// Re-export commonly used types
pub use configuration::{Configuration, ConfigurationFactory, ConfigurationRequirement};
pub use execution::{AlgorithmExecutor, ExecutionReport, ProfilingAlgorithm};
pub use results::ProfilingResult;
pub use store::MetadataStore;
