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

//! Running profiling algorithms and recording their runs
//!
//! The `ProfilingAlgorithm` trait is the seam between the framework and
//! concrete algorithm implementations. The `AlgorithmExecutor` drives one run
//! end to end: it creates the execution entity, builds the configuration from
//! bound requirements, runs the algorithm, stores the grouped results, and
//! closes the execution. Each phase is timed and the timings come back in the
//! `ExecutionReport`.

pub mod algorithm;
pub mod error;
pub mod executor;
pub mod report;

// Public exports
pub use algorithm::ProfilingAlgorithm;
pub use error::{ExecutionError, ExecutionResult};
pub use executor::{AlgorithmExecutor, ExecutorBuilder};
pub use report::{ExecutionReport, PhaseMetrics};
