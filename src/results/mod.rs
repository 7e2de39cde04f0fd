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

//! Profiling result types
//!
//! Every result an algorithm can emit is built from column identifiers,
//! grouped either as unordered combinations or as ordered permutations.
//! The concrete result types cover metadata statements about uniqueness,
//! functional and inclusion dependencies, order dependencies, and free-form
//! per-column statistics.

pub mod column;
pub mod result;

// Public exports
pub use column::{ColumnCombination, ColumnIdentifier, ColumnPermutation};
pub use result::{
    BasicStatistic, ColumnCondition, ConditionalUniqueColumnCombination, FunctionalDependency,
    InclusionDependency, OrderDependency, ProfilingResult, ResultType, UniqueColumnCombination,
};
