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

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::configuration::error::ConfigurationError;

/// One column of one table, the atom every profiling result is built from
///
/// The derived ordering compares the table identifier first and the column
/// identifier second, so columns of the same table sort together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnIdentifier {
    table_identifier: String,
    column_identifier: String,
}

impl ColumnIdentifier {
    pub fn new(table_identifier: impl Into<String>, column_identifier: impl Into<String>) -> Self {
        Self {
            table_identifier: table_identifier.into(),
            column_identifier: column_identifier.into(),
        }
    }

    pub fn table_identifier(&self) -> &str {
        &self.table_identifier
    }

    pub fn column_identifier(&self) -> &str {
        &self.column_identifier
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table_identifier, self.column_identifier)
    }
}

impl FromStr for ColumnIdentifier {
    type Err = ConfigurationError;

    /// Parses the `table.column` form produced by [`Display`](fmt::Display).
    ///
    /// The last dot-separated segment becomes the column, everything before it
    /// the table, so `db.orders.id` yields table `db.orders` and column `id`.
    /// Trailing dots do not open new segments. Strings with fewer than two
    /// segments have no table part and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('.').collect();
        while parts.last() == Some(&"") {
            parts.pop();
        }
        if parts.len() < 2 {
            return Err(ConfigurationError::InvalidColumnIdentifier(s.to_string()));
        }
        let column = parts[parts.len() - 1];
        let table = parts[..parts.len() - 1].join(".");
        Ok(Self::new(table, column))
    }
}

/// An unordered, duplicate-free set of columns
///
/// Rendered and iterated in sorted order, so two combinations built from the
/// same columns in any order compare, hash, and print identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnCombination {
    column_identifiers: BTreeSet<ColumnIdentifier>,
}

impl ColumnCombination {
    pub fn new(column_identifiers: impl IntoIterator<Item = ColumnIdentifier>) -> Self {
        Self {
            column_identifiers: column_identifiers.into_iter().collect(),
        }
    }

    pub fn column_identifiers(&self) -> &BTreeSet<ColumnIdentifier> {
        &self.column_identifiers
    }

    pub fn contains(&self, column: &ColumnIdentifier) -> bool {
        self.column_identifiers.contains(column)
    }

    pub fn len(&self) -> usize {
        self.column_identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_identifiers.is_empty()
    }
}

impl FromIterator<ColumnIdentifier> for ColumnCombination {
    fn from_iter<I: IntoIterator<Item = ColumnIdentifier>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for ColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .column_identifiers
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// An ordered list of columns; position matters, duplicates are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnPermutation {
    column_identifiers: Vec<ColumnIdentifier>,
}

impl ColumnPermutation {
    pub fn new(column_identifiers: impl IntoIterator<Item = ColumnIdentifier>) -> Self {
        Self {
            column_identifiers: column_identifiers.into_iter().collect(),
        }
    }

    pub fn column_identifiers(&self) -> &[ColumnIdentifier] {
        &self.column_identifiers
    }

    pub fn len(&self) -> usize {
        self.column_identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_identifiers.is_empty()
    }
}

impl FromIterator<ColumnIdentifier> for ColumnPermutation {
    fn from_iter<I: IntoIterator<Item = ColumnIdentifier>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for ColumnPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .column_identifiers
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}
