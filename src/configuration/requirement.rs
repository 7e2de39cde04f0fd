// Copyright 2022 Adobe. All rights reserved.
// This file is licensed to you under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License. You may obtain a copy
// of the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under
// the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR REPRESENTATIONS
// OF ANY KIND, either express or implied. See the License for the specific language
// governing permissions and limitations under the License.

use serde::{Deserialize, Serialize};

use crate::configuration::error::{ConfigurationError, ConfigurationResult};
use crate::configuration::setting::{
    BooleanSetting, DatabaseConnectionSetting, DbSystem, FileInputSetting, IntegerSetting,
    ListBoxSetting, RelationalInputSetting, StringSetting, TableInputSetting,
};

/// A declared algorithm parameter that accepts between `min_number_of_settings`
/// and `max_number_of_settings` values of one setting type
///
/// A requirement starts with no settings bound. [`check_and_set_settings`] is the
/// only way to bind values, and it rejects the whole batch when the count falls
/// outside the declared range, so a requirement with settings always holds an
/// admissible number of them.
///
/// [`check_and_set_settings`]: Requirement::check_and_set_settings
///
/// # Examples
///
/// ```
/// use metanome::configuration::{Requirement, StringSetting};
///
/// let mut requirement = Requirement::with_range("tables", 1, 3)?;
/// assert!(requirement.settings().is_none());
///
/// requirement.check_and_set_settings(vec![
///     StringSetting::new("customers"),
///     StringSetting::new("orders"),
/// ])?;
/// assert_eq!(requirement.settings().map(<[_]>::len), Some(2));
/// # Ok::<(), metanome::configuration::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement<S> {
    identifier: String,
    min_number_of_settings: usize,
    max_number_of_settings: usize,
    settings: Option<Vec<S>>,
}

impl<S> Requirement<S> {
    /// Creates a requirement that accepts exactly one setting
    pub fn new(identifier: impl Into<String>) -> ConfigurationResult<Self> {
        Self::with_range(identifier, 1, 1)
    }

    /// Creates a requirement that accepts exactly `count` settings
    pub fn with_count(identifier: impl Into<String>, count: usize) -> ConfigurationResult<Self> {
        Self::with_range(identifier, count, count)
    }

    /// Creates a requirement that accepts any count in `min..=max`
    pub fn with_range(
        identifier: impl Into<String>,
        min: usize,
        max: usize,
    ) -> ConfigurationResult<Self> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(ConfigurationError::EmptyIdentifier);
        }
        if min < 1 || max < min {
            return Err(ConfigurationError::InvalidCardinality { min, max });
        }
        Ok(Self {
            identifier,
            min_number_of_settings: min,
            max_number_of_settings: max,
            settings: None,
        })
    }

    /// Creates a requirement with no upper bound on the setting count
    pub fn at_least(identifier: impl Into<String>, min: usize) -> ConfigurationResult<Self> {
        Self::with_range(identifier, min, usize::MAX)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn min_number_of_settings(&self) -> usize {
        self.min_number_of_settings
    }

    pub fn max_number_of_settings(&self) -> usize {
        self.max_number_of_settings
    }

    /// True when the requirement accepts only one exact setting count
    pub fn is_fixed_number_of_settings(&self) -> bool {
        self.min_number_of_settings == self.max_number_of_settings
    }

    /// Binds `settings` after validating the count against the declared range.
    /// On rejection the previously bound settings are left untouched.
    /// Re-binding an admissible batch replaces the previous one wholesale.
    pub fn check_and_set_settings(&mut self, settings: Vec<S>) -> ConfigurationResult<()> {
        let actual = settings.len();
        if actual < self.min_number_of_settings || actual > self.max_number_of_settings {
            return Err(ConfigurationError::WrongNumberOfSettings {
                identifier: self.identifier.clone(),
                actual,
                min: self.min_number_of_settings,
                max: self.max_number_of_settings,
            });
        }
        self.settings = Some(settings);
        Ok(())
    }

    /// Returns the bound settings, or `None` when nothing has been bound yet
    pub fn settings(&self) -> Option<&[S]> {
        self.settings.as_deref()
    }
}

/// One algorithm parameter declaration of any supported setting type
///
/// Algorithms hand a list of these to the frontend, which binds user input to
/// each variant's inner [`Requirement`] and passes the list on to the
/// configuration factory. Matching on the variant is the only dispatch point,
/// so adding a setting type extends this enum and every match over it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ConfigurationRequirement {
    String(Requirement<StringSetting>),
    Boolean(Requirement<BooleanSetting>),
    Integer(Requirement<IntegerSetting>),
    ListBox {
        requirement: Requirement<ListBoxSetting>,
        /// Choices the frontend offers; selections must come from this list
        values: Vec<String>,
    },
    FileInput(Requirement<FileInputSetting>),
    TableInput(Requirement<TableInputSetting>),
    DatabaseConnection {
        requirement: Requirement<DatabaseConnectionSetting>,
        /// Database systems the algorithm can work with
        accepted_systems: Vec<DbSystem>,
    },
    RelationalInput(Requirement<RelationalInputSetting>),
}

impl ConfigurationRequirement {
    pub fn list_box(requirement: Requirement<ListBoxSetting>, values: Vec<String>) -> Self {
        ConfigurationRequirement::ListBox {
            requirement,
            values,
        }
    }

    pub fn database_connection(
        requirement: Requirement<DatabaseConnectionSetting>,
        accepted_systems: Vec<DbSystem>,
    ) -> Self {
        ConfigurationRequirement::DatabaseConnection {
            requirement,
            accepted_systems,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            ConfigurationRequirement::String(requirement) => requirement.identifier(),
            ConfigurationRequirement::Boolean(requirement) => requirement.identifier(),
            ConfigurationRequirement::Integer(requirement) => requirement.identifier(),
            ConfigurationRequirement::ListBox { requirement, .. } => requirement.identifier(),
            ConfigurationRequirement::FileInput(requirement) => requirement.identifier(),
            ConfigurationRequirement::TableInput(requirement) => requirement.identifier(),
            ConfigurationRequirement::DatabaseConnection { requirement, .. } => {
                requirement.identifier()
            }
            ConfigurationRequirement::RelationalInput(requirement) => requirement.identifier(),
        }
    }

    pub fn min_number_of_settings(&self) -> usize {
        match self {
            ConfigurationRequirement::String(requirement) => requirement.min_number_of_settings(),
            ConfigurationRequirement::Boolean(requirement) => requirement.min_number_of_settings(),
            ConfigurationRequirement::Integer(requirement) => requirement.min_number_of_settings(),
            ConfigurationRequirement::ListBox { requirement, .. } => {
                requirement.min_number_of_settings()
            }
            ConfigurationRequirement::FileInput(requirement) => {
                requirement.min_number_of_settings()
            }
            ConfigurationRequirement::TableInput(requirement) => {
                requirement.min_number_of_settings()
            }
            ConfigurationRequirement::DatabaseConnection { requirement, .. } => {
                requirement.min_number_of_settings()
            }
            ConfigurationRequirement::RelationalInput(requirement) => {
                requirement.min_number_of_settings()
            }
        }
    }

    pub fn max_number_of_settings(&self) -> usize {
        match self {
            ConfigurationRequirement::String(requirement) => requirement.max_number_of_settings(),
            ConfigurationRequirement::Boolean(requirement) => requirement.max_number_of_settings(),
            ConfigurationRequirement::Integer(requirement) => requirement.max_number_of_settings(),
            ConfigurationRequirement::ListBox { requirement, .. } => {
                requirement.max_number_of_settings()
            }
            ConfigurationRequirement::FileInput(requirement) => {
                requirement.max_number_of_settings()
            }
            ConfigurationRequirement::TableInput(requirement) => {
                requirement.max_number_of_settings()
            }
            ConfigurationRequirement::DatabaseConnection { requirement, .. } => {
                requirement.max_number_of_settings()
            }
            ConfigurationRequirement::RelationalInput(requirement) => {
                requirement.max_number_of_settings()
            }
        }
    }

    /// True once an admissible batch of settings has been bound
    pub fn has_settings(&self) -> bool {
        match self {
            ConfigurationRequirement::String(requirement) => requirement.settings().is_some(),
            ConfigurationRequirement::Boolean(requirement) => requirement.settings().is_some(),
            ConfigurationRequirement::Integer(requirement) => requirement.settings().is_some(),
            ConfigurationRequirement::ListBox { requirement, .. } => {
                requirement.settings().is_some()
            }
            ConfigurationRequirement::FileInput(requirement) => requirement.settings().is_some(),
            ConfigurationRequirement::TableInput(requirement) => requirement.settings().is_some(),
            ConfigurationRequirement::DatabaseConnection { requirement, .. } => {
                requirement.settings().is_some()
            }
            ConfigurationRequirement::RelationalInput(requirement) => {
                requirement.settings().is_some()
            }
        }
    }
}

impl From<Requirement<StringSetting>> for ConfigurationRequirement {
    fn from(requirement: Requirement<StringSetting>) -> Self {
        ConfigurationRequirement::String(requirement)
    }
}

impl From<Requirement<BooleanSetting>> for ConfigurationRequirement {
    fn from(requirement: Requirement<BooleanSetting>) -> Self {
        ConfigurationRequirement::Boolean(requirement)
    }
}

impl From<Requirement<IntegerSetting>> for ConfigurationRequirement {
    fn from(requirement: Requirement<IntegerSetting>) -> Self {
        ConfigurationRequirement::Integer(requirement)
    }
}

impl From<Requirement<FileInputSetting>> for ConfigurationRequirement {
    fn from(requirement: Requirement<FileInputSetting>) -> Self {
        ConfigurationRequirement::FileInput(requirement)
    }
}

impl From<Requirement<TableInputSetting>> for ConfigurationRequirement {
    fn from(requirement: Requirement<TableInputSetting>) -> Self {
        ConfigurationRequirement::TableInput(requirement)
    }
}

impl From<Requirement<RelationalInputSetting>> for ConfigurationRequirement {
    fn from(requirement: Requirement<RelationalInputSetting>) -> Self {
        ConfigurationRequirement::RelationalInput(requirement)
    }
}
