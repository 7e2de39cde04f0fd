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
use std::fmt;

/// A single string value bound to a requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringSetting {
    pub value: String,
}

impl StringSetting {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A single integer value bound to a requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegerSetting {
    pub value: i64,
}

impl IntegerSetting {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

/// A single boolean value bound to a requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BooleanSetting {
    pub value: bool,
}

impl BooleanSetting {
    pub fn new(value: bool) -> Self {
        Self { value }
    }
}

/// One choice picked from the fixed value list of a list box requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListBoxSetting {
    pub selected_value: String,
}

impl ListBoxSetting {
    pub fn new(selected_value: impl Into<String>) -> Self {
        Self {
            selected_value: selected_value.into(),
        }
    }
}

/// Database systems a connection setting can point at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DbSystem {
    Db2,
    MySql,
    Oracle,
    PostgreSql,
    Hana,
}

impl fmt::Display for DbSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DbSystem::Db2 => "DB2",
            DbSystem::MySql => "MySQL",
            DbSystem::Oracle => "Oracle",
            DbSystem::PostgreSql => "PostgreSQL",
            DbSystem::Hana => "HANA",
        };
        write!(f, "{}", name)
    }
}

/// Credentials and endpoint of one relational database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseConnectionSetting {
    pub url: String,
    pub username: String,
    pub password: String,
    pub system: DbSystem,
}

impl DatabaseConnectionSetting {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        system: DbSystem,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            system,
        }
    }

    /// Stable identifier for display and deduplication, never includes the password
    pub fn identifier(&self) -> String {
        format!("{}; {}; {}", self.url, self.username, self.system)
    }
}

/// One delimited file together with its parsing dialect
///
/// # Examples
///
/// ```
/// use metanome::configuration::FileInputSetting;
///
/// let setting = FileInputSetting::new("orders.csv")
///     .with_separator_char(';')
///     .with_header(false)
///     .with_skip_lines(2);
///
/// assert_eq!(setting.file_name, "orders.csv");
/// assert_eq!(setting.separator_char, ';');
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInputSetting {
    pub file_name: String,
    pub separator_char: char,
    pub quote_char: char,
    pub escape_char: char,
    pub skip_lines: usize,
    pub strict_quotes: bool,
    pub ignore_leading_white_space: bool,
    pub header: bool,
    pub skip_differing_lines: bool,
    pub null_value: String,
}

impl FileInputSetting {
    /// Creates a setting for `file_name` with the default dialect:
    /// comma separated, double quoted, backslash escaped, header row present
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            separator_char: ',',
            quote_char: '"',
            escape_char: '\\',
            skip_lines: 0,
            strict_quotes: false,
            ignore_leading_white_space: true,
            header: true,
            skip_differing_lines: false,
            null_value: String::new(),
        }
    }

    pub fn with_separator_char(mut self, separator_char: char) -> Self {
        self.separator_char = separator_char;
        self
    }

    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }

    pub fn with_escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = escape_char;
        self
    }

    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    pub fn with_strict_quotes(mut self, strict_quotes: bool) -> Self {
        self.strict_quotes = strict_quotes;
        self
    }

    pub fn with_ignore_leading_white_space(mut self, ignore: bool) -> Self {
        self.ignore_leading_white_space = ignore;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_skip_differing_lines(mut self, skip: bool) -> Self {
        self.skip_differing_lines = skip;
        self
    }

    pub fn with_null_value(mut self, null_value: impl Into<String>) -> Self {
        self.null_value = null_value.into();
        self
    }
}

/// One database table reached through a connection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableInputSetting {
    pub table: String,
    pub database_connection: DatabaseConnectionSetting,
}

impl TableInputSetting {
    pub fn new(table: impl Into<String>, database_connection: DatabaseConnectionSetting) -> Self {
        Self {
            table: table.into(),
            database_connection,
        }
    }

    pub fn identifier(&self) -> String {
        format!("{}; {}", self.table, self.database_connection.identifier())
    }
}

/// A row-oriented input source, either a delimited file or a database table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RelationalInputSetting {
    File(FileInputSetting),
    Table(TableInputSetting),
}

impl RelationalInputSetting {
    pub fn identifier(&self) -> String {
        match self {
            RelationalInputSetting::File(file) => file.file_name.clone(),
            RelationalInputSetting::Table(table) => table.identifier(),
        }
    }
}
