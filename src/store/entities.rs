// Copyright 2022 Adobe. All rights reserved.
// This file is licensed to you under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License. You may obtain a copy
// of the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under
// the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR REPRESENTATIONS
// OF ANY KIND, either express or implied. See the License for the specific language
// governing permissions and limitations under the License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::configuration::setting::{DatabaseConnectionSetting, FileInputSetting};
use crate::results::result::{ProfilingResult, ResultType};

/// Surrogate key of a registered algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlgorithmId(pub(crate) u64);

/// Surrogate key of a registered input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InputId(pub(crate) u64);

/// Surrogate key of an execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExecutionId(pub(crate) u64);

/// Surrogate key of a stored result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResultId(pub(crate) u64);

impl AlgorithmId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl InputId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl ExecutionId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl ResultId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interfaces an algorithm can implement, as advertised at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmType {
    Fd,
    Ind,
    Ucc,
    Cucc,
    Od,
    BasicStat,
    TempFile,
    ProgressEstimating,
    RelationalInput,
    FileInput,
    TableInput,
    DatabaseConnection,
}

impl AlgorithmType {
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmType::Fd => "Functional Dependency Algorithm",
            AlgorithmType::Ind => "Inclusion Dependency Algorithm",
            AlgorithmType::Ucc => "Unique Column Combination Algorithm",
            AlgorithmType::Cucc => "Conditional Unique Column Combination Algorithm",
            AlgorithmType::Od => "Order Dependency Algorithm",
            AlgorithmType::BasicStat => "Basic Statistic Algorithm",
            AlgorithmType::TempFile => "Temporary File Algorithm",
            AlgorithmType::ProgressEstimating => "Progress Estimating Algorithm",
            AlgorithmType::RelationalInput => "Relational Input Algorithm",
            AlgorithmType::FileInput => "File Input Algorithm",
            AlgorithmType::TableInput => "Table Input Algorithm",
            AlgorithmType::DatabaseConnection => "Database Connection Algorithm",
        }
    }

    /// The result type runs of such an algorithm contribute, if any.
    /// Input and capability interfaces produce no results of their own.
    pub fn result_type(&self) -> Option<ResultType> {
        match self {
            AlgorithmType::Fd => Some(ResultType::Fd),
            AlgorithmType::Ind => Some(ResultType::Ind),
            AlgorithmType::Ucc => Some(ResultType::Ucc),
            AlgorithmType::Cucc => Some(ResultType::Cucc),
            AlgorithmType::Od => Some(ResultType::Od),
            AlgorithmType::BasicStat => Some(ResultType::Stat),
            AlgorithmType::TempFile
            | AlgorithmType::ProgressEstimating
            | AlgorithmType::RelationalInput
            | AlgorithmType::FileInput
            | AlgorithmType::TableInput
            | AlgorithmType::DatabaseConnection => None,
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A registered algorithm, identified by its unique file name
///
/// # Examples
///
/// ```
/// use metanome::store::{Algorithm, AlgorithmType};
///
/// let algorithm = Algorithm::new("normi.jar")
///     .with_name("Normi")
///     .with_author("HPI")
///     .with_algorithm_type(AlgorithmType::Fd);
///
/// assert_eq!(algorithm.file_name(), "normi.jar");
/// assert!(algorithm.algorithm_types().contains(&AlgorithmType::Fd));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Algorithm {
    file_name: String,
    name: Option<String>,
    author: Option<String>,
    description: Option<String>,
    algorithm_types: BTreeSet<AlgorithmType>,
}

impl Algorithm {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            name: None,
            author: None,
            description: None,
            algorithm_types: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_algorithm_type(mut self, algorithm_type: AlgorithmType) -> Self {
        self.algorithm_types.insert(algorithm_type);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn algorithm_types(&self) -> &BTreeSet<AlgorithmType> {
        &self.algorithm_types
    }

    /// Result types runs of this algorithm can produce
    pub fn result_types(&self) -> BTreeSet<ResultType> {
        self.algorithm_types
            .iter()
            .filter_map(AlgorithmType::result_type)
            .collect()
    }
}

/// The concrete source behind a registered input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    File(FileInputSetting),
    Table {
        table_name: String,
        /// Must reference a registered database connection input
        connection: InputId,
    },
    DatabaseConnection(DatabaseConnectionSetting),
}

/// A registered data source executions can refer to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    kind: InputKind,
    comment: Option<String>,
}

impl Input {
    pub fn file(setting: FileInputSetting) -> Self {
        Self {
            kind: InputKind::File(setting),
            comment: None,
        }
    }

    pub fn table(table_name: impl Into<String>, connection: InputId) -> Self {
        Self {
            kind: InputKind::Table {
                table_name: table_name.into(),
                connection,
            },
            comment: None,
        }
    }

    pub fn database_connection(setting: DatabaseConnectionSetting) -> Self {
        Self {
            kind: InputKind::DatabaseConnection(setting),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_database_connection(&self) -> bool {
        matches!(self.kind, InputKind::DatabaseConnection(_))
    }

    /// Short name for display and logs
    pub fn identifier(&self) -> String {
        match &self.kind {
            InputKind::File(setting) => setting.file_name.clone(),
            InputKind::Table { table_name, .. } => table_name.clone(),
            InputKind::DatabaseConnection(setting) => setting.identifier(),
        }
    }
}

/// One run of one algorithm
///
/// An execution starts with a begin timestamp and no end. The store sets the
/// end exactly once when the run finishes; a run that failed keeps no end
/// timestamp. The pair (algorithm, begin) is unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    algorithm: AlgorithmId,
    begin: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    config: Option<String>,
    hardware_description: Option<String>,
    description: Option<String>,
    inputs: Vec<InputId>,
    results: Vec<ResultId>,
}

impl Execution {
    /// Creates an execution beginning now
    pub fn new(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            begin: Utc::now(),
            end: None,
            config: None,
            hardware_description: None,
            description: None,
            inputs: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn with_begin(mut self, begin: DateTime<Utc>) -> Self {
        self.begin = begin;
        self
    }

    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    pub fn with_hardware_description(mut self, hardware_description: impl Into<String>) -> Self {
        self.hardware_description = Some(hardware_description.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_input(mut self, input: InputId) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn begin(&self) -> DateTime<Utc> {
        self.begin
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn hardware_description(&self) -> Option<&str> {
        self.hardware_description.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn inputs(&self) -> &[InputId] {
        &self.inputs
    }

    pub fn results(&self) -> &[ResultId] {
        &self.results
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Wall clock duration, available once the execution has finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.end.map(|end| end - self.begin)
    }

    pub(crate) fn set_end(&mut self, end: DateTime<Utc>) {
        self.end = Some(end);
    }

    pub(crate) fn push_result(&mut self, result: ResultId) {
        self.results.push(result);
    }
}

/// A stored batch of results of one type, named like the file a run would write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFile {
    execution: ExecutionId,
    result_type: ResultType,
    file_name: String,
    entries: Vec<ProfilingResult>,
}

impl ResultFile {
    pub(crate) fn new(
        execution: ExecutionId,
        result_type: ResultType,
        file_name: String,
        entries: Vec<ProfilingResult>,
    ) -> Self {
        Self {
            execution,
            result_type,
            file_name,
            entries,
        }
    }

    pub fn execution(&self) -> ExecutionId {
        self.execution
    }

    pub fn result_type(&self) -> ResultType {
        self.result_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn entries(&self) -> &[ProfilingResult] {
        &self.entries
    }
}
