use serde::{Deserialize, Serialize};
use std::fmt;

use super::column::{ColumnCombination, ColumnIdentifier, ColumnPermutation};

/// The kinds of results a profiling run can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResultType {
    Stat,
    Fd,
    Ucc,
    Cucc,
    Ind,
    Od,
}

impl ResultType {
    /// File name suffix for results of this type
    pub fn ending(&self) -> &'static str {
        match self {
            ResultType::Stat => "_stats",
            ResultType::Fd => "_fds",
            ResultType::Ucc => "_uccs",
            ResultType::Cucc => "_cuccs",
            ResultType::Ind => "_inds",
            ResultType::Od => "_ods",
        }
    }

    /// Human readable name of this result type
    pub fn name(&self) -> &'static str {
        match self {
            ResultType::Stat => "Basic Statistic",
            ResultType::Fd => "Functional Dependency",
            ResultType::Ucc => "Unique Column Combination",
            ResultType::Cucc => "Conditional Unique Column Combination",
            ResultType::Ind => "Inclusion Dependency",
            ResultType::Od => "Order Dependency",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The columns of the determinant decide the value of the dependant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionalDependency {
    pub determinant: ColumnCombination,
    pub dependant: ColumnIdentifier,
}

impl FunctionalDependency {
    pub fn new(determinant: ColumnCombination, dependant: ColumnIdentifier) -> Self {
        Self {
            determinant,
            dependant,
        }
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.determinant, self.dependant)
    }
}

/// The values of the dependant columns all appear in the referenced columns
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InclusionDependency {
    pub dependant: ColumnPermutation,
    pub referenced: ColumnPermutation,
}

impl InclusionDependency {
    pub fn new(dependant: ColumnPermutation, referenced: ColumnPermutation) -> Self {
        Self {
            dependant,
            referenced,
        }
    }
}

impl fmt::Display for InclusionDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [= {}", self.dependant, self.referenced)
    }
}

/// No two rows share a value combination in these columns
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueColumnCombination {
    pub column_combination: ColumnCombination,
}

impl UniqueColumnCombination {
    pub fn new(column_combination: ColumnCombination) -> Self {
        Self { column_combination }
    }
}

impl fmt::Display for UniqueColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_combination)
    }
}

/// One equality constraint restricting the rows a conditional result covers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnCondition {
    pub column: ColumnIdentifier,
    pub value: String,
}

impl ColumnCondition {
    pub fn new(column: ColumnIdentifier, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

impl fmt::Display for ColumnCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.value)
    }
}

/// A column combination that is unique on the rows matching every condition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionalUniqueColumnCombination {
    pub column_combination: ColumnCombination,
    pub conditions: Vec<ColumnCondition>,
}

impl ConditionalUniqueColumnCombination {
    pub fn new(column_combination: ColumnCombination, conditions: Vec<ColumnCondition>) -> Self {
        Self {
            column_combination,
            conditions,
        }
    }
}

impl fmt::Display for ConditionalUniqueColumnCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions: Vec<String> = self.conditions.iter().map(ToString::to_string).collect();
        write!(f, "{} | {}", self.column_combination, conditions.join(" && "))
    }
}

/// Sorting the rows by the left-hand side also sorts them by the right-hand side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderDependency {
    pub lhs: ColumnPermutation,
    pub rhs: ColumnPermutation,
}

impl OrderDependency {
    pub fn new(lhs: ColumnPermutation, rhs: ColumnPermutation) -> Self {
        Self { lhs, rhs }
    }
}

impl fmt::Display for OrderDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~> {}", self.lhs, self.rhs)
    }
}

/// A named measurement over a column combination, value shape left to the algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStatistic {
    pub statistic_name: String,
    pub column_combination: ColumnCombination,
    pub value: serde_json::Value,
}

impl BasicStatistic {
    pub fn new(
        statistic_name: impl Into<String>,
        column_combination: ColumnCombination,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            statistic_name: statistic_name.into(),
            column_combination,
            value: value.into(),
        }
    }
}

impl fmt::Display for BasicStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {}: {}",
            self.statistic_name, self.column_combination, self.value
        )
    }
}

/// Any single result emitted by a profiling algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfilingResult {
    BasicStatistic(BasicStatistic),
    FunctionalDependency(FunctionalDependency),
    UniqueColumnCombination(UniqueColumnCombination),
    ConditionalUniqueColumnCombination(ConditionalUniqueColumnCombination),
    InclusionDependency(InclusionDependency),
    OrderDependency(OrderDependency),
}

impl ProfilingResult {
    pub fn result_type(&self) -> ResultType {
        match self {
            ProfilingResult::BasicStatistic(_) => ResultType::Stat,
            ProfilingResult::FunctionalDependency(_) => ResultType::Fd,
            ProfilingResult::UniqueColumnCombination(_) => ResultType::Ucc,
            ProfilingResult::ConditionalUniqueColumnCombination(_) => ResultType::Cucc,
            ProfilingResult::InclusionDependency(_) => ResultType::Ind,
            ProfilingResult::OrderDependency(_) => ResultType::Od,
        }
    }
}

impl fmt::Display for ProfilingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfilingResult::BasicStatistic(result) => result.fmt(f),
            ProfilingResult::FunctionalDependency(result) => result.fmt(f),
            ProfilingResult::UniqueColumnCombination(result) => result.fmt(f),
            ProfilingResult::ConditionalUniqueColumnCombination(result) => result.fmt(f),
            ProfilingResult::InclusionDependency(result) => result.fmt(f),
            ProfilingResult::OrderDependency(result) => result.fmt(f),
        }
    }
}

impl From<BasicStatistic> for ProfilingResult {
    fn from(result: BasicStatistic) -> Self {
        ProfilingResult::BasicStatistic(result)
    }
}

impl From<FunctionalDependency> for ProfilingResult {
    fn from(result: FunctionalDependency) -> Self {
        ProfilingResult::FunctionalDependency(result)
    }
}

impl From<UniqueColumnCombination> for ProfilingResult {
    fn from(result: UniqueColumnCombination) -> Self {
        ProfilingResult::UniqueColumnCombination(result)
    }
}

impl From<ConditionalUniqueColumnCombination> for ProfilingResult {
    fn from(result: ConditionalUniqueColumnCombination) -> Self {
        ProfilingResult::ConditionalUniqueColumnCombination(result)
    }
}

impl From<InclusionDependency> for ProfilingResult {
    fn from(result: InclusionDependency) -> Self {
        ProfilingResult::InclusionDependency(result)
    }
}

impl From<OrderDependency> for ProfilingResult {
    fn from(result: OrderDependency) -> Self {
        ProfilingResult::OrderDependency(result)
    }
}
