use std::collections::HashMap;

use super::entities::{
    Algorithm, AlgorithmId, Execution, ExecutionId, Input, InputId, InputKind, ResultFile,
    ResultId,
};
use super::error::{StoreError, StoreResult};
use crate::results::result::{ProfilingResult, ResultType};

/// In-memory metadata store for algorithms, inputs, executions, and results
///
/// Entities are kept in id-keyed maps and refer to each other by id only.
/// Every reference is checked when it enters the store, so an id stored
/// inside an entity always resolves, except across [`remove_execution`].
///
/// [`remove_execution`]: MetadataStore::remove_execution
#[derive(Debug, Default)]
pub struct MetadataStore {
    algorithms: HashMap<AlgorithmId, Algorithm>,
    inputs: HashMap<InputId, Input>,
    executions: HashMap<ExecutionId, Execution>,
    results: HashMap<ResultId, ResultFile>,
    next_id: u64,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Registers an algorithm; its file name must be unique across the store
    pub fn register_algorithm(&mut self, algorithm: Algorithm) -> StoreResult<AlgorithmId> {
        if self
            .algorithms
            .values()
            .any(|existing| existing.file_name() == algorithm.file_name())
        {
            return Err(StoreError::UniqueViolation {
                constraint: "algorithm file name",
                value: algorithm.file_name().to_string(),
            });
        }
        let id = AlgorithmId(self.allocate_id());
        self.algorithms.insert(id, algorithm);
        Ok(id)
    }

    pub fn algorithm(&self, id: AlgorithmId) -> StoreResult<&Algorithm> {
        self.algorithms.get(&id).ok_or(StoreError::NotFound {
            entity: "algorithm",
            id: id.as_u64(),
        })
    }

    pub fn algorithm_by_file_name(&self, file_name: &str) -> Option<(AlgorithmId, &Algorithm)> {
        self.algorithms
            .iter()
            .find(|(_, algorithm)| algorithm.file_name() == file_name)
            .map(|(id, algorithm)| (*id, algorithm))
    }

    /// All registered algorithms in id order
    pub fn algorithms(&self) -> Vec<(AlgorithmId, &Algorithm)> {
        let mut algorithms: Vec<(AlgorithmId, &Algorithm)> = self
            .algorithms
            .iter()
            .map(|(id, algorithm)| (*id, algorithm))
            .collect();
        algorithms.sort_by_key(|(id, _)| *id);
        algorithms
    }

    /// Registers an input. A table input must reference an already registered
    /// database connection input.
    pub fn register_input(&mut self, input: Input) -> StoreResult<InputId> {
        if let InputKind::Table { connection, .. } = input.kind() {
            let referenced = self.inputs.get(connection).ok_or(StoreError::NotFound {
                entity: "input",
                id: connection.as_u64(),
            })?;
            if !referenced.is_database_connection() {
                return Err(StoreError::InvalidReference {
                    id: connection.as_u64(),
                    expected: "database connection",
                });
            }
        }
        let id = InputId(self.allocate_id());
        self.inputs.insert(id, input);
        Ok(id)
    }

    pub fn input(&self, id: InputId) -> StoreResult<&Input> {
        self.inputs.get(&id).ok_or(StoreError::NotFound {
            entity: "input",
            id: id.as_u64(),
        })
    }

    /// Stores a new execution after checking that its algorithm and inputs
    /// exist and that no other execution of the same algorithm shares its
    /// begin timestamp
    pub fn create_execution(&mut self, execution: Execution) -> StoreResult<ExecutionId> {
        self.algorithm(execution.algorithm())?;
        for input in execution.inputs() {
            self.input(*input)?;
        }
        if self.executions.values().any(|existing| {
            existing.algorithm() == execution.algorithm() && existing.begin() == execution.begin()
        }) {
            return Err(StoreError::UniqueViolation {
                constraint: "execution (algorithm, begin)",
                value: format!(
                    "algorithm {} at {}",
                    execution.algorithm(),
                    execution.begin().to_rfc3339()
                ),
            });
        }
        let id = ExecutionId(self.allocate_id());
        self.executions.insert(id, execution);
        Ok(id)
    }

    pub fn execution(&self, id: ExecutionId) -> StoreResult<&Execution> {
        self.executions.get(&id).ok_or(StoreError::NotFound {
            entity: "execution",
            id: id.as_u64(),
        })
    }

    /// Executions of one algorithm, ordered by begin timestamp
    pub fn executions_for_algorithm(
        &self,
        algorithm: AlgorithmId,
    ) -> Vec<(ExecutionId, &Execution)> {
        let mut executions: Vec<(ExecutionId, &Execution)> = self
            .executions
            .iter()
            .filter(|(_, execution)| execution.algorithm() == algorithm)
            .map(|(id, execution)| (*id, execution))
            .collect();
        executions.sort_by_key(|(id, execution)| (execution.begin(), *id));
        executions
    }

    /// Stores a batch of results for an execution and links it from both
    /// sides. The file name must be unique across all stored results.
    pub fn attach_result(
        &mut self,
        execution: ExecutionId,
        result_type: ResultType,
        file_name: String,
        entries: Vec<ProfilingResult>,
    ) -> StoreResult<ResultId> {
        self.execution(execution)?;
        if self
            .results
            .values()
            .any(|existing| existing.file_name() == file_name)
        {
            return Err(StoreError::UniqueViolation {
                constraint: "result file name",
                value: file_name,
            });
        }
        let id = ResultId(self.allocate_id());
        self.results
            .insert(id, ResultFile::new(execution, result_type, file_name, entries));
        if let Some(owner) = self.executions.get_mut(&execution) {
            owner.push_result(id);
        }
        Ok(id)
    }

    pub fn result(&self, id: ResultId) -> StoreResult<&ResultFile> {
        self.results.get(&id).ok_or(StoreError::NotFound {
            entity: "result",
            id: id.as_u64(),
        })
    }

    /// Result files of an execution in the order they were attached
    pub fn results_for_execution(&self, execution: ExecutionId) -> StoreResult<Vec<&ResultFile>> {
        let owner = self.execution(execution)?;
        let mut result_files = Vec::with_capacity(owner.results().len());
        for id in owner.results() {
            result_files.push(self.result(*id)?);
        }
        Ok(result_files)
    }

    /// Sets the end timestamp of an execution, exactly once
    pub fn finish_execution(
        &mut self,
        execution: ExecutionId,
        end: chrono::DateTime<chrono::Utc>,
    ) -> StoreResult<()> {
        let entity = self
            .executions
            .get_mut(&execution)
            .ok_or(StoreError::NotFound {
                entity: "execution",
                id: execution.as_u64(),
            })?;
        if entity.is_finished() {
            return Err(StoreError::AlreadyFinished {
                id: execution.as_u64(),
            });
        }
        entity.set_end(end);
        Ok(())
    }

    /// Removes an execution together with its result files and returns it
    pub fn remove_execution(&mut self, execution: ExecutionId) -> StoreResult<Execution> {
        let entity = self
            .executions
            .remove(&execution)
            .ok_or(StoreError::NotFound {
                entity: "execution",
                id: execution.as_u64(),
            })?;
        for result in entity.results() {
            self.results.remove(result);
        }
        Ok(entity)
    }

    pub fn algorithm_count(&self) -> usize {
        self.algorithms.len()
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn execution_count(&self) -> usize {
        self.executions.len()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
