use std::collections::{BTreeMap, LinkedList};
use std::path::Path;
use std::time::{Duration, SystemTime};

use chrono::Utc;
use tracing::info;

use crate::configuration::factory::ConfigurationFactory;
use crate::configuration::requirement::ConfigurationRequirement;
use crate::configuration::value::Configuration;
use crate::execution::algorithm::ProfilingAlgorithm;
use crate::execution::error::ExecutionResult;
use crate::execution::report::{ExecutionReport, PhaseMetrics};
use crate::results::result::{ProfilingResult, ResultType};
use crate::store::entities::{AlgorithmId, Execution, ExecutionId, InputId};
use crate::store::error::StoreError;
use crate::store::metadata::MetadataStore;
use crate::util::timing::{measure_dur, measure_dur_async, measure_dur_with_error};

/// Builder for constructing an `AlgorithmExecutor` instance.
///
/// This builder provides a fluent API for configuring and creating an
/// `AlgorithmExecutor`. The builder pattern allows for easy extension with
/// additional configuration options in the future.
///
/// # Examples
///
/// ```no_run
/// use metanome::execution::AlgorithmExecutor;
/// use metanome::store::MetadataStore;
///
/// // Simple case with a fresh store
/// let executor = AlgorithmExecutor::builder().build();
///
/// // With an existing store and a hardware note for provenance
/// let executor = AlgorithmExecutor::builder()
///     .with_store(MetadataStore::new())
///     .with_hardware_description("8 cores, 32 GB")
///     .build();
/// ```
pub struct ExecutorBuilder {
    store: Option<MetadataStore>,
    hardware_description: Option<String>,
}

impl ExecutorBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            hardware_description: None,
        }
    }

    /// Uses an existing metadata store instead of starting empty
    pub fn with_store(mut self, store: MetadataStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Hardware description recorded on every execution this executor creates
    pub fn with_hardware_description(mut self, hardware_description: impl Into<String>) -> Self {
        self.hardware_description = Some(hardware_description.into());
        self
    }

    pub fn build(self) -> AlgorithmExecutor {
        AlgorithmExecutor {
            store: self.store.unwrap_or_default(),
            hardware_description: self.hardware_description,
        }
    }
}

impl Default for ExecutorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs profiling algorithms and records every run in the metadata store.
///
/// For each run the executor creates the execution entity first, then builds
/// the configuration, runs the algorithm, stores the grouped results, and
/// finally sets the end timestamp. A run that fails at any point leaves its
/// execution without an end timestamp, which is how unfinished and crashed
/// runs stay distinguishable from completed ones.
///
/// # Examples
///
/// ```no_run
/// use metanome::execution::AlgorithmExecutor;
/// use metanome::store::{Algorithm, AlgorithmType, MetadataStore};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let mut store = MetadataStore::new();
/// let algorithm_id = store.register_algorithm(
///     Algorithm::new("profiler.jar")
///         .with_name("Profiler")
///         .with_algorithm_type(AlgorithmType::Ucc),
/// )?;
///
/// let mut executor = AlgorithmExecutor::builder()
///     .with_store(store)
///     .with_hardware_description("8 cores, 32 GB")
///     .build();
/// # Ok(())
/// # }
/// ```
pub struct AlgorithmExecutor {
    store: MetadataStore,
    hardware_description: Option<String>,
}

impl AlgorithmExecutor {
    /// Creates a new `ExecutorBuilder` for constructing an `AlgorithmExecutor`
    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::new()
    }

    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MetadataStore {
        &mut self.store
    }

    /// Consumes the executor and hands back the store with all recorded runs
    pub fn into_store(self) -> MetadataStore {
        self.store
    }

    /// Run one algorithm and record the run.
    ///
    /// # Arguments
    ///
    /// * `algorithm_id` - The registered algorithm this run belongs to
    /// * `algorithm` - The implementation to execute
    /// * `requirements` - The algorithm's requirements with settings already bound
    /// * `inputs` - Registered inputs this run reads, recorded for provenance
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(ExecutionReport)` - The run's results, result file names, and phase timings
    /// * `Err(ExecutionError)` - If configuration, the algorithm, or the store fails
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * `algorithm_id` or an input id is not registered
    /// * A requirement has no settings bound or identifiers collide
    /// * The algorithm itself fails
    ///
    /// The execution entity is created before the algorithm starts, so a
    /// failed run remains visible in the store with no end timestamp.
    pub async fn execute(
        &mut self,
        algorithm_id: AlgorithmId,
        algorithm: &dyn ProfilingAlgorithm,
        requirements: Vec<ConfigurationRequirement>,
        inputs: Vec<InputId>,
    ) -> ExecutionResult<ExecutionReport> {
        let mut internal_phases: LinkedList<(&str, SystemTime, Duration)> = LinkedList::new();

        let algorithm_file_name = self.store.algorithm(algorithm_id)?.file_name().to_string();
        info!(
            "Executing, algorithm={} inputs={}",
            algorithm_file_name,
            inputs.len()
        );

        let config_snapshot = serde_json::to_string(&requirements)?;
        let begin = Utc::now();

        let mut execution = Execution::new(algorithm_id)
            .with_begin(begin)
            .with_config(config_snapshot);
        if let Some(hardware_description) = &self.hardware_description {
            execution = execution.with_hardware_description(hardware_description.clone());
        }
        for input in &inputs {
            execution = execution.with_input(*input);
        }

        let execution_id = measure_dur_with_error(
            "create_execution",
            &mut internal_phases,
            || self.store.create_execution(execution.clone()),
            Some(|id: &ExecutionId| format!("Created execution id={}", id)),
        )?;

        let configuration = measure_dur_with_error(
            "build_configuration",
            &mut internal_phases,
            || ConfigurationFactory::build_all(&requirements),
            Some(|c: &Configuration| format!("Built configuration values={}", c.len())),
        )?;

        let results = measure_dur_async(
            "run_algorithm",
            &mut internal_phases,
            || async { algorithm.execute(&configuration).await },
            Some(|r: &Vec<ProfilingResult>| format!("Discovered results count={}", r.len())),
        )
        .await?;

        let grouped = measure_dur(
            "group_results",
            &mut internal_phases,
            || group_results(&results),
            Some(|g: &BTreeMap<ResultType, Vec<ProfilingResult>>| {
                format!("Result types count={}", g.len())
            }),
        )
        .await;

        let stem = file_stem(&algorithm_file_name);
        let result_files = measure_dur_with_error(
            "attach_results",
            &mut internal_phases,
            || {
                let mut file_names = Vec::with_capacity(grouped.len());
                for (result_type, entries) in &grouped {
                    let file_name = format!(
                        "{}_{}{}",
                        stem,
                        begin.timestamp_millis(),
                        result_type.ending()
                    );
                    self.store.attach_result(
                        execution_id,
                        *result_type,
                        file_name.clone(),
                        entries.clone(),
                    )?;
                    file_names.push(file_name);
                }
                Ok::<_, StoreError>(file_names)
            },
            Some(|files: &Vec<String>| format!("Stored result files count={}", files.len())),
        )?;

        let end = Utc::now();
        measure_dur_with_error(
            "finish_execution",
            &mut internal_phases,
            || self.store.finish_execution(execution_id, end),
            None,
        )?;

        info!(
            "Execution finished, algorithm={} execution_id={} results={} took={}ms",
            algorithm_file_name,
            execution_id,
            results.len(),
            (end - begin).num_milliseconds()
        );

        Ok(ExecutionReport {
            execution_id,
            algorithm_file_name,
            begin,
            end,
            result_files,
            results,
            phase_metrics: PhaseMetrics::from_phases(&internal_phases),
        })
    }
}

/// Groups results by type, keeping emission order within each group
fn group_results(results: &[ProfilingResult]) -> BTreeMap<ResultType, Vec<ProfilingResult>> {
    let mut grouped: BTreeMap<ResultType, Vec<ProfilingResult>> = BTreeMap::new();
    for result in results {
        grouped
            .entry(result.result_type())
            .or_default()
            .push(result.clone());
    }
    grouped
}

/// The algorithm file name without its extension, used to name result files
fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::error::ConfigurationError;
    use crate::configuration::requirement::Requirement;
    use crate::configuration::setting::{FileInputSetting, IntegerSetting};
    use crate::execution::error::ExecutionError;
    use crate::results::column::{ColumnCombination, ColumnIdentifier};
    use crate::results::result::{BasicStatistic, FunctionalDependency, UniqueColumnCombination};
    use crate::store::entities::{Algorithm, AlgorithmType, Input};
    use async_trait::async_trait;

    struct StaticAlgorithm {
        results: Vec<ProfilingResult>,
    }

    #[async_trait]
    impl ProfilingAlgorithm for StaticAlgorithm {
        fn requirements(&self) -> Vec<ConfigurationRequirement> {
            Vec::new()
        }

        async fn execute(
            &self,
            _configuration: &Configuration,
        ) -> ExecutionResult<Vec<ProfilingResult>> {
            Ok(self.results.clone())
        }
    }

    struct FailingAlgorithm;

    #[async_trait]
    impl ProfilingAlgorithm for FailingAlgorithm {
        fn requirements(&self) -> Vec<ConfigurationRequirement> {
            Vec::new()
        }

        async fn execute(
            &self,
            _configuration: &Configuration,
        ) -> ExecutionResult<Vec<ProfilingResult>> {
            Err(ExecutionError::Algorithm("search space exhausted memory".to_string()))
        }
    }

    struct CountingAlgorithm;

    #[async_trait]
    impl ProfilingAlgorithm for CountingAlgorithm {
        fn requirements(&self) -> Vec<ConfigurationRequirement> {
            Requirement::<IntegerSetting>::new("ucc_count")
                .map(|requirement| vec![requirement.into()])
                .unwrap_or_default()
        }

        async fn execute(
            &self,
            configuration: &Configuration,
        ) -> ExecutionResult<Vec<ProfilingResult>> {
            let count = configuration.integers("ucc_count")?[0];
            let results = (0..count)
                .map(|n| {
                    UniqueColumnCombination::new(ColumnCombination::new(vec![
                        ColumnIdentifier::new("t", format!("c{}", n)),
                    ]))
                    .into()
                })
                .collect();
            Ok(results)
        }
    }

    fn column(table: &str, name: &str) -> ColumnIdentifier {
        ColumnIdentifier::new(table, name)
    }

    fn sample_results() -> Vec<ProfilingResult> {
        vec![
            UniqueColumnCombination::new(ColumnCombination::new(vec![column("t", "id")])).into(),
            FunctionalDependency::new(
                ColumnCombination::new(vec![column("t", "zip")]),
                column("t", "city"),
            )
            .into(),
            BasicStatistic::new("row count", ColumnCombination::default(), 100).into(),
            UniqueColumnCombination::new(ColumnCombination::new(vec![
                column("t", "first"),
                column("t", "last"),
            ]))
            .into(),
        ]
    }

    fn executor_with_algorithm() -> (AlgorithmExecutor, AlgorithmId) {
        let mut store = MetadataStore::new();
        let algorithm_id = store
            .register_algorithm(
                Algorithm::new("demo_profiler.jar")
                    .with_name("Demo Profiler")
                    .with_algorithm_type(AlgorithmType::Ucc)
                    .with_algorithm_type(AlgorithmType::Fd),
            )
            .unwrap();
        let executor = AlgorithmExecutor::builder().with_store(store).build();
        (executor, algorithm_id)
    }

    #[tokio::test]
    async fn test_execute_records_results_and_finishes() {
        let (mut executor, algorithm_id) = executor_with_algorithm();
        let algorithm = StaticAlgorithm {
            results: sample_results(),
        };

        let report = executor
            .execute(algorithm_id, &algorithm, Vec::new(), Vec::new())
            .await
            .unwrap();

        assert_eq!(report.algorithm_file_name, "demo_profiler.jar");
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.result_files.len(), 3);

        let store = executor.store();
        let execution = store.execution(report.execution_id).unwrap();
        assert!(execution.is_finished());
        assert_eq!(execution.end(), Some(report.end));
        assert!(execution.config().is_some());

        let result_files = store.results_for_execution(report.execution_id).unwrap();
        let types: Vec<ResultType> = result_files
            .iter()
            .map(|result_file| result_file.result_type())
            .collect();
        assert_eq!(types, vec![ResultType::Stat, ResultType::Fd, ResultType::Ucc]);

        let ucc_file = result_files
            .iter()
            .find(|result_file| result_file.result_type() == ResultType::Ucc)
            .unwrap();
        assert_eq!(ucc_file.entries().len(), 2);
    }

    #[tokio::test]
    async fn test_result_files_named_after_stem_begin_and_ending() {
        let (mut executor, algorithm_id) = executor_with_algorithm();
        let algorithm = StaticAlgorithm {
            results: sample_results(),
        };

        let report = executor
            .execute(algorithm_id, &algorithm, Vec::new(), Vec::new())
            .await
            .unwrap();

        let millis = report.begin.timestamp_millis();
        assert_eq!(
            report.result_files,
            vec![
                format!("demo_profiler_{}_stats", millis),
                format!("demo_profiler_{}_fds", millis),
                format!("demo_profiler_{}_uccs", millis),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_run_stays_unfinished() {
        let (mut executor, algorithm_id) = executor_with_algorithm();

        let result = executor
            .execute(algorithm_id, &FailingAlgorithm, Vec::new(), Vec::new())
            .await;
        assert!(matches!(result, Err(ExecutionError::Algorithm(_))));

        let store = executor.store();
        assert_eq!(store.execution_count(), 1);
        let executions = store.executions_for_algorithm(algorithm_id);
        let (_, execution) = executions.first().unwrap();
        assert!(!execution.is_finished());
        assert!(execution.results().is_empty());
        assert_eq!(store.result_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_algorithm_id_is_rejected() {
        let mut executor = AlgorithmExecutor::builder().build();
        let algorithm = StaticAlgorithm {
            results: Vec::new(),
        };

        let result = executor
            .execute(AlgorithmId(9), &algorithm, Vec::new(), Vec::new())
            .await;
        assert!(matches!(
            result,
            Err(ExecutionError::Store(StoreError::NotFound { .. }))
        ));
        assert_eq!(executor.store().execution_count(), 0);
    }

    #[tokio::test]
    async fn test_bound_configuration_reaches_algorithm() {
        let (mut executor, algorithm_id) = executor_with_algorithm();

        let algorithm = CountingAlgorithm;
        let mut requirements = algorithm.requirements();
        match requirements.first_mut().unwrap() {
            ConfigurationRequirement::Integer(requirement) => requirement
                .check_and_set_settings(vec![IntegerSetting::new(3)])
                .unwrap(),
            other => panic!("unexpected requirement: {:?}", other),
        }

        let report = executor
            .execute(algorithm_id, &algorithm, requirements, Vec::new())
            .await
            .unwrap();
        assert_eq!(report.results.len(), 3);
    }

    #[tokio::test]
    async fn test_unbound_requirement_fails_before_the_algorithm_runs() {
        let (mut executor, algorithm_id) = executor_with_algorithm();

        let algorithm = CountingAlgorithm;
        let requirements = algorithm.requirements();

        let result = executor
            .execute(algorithm_id, &algorithm, requirements, Vec::new())
            .await;
        assert!(matches!(
            result,
            Err(ExecutionError::Configuration(
                ConfigurationError::MissingSettings { .. }
            ))
        ));

        // The execution was created before configuration failed and stays open.
        assert_eq!(executor.store().execution_count(), 1);
        let executions = executor.store().executions_for_algorithm(algorithm_id);
        assert!(!executions[0].1.is_finished());
    }

    #[tokio::test]
    async fn test_inputs_are_recorded_on_the_execution() {
        let (mut executor, algorithm_id) = executor_with_algorithm();
        let input_id = executor
            .store_mut()
            .register_input(Input::file(FileInputSetting::new("orders.csv")))
            .unwrap();

        let algorithm = StaticAlgorithm {
            results: Vec::new(),
        };
        let report = executor
            .execute(algorithm_id, &algorithm, Vec::new(), vec![input_id])
            .await
            .unwrap();

        let execution = executor.store().execution(report.execution_id).unwrap();
        assert_eq!(execution.inputs(), &[input_id]);
    }

    #[tokio::test]
    async fn test_hardware_description_is_recorded() {
        let mut store = MetadataStore::new();
        let algorithm_id = store
            .register_algorithm(Algorithm::new("profiler.jar"))
            .unwrap();
        let mut executor = AlgorithmExecutor::builder()
            .with_store(store)
            .with_hardware_description("8 cores, 32 GB")
            .build();

        let algorithm = StaticAlgorithm {
            results: Vec::new(),
        };
        let report = executor
            .execute(algorithm_id, &algorithm, Vec::new(), Vec::new())
            .await
            .unwrap();

        let execution = executor.store().execution(report.execution_id).unwrap();
        assert_eq!(execution.hardware_description(), Some("8 cores, 32 GB"));
    }

    #[tokio::test]
    async fn test_phase_timings_cover_the_whole_run() {
        let (mut executor, algorithm_id) = executor_with_algorithm();
        let algorithm = StaticAlgorithm {
            results: sample_results(),
        };

        let report = executor
            .execute(algorithm_id, &algorithm, Vec::new(), Vec::new())
            .await
            .unwrap();

        let phase_names: Vec<&str> = report
            .phase_metrics
            .duration_collection
            .iter()
            .map(|(name, _, _)| name.as_str())
            .collect();
        assert_eq!(
            phase_names,
            vec![
                "create_execution",
                "build_configuration",
                "run_algorithm",
                "group_results",
                "attach_results",
                "finish_execution",
            ]
        );
    }

    #[test]
    fn test_file_stem_strips_one_extension() {
        assert_eq!(file_stem("demo_profiler.jar"), "demo_profiler");
        assert_eq!(file_stem("profiler"), "profiler");
        assert_eq!(file_stem("nested.name.jar"), "nested.name");
    }

    #[test]
    fn test_group_results_keeps_emission_order_within_type() {
        let results = sample_results();
        let grouped = group_results(&results);

        assert_eq!(grouped.len(), 3);
        let uccs = grouped.get(&ResultType::Ucc).unwrap();
        assert_eq!(uccs.len(), 2);
        assert_eq!(uccs[0], results[0]);
        assert_eq!(uccs[1], results[3]);
    }
}
