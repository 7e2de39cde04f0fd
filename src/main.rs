use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tracing::info;

use metanome::configuration::{
    Configuration, ConfigurationRequirement, ConfigurationResult, FileInputSetting,
    IntegerSetting, ListBoxSetting, Requirement,
};
use metanome::execution::{AlgorithmExecutor, ExecutionResult, ProfilingAlgorithm};
use metanome::results::{
    BasicStatistic, ColumnCombination, ColumnIdentifier, FunctionalDependency, ProfilingResult,
    UniqueColumnCombination,
};
use metanome::store::{Algorithm, AlgorithmType, Input, MetadataStore};

/// Demo algorithm that profiles a fixed orders table
struct DemoProfiler;

impl DemoProfiler {
    fn declared() -> ConfigurationResult<Vec<ConfigurationRequirement>> {
        Ok(vec![
            Requirement::<FileInputSetting>::new("input_file")?.into(),
            Requirement::<IntegerSetting>::new("max_level")?.into(),
            ConfigurationRequirement::list_box(
                Requirement::<ListBoxSetting>::new("ranking")?,
                vec!["by column".to_string(), "by size".to_string()],
            ),
        ])
    }
}

#[async_trait]
impl ProfilingAlgorithm for DemoProfiler {
    fn requirements(&self) -> Vec<ConfigurationRequirement> {
        Self::declared().unwrap_or_default()
    }

    async fn execute(
        &self,
        configuration: &Configuration,
    ) -> ExecutionResult<Vec<ProfilingResult>> {
        let input = &configuration.file_inputs("input_file")?[0];
        let max_level = configuration.integers("max_level")?[0];
        let ranking = &configuration.selections("ranking")?[0];
        info!(
            "Profiling, input={} max_level={} ranking={}",
            input.file_name, max_level, ranking
        );

        let id = "orders.id".parse::<ColumnIdentifier>()?;
        let zip = "orders.zip".parse::<ColumnIdentifier>()?;
        let city = "orders.city".parse::<ColumnIdentifier>()?;
        let first_name = "orders.first_name".parse::<ColumnIdentifier>()?;
        let last_name = "orders.last_name".parse::<ColumnIdentifier>()?;

        let mut results: Vec<ProfilingResult> = vec![
            UniqueColumnCombination::new(ColumnCombination::new(vec![id])).into(),
            FunctionalDependency::new(ColumnCombination::new(vec![zip.clone()]), city).into(),
            BasicStatistic::new("row count", ColumnCombination::default(), 1000).into(),
            BasicStatistic::new("distinct values", ColumnCombination::new(vec![zip]), 412).into(),
        ];
        if max_level >= 2 {
            results.push(
                UniqueColumnCombination::new(ColumnCombination::new(vec![first_name, last_name]))
                    .into(),
            );
        }
        Ok(results)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Metanome");

    let general_start_time = SystemTime::now();

    let mut store = MetadataStore::new();
    let algorithm_id = store.register_algorithm(
        Algorithm::new("demo_profiler.jar")
            .with_name("Demo Profiler")
            .with_author("Metanome")
            .with_description("Profiles a fixed orders table")
            .with_algorithm_type(AlgorithmType::Ucc)
            .with_algorithm_type(AlgorithmType::Fd)
            .with_algorithm_type(AlgorithmType::BasicStat)
            .with_algorithm_type(AlgorithmType::FileInput),
    )?;
    let input_id = store.register_input(
        Input::file(FileInputSetting::new("orders.csv").with_separator_char(';'))
            .with_comment("demo order data"),
    )?;
    let store_setup_dur = general_start_time.elapsed()?;

    let executor_new_start = SystemTime::now();
    let mut executor = AlgorithmExecutor::builder()
        .with_store(store)
        .with_hardware_description("local demo machine")
        .build();
    let executor_new_dur = executor_new_start.elapsed()?;

    let algorithm = DemoProfiler;
    let mut requirements = algorithm.requirements();
    for requirement in &mut requirements {
        match requirement {
            ConfigurationRequirement::FileInput(file) => file.check_and_set_settings(vec![
                FileInputSetting::new("orders.csv").with_separator_char(';'),
            ])?,
            ConfigurationRequirement::Integer(level) => {
                level.check_and_set_settings(vec![IntegerSetting::new(2)])?
            }
            ConfigurationRequirement::ListBox { requirement, .. } => {
                requirement.check_and_set_settings(vec![ListBoxSetting::new("by column")])?
            }
            _ => {}
        }
    }

    let execute_start = SystemTime::now();
    let mut report = executor
        .execute(algorithm_id, &algorithm, requirements, vec![input_id])
        .await?;
    let execute_dur = execute_start.elapsed()?;

    report.phase_metrics.duration_collection.push_front((
        "executor_new_dur".to_string(),
        executor_new_start.duration_since(UNIX_EPOCH)?.as_millis(),
        executor_new_dur.as_millis(),
    ));
    report.phase_metrics.duration_collection.push_front((
        "store_setup_dur".to_string(),
        general_start_time.duration_since(UNIX_EPOCH)?.as_millis(),
        store_setup_dur.as_millis(),
    ));
    report.phase_metrics.duration_collection.push_back((
        "execute_total_dur".to_string(),
        execute_start.duration_since(UNIX_EPOCH)?.as_millis(),
        execute_dur.as_millis(),
    ));
    report.phase_metrics.duration_collection.push_back((
        "total_dur".to_string(),
        general_start_time.duration_since(UNIX_EPOCH)?.as_millis(),
        general_start_time.elapsed()?.as_millis(),
    ));

    // Write JSON to file
    let out_file_name = format!("execution_{}.json", report.execution_id);
    let mut f = File::create(out_file_name)?;
    f.write_all(report.to_json(false)?.as_bytes())?;

    println!("{}", report);
    println!("{}", report.phase_metrics.to_chrome_tracing()?);

    Ok(())
}
