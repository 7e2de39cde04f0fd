use async_trait::async_trait;

use crate::configuration::requirement::ConfigurationRequirement;
use crate::configuration::value::Configuration;
use crate::results::result::ProfilingResult;
use super::error::ExecutionResult;

/// Trait for profiling algorithm implementations.
///
/// This trait defines the interface every profiling algorithm must implement.
/// It provides two core operations:
/// 1. Declaring the parameters the algorithm needs
/// 2. Running the algorithm against a built configuration
///
/// # Design Philosophy
///
/// This trait enables a strategy pattern where the `AlgorithmExecutor` can run
/// any algorithm without knowing its discovery strategy. When adding a new
/// algorithm:
/// 1. Create a struct for it
/// 2. Implement this trait for the struct
/// 3. Register its metadata in the store and hand both to the executor
///
/// No changes to the execution logic are required. The executor builds the
/// configuration from the declared requirements, so an algorithm only ever
/// sees values that passed cardinality validation.
#[async_trait]
pub trait ProfilingAlgorithm: Send + Sync {
    /// Declare the parameters this algorithm expects.
    ///
    /// The returned requirements carry no settings yet. The caller binds
    /// settings to each requirement before the run starts.
    fn requirements(&self) -> Vec<ConfigurationRequirement>;

    /// Run the algorithm and return every result it discovered.
    ///
    /// # Arguments
    ///
    /// * `configuration` - The values built from this algorithm's requirements
    ///
    /// # Returns
    ///
    /// All discovered results, in emission order. Returning an error marks the
    /// whole run as failed; partial results are discarded.
    async fn execute(&self, configuration: &Configuration)
        -> ExecutionResult<Vec<ProfilingResult>>;
}
