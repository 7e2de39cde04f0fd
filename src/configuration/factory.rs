use super::error::{ConfigurationError, ConfigurationResult};
use super::requirement::{ConfigurationRequirement, Requirement};
use super::value::{Configuration, ConfigurationValue, ValuePayload};

/// Factory turning bound requirements into configuration values
pub struct ConfigurationFactory;

impl ConfigurationFactory {
    /// Build the configuration value for one requirement.
    ///
    /// Every requirement variant maps to exactly one payload variant, so the
    /// match below is exhaustive by construction and a new setting type cannot
    /// be added without extending it.
    ///
    /// # Arguments
    ///
    /// * `requirement` - A requirement whose settings have already been bound
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(ConfigurationValue)` - The value carrying the requirement's identifier and settings
    /// * `Err(ConfigurationError)` - If the value cannot be built
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * No settings have been bound to the requirement yet
    pub fn build(requirement: &ConfigurationRequirement) -> ConfigurationResult<ConfigurationValue> {
        let value = match requirement {
            ConfigurationRequirement::String(requirement) => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::Strings(
                    Self::bound(requirement)?
                        .iter()
                        .map(|setting| setting.value.clone())
                        .collect(),
                ),
            ),
            ConfigurationRequirement::Boolean(requirement) => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::Booleans(
                    Self::bound(requirement)?
                        .iter()
                        .map(|setting| setting.value)
                        .collect(),
                ),
            ),
            ConfigurationRequirement::Integer(requirement) => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::Integers(
                    Self::bound(requirement)?
                        .iter()
                        .map(|setting| setting.value)
                        .collect(),
                ),
            ),
            ConfigurationRequirement::ListBox { requirement, .. } => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::Selections(
                    Self::bound(requirement)?
                        .iter()
                        .map(|setting| setting.selected_value.clone())
                        .collect(),
                ),
            ),
            ConfigurationRequirement::FileInput(requirement) => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::FileInputs(Self::bound(requirement)?.to_vec()),
            ),
            ConfigurationRequirement::TableInput(requirement) => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::TableInputs(Self::bound(requirement)?.to_vec()),
            ),
            ConfigurationRequirement::DatabaseConnection { requirement, .. } => {
                ConfigurationValue::new(
                    requirement.identifier(),
                    ValuePayload::DatabaseConnections(Self::bound(requirement)?.to_vec()),
                )
            }
            ConfigurationRequirement::RelationalInput(requirement) => ConfigurationValue::new(
                requirement.identifier(),
                ValuePayload::RelationalInputs(Self::bound(requirement)?.to_vec()),
            ),
        };
        Ok(value)
    }

    /// Builds the full configuration for an algorithm run, rejecting duplicate
    /// identifiers across requirements
    pub fn build_all(
        requirements: &[ConfigurationRequirement],
    ) -> ConfigurationResult<Configuration> {
        let mut configuration = Configuration::new();
        for requirement in requirements {
            configuration.insert(Self::build(requirement)?)?;
        }
        Ok(configuration)
    }

    fn bound<S>(requirement: &Requirement<S>) -> ConfigurationResult<&[S]> {
        requirement
            .settings()
            .ok_or_else(|| ConfigurationError::MissingSettings {
                identifier: requirement.identifier().to_string(),
            })
    }
}
