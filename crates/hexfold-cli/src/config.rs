use crate::cli::TransitionsArgs;
use crate::error::{CliError, Result};
use hexfold::core::forcefield::params::EnergyParams;
use hexfold::engine::config::{KineticsConfig, KineticsConfigBuilder};
use hexfold::engine::transitions::StayPolicy;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct PartialKineticsConfig {
    temperature: Option<f64>,
    #[serde(rename = "barrier-coefficient")]
    barrier_coefficient: Option<f64>,
    #[serde(rename = "stay-weight")]
    stay_weight: Option<f64>,
}

/// Settings read from the optional TOML config file, before command-line
/// overrides are applied.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    energy: Option<EnergyParams>,
    kinetics: Option<PartialKineticsConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if given; otherwise every setting keeps its default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn energy_params(&self) -> Result<EnergyParams> {
        let params = self.energy.clone().unwrap_or_default();
        params
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(params)
    }

    pub fn merge_with_cli(mut self, args: &TransitionsArgs) -> Result<KineticsConfig> {
        self.apply_set_values(&args.set_values)?;

        let energy = self.energy_params()?;
        let kinetics = self.kinetics.take().unwrap_or_default();

        let mut builder = KineticsConfigBuilder::new().energy(energy);
        if let Some(t) = args.temperature.or(kinetics.temperature) {
            builder = builder.temperature(t);
        }
        if let Some(c) = args.barrier_coefficient.or(kinetics.barrier_coefficient) {
            builder = builder.barrier_coefficient(c);
        }
        if let Some(w) = args.stay_weight.or(kinetics.stay_weight) {
            builder = builder.stay_policy(StayPolicy::Constant(w));
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            if let Some(field) = key.strip_prefix("energy.") {
                let energy = self.energy.get_or_insert_with(Default::default);
                let slot = match field {
                    "electrostatic-constant" => &mut energy.electrostatic_constant,
                    "hydrophobic-exposed" => &mut energy.hydrophobic_exposed,
                    "hydrophobic-buried" => &mut energy.hydrophobic_buried,
                    "hydrophilic-exposed" => &mut energy.hydrophilic_exposed,
                    "hydrophilic-buried" => &mut energy.hydrophilic_buried,
                    "angular-penalty" => &mut energy.angular_penalty,
                    "clash-threshold" => &mut energy.clash_threshold,
                    "steric-strength" => &mut energy.steric_strength,
                    _ => return Err(unsupported_key(key)),
                };
                *slot = parse_value(key, value_str)?;
                continue;
            }

            let kinetics = self.kinetics.get_or_insert_with(Default::default);
            let slot = match key {
                "kinetics.temperature" => &mut kinetics.temperature,
                "kinetics.barrier-coefficient" => &mut kinetics.barrier_coefficient,
                "kinetics.stay-weight" => &mut kinetics.stay_weight,
                _ => return Err(unsupported_key(key)),
            };
            *slot = Some(parse_value(key, value_str)?);
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value_str)))
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!("Unsupported configuration key for --set: '{}'", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("hexfold.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn transitions_args(extra: &[&str]) -> TransitionsArgs {
        let mut args = vec!["hexfold", "transitions", "-s", "FLX-FLX-FLX"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Transitions(args) => args,
            other => panic!("expected transitions, got {other:?}"),
        }
    }

    #[test]
    fn missing_config_path_yields_defaults() {
        let partial = PartialAppConfig::load(None).unwrap();
        assert_eq!(partial.energy_params().unwrap(), EnergyParams::default());
        let config = partial.merge_with_cli(&transitions_args(&[])).unwrap();
        assert_eq!(config, KineticsConfig::default());
    }

    #[test]
    fn load_from_file_and_merge_with_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [energy]
            electrostatic-constant = 2.0

            [kinetics]
            temperature = 280.0
            stay-weight = 0.25
            "#,
        );

        let partial = PartialAppConfig::from_file(&path).unwrap();
        let config = partial.merge_with_cli(&transitions_args(&[])).unwrap();
        assert_eq!(config.energy.electrostatic_constant, 2.0);
        assert_eq!(config.energy.angular_penalty, 0.1);
        assert_eq!(config.temperature, 280.0);
        assert_eq!(config.stay_policy, StayPolicy::Constant(0.25));
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[kinetics]\ntemperature = 280.0\n");

        let partial = PartialAppConfig::from_file(&path).unwrap();
        let args = transitions_args(&["--temperature", "330", "--barrier-coefficient", "0"]);
        let config = partial.merge_with_cli(&args).unwrap();
        assert_eq!(config.temperature, 330.0);
        assert_eq!(config.barrier_coefficient, 0.0);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[energy]\nangular-penalty = 0.3\n");

        let partial = PartialAppConfig::from_file(&path).unwrap();
        let args = transitions_args(&[
            "-S",
            "energy.angular-penalty=0.05",
            "-S",
            "kinetics.temperature=310",
        ]);
        let config = partial.merge_with_cli(&args).unwrap();
        assert_eq!(config.energy.angular_penalty, 0.05);
        assert_eq!(config.temperature, 310.0);
    }

    #[test]
    fn unknown_set_key_and_bad_value_are_rejected() {
        let mut partial = PartialAppConfig::default();
        let result = partial.apply_set_values(&["energy.dielectric=4".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Unsupported")));

        let result = partial.apply_set_values(&["kinetics.temperature=warm".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Invalid value")));

        let result = partial.apply_set_values(&["kinetics.temperature".to_string()]);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("KEY=VALUE")));
    }

    #[test]
    fn unknown_table_in_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[optimization]\nnum-solutions = 3\n");
        let result = PartialAppConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn invalid_values_surface_as_config_errors() {
        let partial = PartialAppConfig::default();
        let result = partial.merge_with_cli(&transitions_args(&["--temperature", "0"]));
        assert!(matches!(result, Err(CliError::Config(_))));

        let mut partial = PartialAppConfig::default();
        partial
            .apply_set_values(&["energy.hydrophobic-buried=2".to_string()])
            .unwrap();
        assert!(matches!(partial.energy_params(), Err(CliError::Config(_))));
    }
}
