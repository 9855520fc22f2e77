use super::kinetics::{DEFAULT_BARRIER_COEFFICIENT, DEFAULT_TEMPERATURE};
use super::transitions::StayPolicy;
use crate::core::forcefield::params::EnergyParams;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct KineticsConfig {
    /// Kelvin.
    pub temperature: f64,
    /// Scales `I × angle²` into kcal/mol.
    pub barrier_coefficient: f64,
    pub stay_policy: StayPolicy,
    pub energy: EnergyParams,
}

impl Default for KineticsConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            barrier_coefficient: DEFAULT_BARRIER_COEFFICIENT,
            stay_policy: StayPolicy::default(),
            energy: EnergyParams::default(),
        }
    }
}

#[derive(Default)]
pub struct KineticsConfigBuilder {
    temperature: Option<f64>,
    barrier_coefficient: Option<f64>,
    stay_policy: Option<StayPolicy>,
    energy: Option<EnergyParams>,
}

impl KineticsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn barrier_coefficient(mut self, coefficient: f64) -> Self {
        self.barrier_coefficient = Some(coefficient);
        self
    }
    pub fn stay_policy(mut self, policy: StayPolicy) -> Self {
        self.stay_policy = Some(policy);
        self
    }
    pub fn energy(mut self, params: EnergyParams) -> Self {
        self.energy = Some(params);
        self
    }

    pub fn build(self) -> Result<KineticsConfig, ConfigError> {
        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        if !(temperature.is_finite() && temperature > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "temperature",
                reason: format!("{temperature} K is not a positive finite temperature"),
            });
        }

        let barrier_coefficient = self
            .barrier_coefficient
            .unwrap_or(DEFAULT_BARRIER_COEFFICIENT);
        if !(barrier_coefficient.is_finite() && barrier_coefficient >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "barrier_coefficient",
                reason: format!("{barrier_coefficient} must be finite and non-negative"),
            });
        }

        let stay_policy = self.stay_policy.unwrap_or_default();
        if let StayPolicy::Constant(weight) = stay_policy {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "stay_policy",
                    reason: format!("constant stay weight {weight} must be positive"),
                });
            }
        }

        let energy = self.energy.unwrap_or_default();
        energy
            .validate()
            .map_err(|e| ConfigError::InvalidParameter {
                name: "energy",
                reason: e.to_string(),
            })?;

        Ok(KineticsConfig {
            temperature,
            barrier_coefficient,
            stay_policy,
            energy,
        })
    }
}
