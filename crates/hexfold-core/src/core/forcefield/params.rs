use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EnergyParams {
    pub electrostatic_constant: f64,
    pub hydrophobic_exposed: f64,
    pub hydrophobic_buried: f64,
    pub hydrophilic_exposed: f64,
    pub hydrophilic_buried: f64,
    pub angular_penalty: f64, // per step of fold-state mismatch
    /// Lattice distance at or below which non-bonded monomers repel. Distance 1 is an
    /// ordinary neighbor contact, so only thresholds of 1 or more charge contacts.
    pub clash_threshold: f64,
    pub steric_strength: f64,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            electrostatic_constant: 1.0,
            hydrophobic_exposed: 1.0,
            hydrophobic_buried: -1.0,
            hydrophilic_exposed: -1.0,
            hydrophilic_buried: 1.0,
            angular_penalty: 0.1,
            clash_threshold: 0.5,
            steric_strength: 2.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid energy parameter '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl EnergyParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let params: Self = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamLoadError> {
        let fields = [
            ("electrostatic-constant", self.electrostatic_constant),
            ("hydrophobic-exposed", self.hydrophobic_exposed),
            ("hydrophobic-buried", self.hydrophobic_buried),
            ("hydrophilic-exposed", self.hydrophilic_exposed),
            ("hydrophilic-buried", self.hydrophilic_buried),
            ("angular-penalty", self.angular_penalty),
            ("clash-threshold", self.clash_threshold),
            ("steric-strength", self.steric_strength),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParamLoadError::Invalid {
                name,
                reason: format!("value {value} is not finite"),
            });
        }

        if !(self.hydrophobic_exposed > 0.0 && self.hydrophobic_buried < 0.0) {
            return Err(ParamLoadError::Invalid {
                name: "hydrophobic-exposed",
                reason: "hydrophobic weights must satisfy exposed > 0 > buried".to_string(),
            });
        }
        if !(self.hydrophilic_exposed < 0.0 && self.hydrophilic_buried > 0.0) {
            return Err(ParamLoadError::Invalid {
                name: "hydrophilic-exposed",
                reason: "hydrophilic weights must satisfy exposed < 0 < buried".to_string(),
            });
        }

        for (name, value) in [
            ("angular-penalty", self.angular_penalty),
            ("clash-threshold", self.clash_threshold),
            ("steric-strength", self.steric_strength),
        ] {
            if value < 0.0 {
                return Err(ParamLoadError::Invalid {
                    name,
                    reason: format!("value {value} must not be negative"),
                });
            }
        }
        Ok(())
    }
}
