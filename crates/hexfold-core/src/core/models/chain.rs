use super::monomer::Monomer;
use crate::core::lattice::{MAX_STEPS, MIN_STEPS};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("A chain must contain at least one monomer")]
    Empty,
    #[error("Chain has {monomers} monomers but {fold_states} fold states")]
    LengthMismatch {
        monomers: usize,
        fold_states: usize,
    },
    #[error("Fold state {steps} at position {index} is outside {MIN_STEPS}..={MAX_STEPS}")]
    StepsOutOfRange { index: usize, steps: i8 },
    #[error("Invalid fold state token '{0}'")]
    InvalidFoldToken(String),
    #[error("Empty monomer code at position {0}")]
    EmptyMonomerCode(usize),
    #[error("Position {index} is outside a chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An immutable monomer sequence paired with one fold state per monomer.
///
/// The fold state at `i` is the bend applied after placing monomer `i`;
/// the first and last entries never affect the layout. The sequence is
/// shared between copies, so deriving a candidate chain only copies the
/// fold states.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    monomers: Arc<[Monomer]>,
    fold_states: Vec<i8>,
}

impl Chain {
    pub fn new(monomers: Vec<Monomer>, fold_states: Vec<i8>) -> Result<Self, ChainError> {
        if monomers.is_empty() {
            return Err(ChainError::Empty);
        }
        if monomers.len() != fold_states.len() {
            return Err(ChainError::LengthMismatch {
                monomers: monomers.len(),
                fold_states: fold_states.len(),
            });
        }
        if let Some((index, &steps)) = fold_states
            .iter()
            .enumerate()
            .find(|(_, s)| !(MIN_STEPS..=MAX_STEPS).contains(*s))
        {
            return Err(ChainError::StepsOutOfRange { index, steps });
        }

        Ok(Self {
            monomers: monomers.into(),
            fold_states,
        })
    }

    pub fn straight(monomers: Vec<Monomer>) -> Result<Self, ChainError> {
        let fold_states = vec![0; monomers.len()];
        Self::new(monomers, fold_states)
    }

    /// Parses a hyphen-separated code string (`"FLX-L60-FLX"`) and an optional
    /// comma-separated fold-state list (`"0,1,0"`). Missing fold states mean a
    /// straight chain. Empty tokens between separators are rejected.
    pub fn parse(sequence: &str, fold_states: Option<&str>) -> Result<Self, ChainError> {
        if sequence.trim().is_empty() {
            return Err(ChainError::Empty);
        }
        let monomers = sequence
            .split('-')
            .map(str::trim)
            .enumerate()
            .map(|(index, code)| match code {
                "" => Err(ChainError::EmptyMonomerCode(index)),
                code => Ok(Monomer::from_code(code)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        match fold_states {
            None => Self::straight(monomers),
            Some(list) if list.trim().is_empty() => Self::new(monomers, Vec::new()),
            Some(list) => {
                let steps = list
                    .split(',')
                    .map(str::trim)
                    .map(|token| {
                        token
                            .parse::<i8>()
                            .map_err(|_| ChainError::InvalidFoldToken(token.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::new(monomers, steps)
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }

    pub fn fold_states(&self) -> &[i8] {
        &self.fold_states
    }

    pub fn monomer(&self, index: usize) -> Option<&Monomer> {
        self.monomers.get(index)
    }

    pub fn fold_state(&self, index: usize) -> Option<i8> {
        self.fold_states.get(index).copied()
    }

    /// Returns a copy of this chain with one fold state replaced.
    pub fn with_fold_state(&self, index: usize, steps: i8) -> Result<Self, ChainError> {
        if index >= self.len() {
            return Err(ChainError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
            return Err(ChainError::StepsOutOfRange { index, steps });
        }
        let mut fold_states = self.fold_states.clone();
        fold_states[index] = steps;
        Ok(Self {
            monomers: Arc::clone(&self.monomers),
            fold_states,
        })
    }

    /// Interior positions whose monomer admits more than one fold state.
    pub fn pivot_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.len().saturating_sub(1))
            .filter(|&i| self.monomers[i].properties().admitted_steps().count() > 1)
    }

    pub fn total_mass(&self) -> f64 {
        self.monomers.iter().map(|m| m.properties().mass).sum()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.monomers.iter().map(Monomer::code).collect();
        let steps: Vec<String> = self.fold_states.iter().map(i8::to_string).collect();
        write!(f, "{} [{}]", codes.join("-"), steps.join(","))
    }
}
