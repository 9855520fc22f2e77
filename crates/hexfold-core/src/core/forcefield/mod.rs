//! # Force Field Module
//!
//! This module provides the energy model that scores a folded chain on the hex lattice.
//!
//! ## Overview
//!
//! The energy of a conformation is the sum of four independent terms, each computed
//! against the chain's lattice layout:
//!
//! - **Electrostatic** - logarithmic (two-dimensional) Coulomb interaction between every
//!   pair of charged monomers; pairs at lattice distance 1 contribute exactly zero
//! - **Hydrophobic** - solvent exposure from the number of occupied lattice neighbors,
//!   penalizing exposed hydrophobic and buried hydrophilic monomers
//! - **Folding preference** - a fixed penalty per step of mismatch between a monomer's
//!   fold state and its preferred fold state
//! - **Steric** - a steep repulsive wall for monomers that are close on the lattice but
//!   not neighbors in sequence
//!
//! A self-overlapping layout has no finite energy: [`scoring::Scorer::full_energy`] maps
//! the layout overlap to `f64::INFINITY` instead of failing.
//!
//! ## Key Components
//!
//! - [`params`] - Tunable energy constants with TOML loading and validation
//! - [`scoring`] - High-level scoring interface for whole chains
//! - [`term`] - Per-term energy breakdown and aggregation
//!
//! ## Usage
//!
//! ```ignore
//! use hexfold::core::forcefield::{params::EnergyParams, scoring::Scorer};
//!
//! let params = EnergyParams::default();
//! let scorer = Scorer::new(&params);
//! let energy = scorer.full_energy(&chain);
//! ```

pub(crate) mod energy;
pub mod params;
pub(crate) mod potentials;
pub mod scoring;
pub mod term;
