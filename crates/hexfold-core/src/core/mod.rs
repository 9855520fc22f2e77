//! # Core Module
//!
//! This module provides the stateless building blocks of HexFold: lattice geometry,
//! chain models and the energy model that scores a folded chain.
//!
//! ## Overview
//!
//! A chain of typed monomers is laid out on a two-dimensional hex lattice by applying a
//! bend of `steps × 60°` after each monomer. All positions are exact integer axial
//! coordinates, so layouts never accumulate floating-point drift and overlap detection is
//! a plain coordinate comparison.
//!
//! ## Architecture
//!
//! - **Lattice Geometry** ([`lattice`]) - Axial coordinates, the six directions, bend arithmetic
//!   and the hex distance metric
//! - **Chain Representation** ([`models`]) - Monomer catalogue, chains and lattice layouts
//! - **Energy Model** ([`forcefield`]) - Electrostatic, hydrophobic, folding-preference and
//!   steric terms combined into one score
//!
//! ## Key Capabilities
//!
//! - **Exact lattice placement** of arbitrarily bent chains with self-overlap detection
//! - **Four-term energy functional** with per-term breakdown
//! - **Tunable parameters** loaded from TOML with built-in defaults
//! - **Permissive catalogue** where unknown monomer codes are neutral rather than fatal

pub mod forcefield;
pub mod lattice;
pub mod models;
