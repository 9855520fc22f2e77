//! # HexFold Core Library
//!
//! Lattice folding and folding kinetics for linear chains of typed monomers, such as
//! protein residues or nucleic-acid bases, on a two-dimensional hex lattice.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless value types (`Chain`, `Layout`),
//!   exact integer lattice geometry and the four-term energy model (`potentials`,
//!   `scoring`).
//!
//! - **[`engine`]: The Kinetics Layer.** Rates every local re-fold of a chain with an
//!   Arrhenius law that satisfies detailed balance, and assembles the candidates into a
//!   transition matrix for an outer Monte Carlo stepper.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into single
//!   calls that lay out, score and survey a chain with progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
