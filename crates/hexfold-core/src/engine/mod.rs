//! # Engine Module
//!
//! This module implements the kinetics layer of HexFold: how fast a folded chain leaves
//! its current conformation through each possible local re-fold.
//!
//! ## Overview
//!
//! A re-fold changes the fold state of one pivot monomer, which rigidly rotates the rest
//! of the chain about that monomer. Each candidate is rated with an Arrhenius law whose
//! barrier grows with the moment of inertia of the rotating arms and with the square of
//! the rotation angle. Uphill moves additionally pay their energy difference, which makes
//! every forward/backward pair of rates satisfy detailed balance.
//!
//! The engine only builds the weighted list of candidates. Drawing one of them and
//! applying it is left to the caller.
//!
//! ## Architecture
//!
//! - **Kinetics** ([`kinetics`]) - Moment of inertia, rotational barrier and transition rate
//! - **Transition Matrix** ([`transitions`]) - Enumeration and rating of every pivot re-fold,
//!   the residual stay weight and selection probabilities
//! - **Configuration** ([`config`]) - Temperature, barrier scale, stay policy and energy
//!   parameters with validation
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping the core errors
//!
//! ## Key Capabilities
//!
//! - **Detailed balance** between every pair of forward and reverse transitions
//! - **Overlap-aware enumeration** that drops self-overlapping candidates
//! - **Parallel candidate evaluation** across pivots behind the `parallel` feature, with
//!   output order identical to the sequential path
//! - **Value semantics** so every candidate is scored on its own copy of the chain

pub mod config;
pub mod error;
pub mod kinetics;
pub mod progress;
pub mod transitions;
