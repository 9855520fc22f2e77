//! # Workflows Module
//!
//! This module provides the high-level entry points of HexFold, tying the lattice, the
//! energy model and the kinetics engine together into single calls.
//!
//! ## Overview
//!
//! A workflow takes a chain plus configuration, runs every stage with progress reporting
//! and returns one report that a front end can print or inspect.
//!
//! ## Architecture
//!
//! - **Survey Workflow** ([`survey`]) - Lays out a chain, scores it term by term and builds
//!   its transition matrix, with helpers to assemble the kinetics configuration from an
//!   energy parameter file

pub mod survey;
