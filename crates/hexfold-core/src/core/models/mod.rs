//! # Core Models Module
//!
//! This module contains the value types that describe a folded chain in HexFold:
//! what each unit is, how the chain is bent, and where every unit lands on the lattice.
//!
//! ## Overview
//!
//! All models are immutable snapshots. Changing a fold state produces a new [`chain::Chain`]
//! that shares its monomer sequence with the original, so many candidate conformations can
//! be evaluated side by side without any synchronization.
//!
//! ## Key Components
//!
//! - [`monomer`] - The closed monomer catalogue: mass, charge class, hydropathy, fold preference
//! - [`chain`] - A monomer sequence paired with one fold state per monomer
//! - [`layout`] - Deterministic placement of a chain on the hex lattice with overlap detection
//!
//! ## Usage
//!
//! ```ignore
//! use hexfold::core::models::{chain::Chain, layout::Layout};
//!
//! let chain = Chain::parse("FLX-L60-FLX", Some("0,1,0"))?;
//! let layout = Layout::build(&chain)?;
//! assert_eq!(layout.len(), 3);
//! ```

pub mod chain;
pub mod layout;
pub mod monomer;
