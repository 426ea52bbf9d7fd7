//! Estimation of thermophysical properties from molecular structure using
//! the Joback group-contribution method.
//!
//! A structure (SMILES text or a parsed [`Molecule`]) is decomposed into the
//! 41 Joback functional groups; properties are then sums of per-group
//! contributions plugged into the fixed Joback correlations. All estimates
//! are in SI units.
//!
//! ```
//! use joback::Joback;
//!
//! let acetone = Joback::new("CC(=O)C")?;
//! assert!((acetone.tb()? - 322.11).abs() < 1e-9);
//! assert!((acetone.tc(None)? - 500.559).abs() < 1e-3);
//! # Ok::<(), joback::Error>(())
//! ```
//!
//! The [`db`] and [`validate`] modules drive the batch validation run that
//! exercises the fragmenter against a compound corpus and writes a sorted
//! report file.

pub mod db;
mod error;
pub mod estimator;
pub mod fragment;
pub mod groups;
pub mod model;
pub mod smiles;
pub mod validate;

pub use error::Error;
pub use estimator::{Joback, StructureInput};
pub use fragment::{fragment, Fragmentation, MatchOptions};
pub use groups::{GroupCoeffs, GroupCounts, GroupTable, JobackGroup};
pub use model::{Atom, Bond, BondOrder, Element, Molecule};
