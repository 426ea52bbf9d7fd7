//! Molecular graph model.
//!
//! Hydrogen-suppressed graphs: atoms carry their implicit hydrogen count,
//! bonds are normalized index pairs, and ring membership is perceived once
//! at construction.

pub mod atom;
pub mod molecule;
pub mod types;

pub use atom::Atom;
pub use molecule::{Bond, InvalidBondError, Molecule};
pub use types::{BondOrder, Element, ParseElementError};
