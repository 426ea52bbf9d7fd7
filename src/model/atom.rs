use super::types::Element;

/// A heavy atom in a molecular graph.
///
/// Hydrogens are not graph atoms; they live in `implicit_hydrogens` on the
/// atom they are bonded to (the SMILES parser folds explicit `[H]` atoms in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    pub formal_charge: i8,
    pub implicit_hydrogens: u8,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            aromatic: false,
            formal_charge: 0,
            implicit_hydrogens: 0,
        }
    }

    pub fn aromatic(element: Element) -> Self {
        Self {
            aromatic: true,
            ..Self::new(element)
        }
    }
}
