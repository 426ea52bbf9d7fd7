use std::collections::BTreeMap;
use std::fmt;

use super::atom::Atom;
use super::types::{BondOrder, Element};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize, order: BondOrder) -> Self {
        if idx1 <= idx2 {
            Self {
                i: idx1,
                j: idx2,
                order,
            }
        } else {
            Self {
                i: idx2,
                j: idx1,
                order,
            }
        }
    }

    pub fn other(&self, atom: usize) -> usize {
        if atom == self.i { self.j } else { self.i }
    }
}

/// Error raised when a bond references an atom outside the molecule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bond between atoms {i} and {j} references an atom outside the molecule ({atoms} atoms)")]
pub struct InvalidBondError {
    pub i: usize,
    pub j: usize,
    pub atoms: usize,
}

/// A molecular graph with precomputed adjacency and ring membership.
///
/// Construction validates bond indices and runs ring perception once;
/// the graph is immutable afterwards.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Per atom: (neighbor index, bond index).
    adjacency: Vec<Vec<(usize, usize)>>,
    ring_atom: Vec<bool>,
    ring_bond: Vec<bool>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, InvalidBondError> {
        let n = atoms.len();
        let mut adjacency = vec![Vec::new(); n];
        for (bi, bond) in bonds.iter().enumerate() {
            if bond.i >= n || bond.j >= n {
                return Err(InvalidBondError {
                    i: bond.i,
                    j: bond.j,
                    atoms: n,
                });
            }
            adjacency[bond.i].push((bond.j, bi));
            adjacency[bond.j].push((bond.i, bi));
        }

        let ring_bond = find_ring_bonds(n, bonds.len(), &adjacency);
        let mut ring_atom = vec![false; n];
        for (bi, bond) in bonds.iter().enumerate() {
            if ring_bond[bi] {
                ring_atom[bond.i] = true;
                ring_atom[bond.j] = true;
            }
        }

        Ok(Self {
            atoms,
            bonds,
            adjacency,
            ring_atom,
            ring_bond,
        })
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn atom(&self, idx: usize) -> &Atom {
        &self.atoms[idx]
    }

    /// Number of heavy atoms in the graph.
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Total atom count including implicit hydrogens. The critical-pressure
    /// correlation is parameterized against this count, hydrogens included.
    pub fn total_atom_count(&self) -> usize {
        self.atoms.len()
            + self
                .atoms
                .iter()
                .map(|a| a.implicit_hydrogens as usize)
                .sum::<usize>()
    }

    /// Heavy-atom degree.
    #[inline]
    pub fn degree(&self, idx: usize) -> usize {
        self.adjacency[idx].len()
    }

    /// Neighbors of `idx` as (neighbor index, bond order) pairs.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = (usize, BondOrder)> + '_ {
        self.adjacency[idx]
            .iter()
            .map(move |&(n, bi)| (n, self.bonds[bi].order))
    }

    pub fn bond_between(&self, i: usize, j: usize) -> Option<&Bond> {
        self.adjacency[i]
            .iter()
            .find(|&&(n, _)| n == j)
            .map(|&(_, bi)| &self.bonds[bi])
    }

    #[inline]
    pub fn in_ring(&self, idx: usize) -> bool {
        self.ring_atom[idx]
    }

    #[inline]
    pub fn bond_in_ring(&self, bond_idx: usize) -> bool {
        self.ring_bond[bond_idx]
    }

    /// Standard molecular weight (g/mol), implicit hydrogens included.
    pub fn molecular_weight(&self) -> f64 {
        self.atoms
            .iter()
            .map(|a| {
                a.element.atomic_mass() + a.implicit_hydrogens as f64 * Element::H.atomic_mass()
            })
            .sum()
    }

    /// Exact (monoisotopic) molecular mass (Da), implicit hydrogens included.
    pub fn exact_mass(&self) -> f64 {
        self.atoms
            .iter()
            .map(|a| {
                a.element.monoisotopic_mass()
                    + a.implicit_hydrogens as f64 * Element::H.monoisotopic_mass()
            })
            .sum()
    }

    /// Empirical formula in Hill order: C first, H second, the rest
    /// alphabetically.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut hydrogens = 0usize;
        for atom in &self.atoms {
            if atom.element == Element::H {
                hydrogens += 1;
            } else {
                *counts.entry(atom.element.symbol()).or_insert(0) += 1;
            }
            hydrogens += atom.implicit_hydrogens as usize;
        }

        let mut out = String::new();
        let carbons = counts.remove("C").unwrap_or(0);
        if carbons > 0 {
            push_formula_term(&mut out, "C", carbons);
            if hydrogens > 0 {
                push_formula_term(&mut out, "H", hydrogens);
            }
        } else if hydrogens > 0 {
            // No carbon: H sorts alphabetically with the rest.
            counts.insert("H", hydrogens);
        }
        for (sym, count) in counts {
            push_formula_term(&mut out, sym, count);
        }
        out
    }
}

fn push_formula_term(out: &mut String, symbol: &str, count: usize) {
    out.push_str(symbol);
    if count > 1 {
        out.push_str(&count.to_string());
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} heavy atoms)", self.formula(), self.atom_count())
    }
}

/// Ring perception: a bond is in a ring iff it is not a bridge of the graph
/// (removing it leaves its endpoints connected). Classic lowlink bridge
/// search, one DFS per connected component.
fn find_ring_bonds(n: usize, bond_count: usize, adjacency: &[Vec<(usize, usize)>]) -> Vec<bool> {
    let mut ring_bond = vec![true; bond_count];
    let mut disc = vec![usize::MAX; n];
    let mut low = vec![0usize; n];
    let mut timer = 0usize;

    // Iterative DFS; each stack frame is (atom, incoming bond, neighbor cursor).
    let mut stack: Vec<(usize, Option<usize>, usize)> = Vec::new();
    for start in 0..n {
        if disc[start] != usize::MAX {
            continue;
        }
        disc[start] = timer;
        low[start] = timer;
        timer += 1;
        stack.push((start, None, 0));

        while let Some(frame) = stack.last_mut() {
            let (atom, via) = (frame.0, frame.1);
            if frame.2 < adjacency[atom].len() {
                let (next, bi) = adjacency[atom][frame.2];
                frame.2 += 1;
                if Some(bi) == via {
                    continue;
                }
                if disc[next] == usize::MAX {
                    disc[next] = timer;
                    low[next] = timer;
                    timer += 1;
                    stack.push((next, Some(bi), 0));
                } else {
                    low[atom] = low[atom].min(disc[next]);
                }
            } else {
                stack.pop();
                if let Some(parent_frame) = stack.last() {
                    let parent = parent_frame.0;
                    low[parent] = low[parent].min(low[atom]);
                    if let Some(bi) = via {
                        if low[atom] > disc[parent] {
                            ring_bond[bi] = false;
                        }
                    }
                }
            }
        }
    }

    ring_bond
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> Molecule {
        let atoms = (0..len).map(|_| Atom::new(Element::C)).collect();
        let bonds = (1..len)
            .map(|i| Bond::new(i - 1, i, BondOrder::Single))
            .collect();
        Molecule::new(atoms, bonds).unwrap()
    }

    fn cycle(len: usize) -> Molecule {
        let atoms = (0..len).map(|_| Atom::new(Element::C)).collect();
        let bonds = (0..len)
            .map(|i| Bond::new(i, (i + 1) % len, BondOrder::Single))
            .collect();
        Molecule::new(atoms, bonds).unwrap()
    }

    #[test]
    fn bond_normalizes_index_order() {
        let b = Bond::new(5, 2, BondOrder::Double);
        assert_eq!((b.i, b.j), (2, 5));
        assert_eq!(b.other(2), 5);
    }

    #[test]
    fn rejects_out_of_range_bond() {
        let atoms = vec![Atom::new(Element::C)];
        let bonds = vec![Bond::new(0, 3, BondOrder::Single)];
        assert!(Molecule::new(atoms, bonds).is_err());
    }

    #[test]
    fn chain_has_no_ring_atoms() {
        let mol = chain(5);
        assert!((0..5).all(|i| !mol.in_ring(i)));
        assert!((0..4).all(|bi| !mol.bond_in_ring(bi)));
    }

    #[test]
    fn cycle_is_all_ring() {
        let mol = cycle(6);
        assert!((0..6).all(|i| mol.in_ring(i)));
        assert!((0..6).all(|bi| mol.bond_in_ring(bi)));
    }

    #[test]
    fn pendant_atom_on_ring_is_not_ring() {
        // Methylcyclopropane skeleton: triangle + one pendant carbon.
        let atoms = (0..4).map(|_| Atom::new(Element::C)).collect();
        let bonds = vec![
            Bond::new(0, 1, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Single),
            Bond::new(2, 0, BondOrder::Single),
            Bond::new(2, 3, BondOrder::Single),
        ];
        let mol = Molecule::new(atoms, bonds).unwrap();
        assert!(mol.in_ring(0) && mol.in_ring(1) && mol.in_ring(2));
        assert!(!mol.in_ring(3));
        assert!(!mol.bond_in_ring(3));
    }

    #[test]
    fn linker_between_two_rings_is_not_ring() {
        // Two triangles joined by a two-carbon chain.
        let atoms = (0..8).map(|_| Atom::new(Element::C)).collect();
        let bonds = vec![
            Bond::new(0, 1, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Single),
            Bond::new(2, 0, BondOrder::Single),
            Bond::new(2, 3, BondOrder::Single),
            Bond::new(3, 4, BondOrder::Single),
            Bond::new(4, 5, BondOrder::Single),
            Bond::new(5, 6, BondOrder::Single),
            Bond::new(6, 7, BondOrder::Single),
            Bond::new(7, 5, BondOrder::Single),
        ];
        let mol = Molecule::new(atoms, bonds).unwrap();
        assert!(!mol.in_ring(3));
        assert!(!mol.in_ring(4));
        assert!(mol.in_ring(5) && mol.in_ring(7));
    }

    #[test]
    fn formula_uses_hill_order() {
        // Acetone skeleton: C-C(=O)-C with hydrogens assigned manually.
        let mut atoms = vec![
            Atom::new(Element::C),
            Atom::new(Element::C),
            Atom::new(Element::O),
            Atom::new(Element::C),
        ];
        atoms[0].implicit_hydrogens = 3;
        atoms[3].implicit_hydrogens = 3;
        let bonds = vec![
            Bond::new(0, 1, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Double),
            Bond::new(1, 3, BondOrder::Single),
        ];
        let mol = Molecule::new(atoms, bonds).unwrap();
        assert_eq!(mol.formula(), "C3H6O");
        assert_eq!(mol.total_atom_count(), 10);
    }

    #[test]
    fn exact_mass_of_acetone() {
        let mut atoms = vec![
            Atom::new(Element::C),
            Atom::new(Element::C),
            Atom::new(Element::O),
            Atom::new(Element::C),
        ];
        atoms[0].implicit_hydrogens = 3;
        atoms[3].implicit_hydrogens = 3;
        let bonds = vec![
            Bond::new(0, 1, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Double),
            Bond::new(1, 3, BondOrder::Single),
        ];
        let mol = Molecule::new(atoms, bonds).unwrap();
        assert!((mol.exact_mass() - 58.0418648).abs() < 1e-6);
        assert!((mol.molecular_weight() - 58.08).abs() < 0.01);
    }
}
