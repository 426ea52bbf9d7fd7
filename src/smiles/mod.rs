//! SMILES parser.
//!
//! Covers the subset the group catalog needs: organic-subset atoms, aromatic
//! lowercase forms, bracket atoms (isotope and chirality accepted and
//! ignored), branches, numeric and `%nn` ring closures, `.`-separated
//! components, and directional bonds read as single bonds. Implicit
//! hydrogens are assigned from the default valence model; explicit `[H]`
//! atoms are folded into the heavy atom they are bonded to.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::{Atom, Bond, BondOrder, Element, InvalidBondError, Molecule};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty SMILES string")]
    Empty,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unknown or unsupported element '{symbol}' at position {pos}")]
    UnknownElement { symbol: String, pos: usize },
    #[error("unterminated bracket atom starting at position {pos}")]
    UnterminatedBracket { pos: usize },
    #[error("unbalanced branch parenthesis at position {pos}")]
    UnbalancedBranch { pos: usize },
    #[error("bond symbol at position {pos} is not followed by an atom")]
    DanglingBond { pos: usize },
    #[error("ring closure {label} at position {pos} bonds an atom to itself")]
    RingSelfBond { label: u16, pos: usize },
    #[error("unclosed ring closure label(s): {0:?}")]
    UnclosedRing(Vec<u16>),
    #[error(transparent)]
    Graph(#[from] InvalidBondError),
}

struct ParsedAtom {
    atom: Atom,
    /// Bracket atoms carry their hydrogen count verbatim and are exempt
    /// from valence-based assignment.
    explicit_h: bool,
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    atoms: Vec<ParsedAtom>,
    bonds: Vec<Bond>,
    prev_atom: Option<usize>,
    pending_bond: Option<BondOrder>,
    branch_stack: Vec<usize>,
    /// label -> (open atom, bond order given at the opening, position).
    ring_closures: BTreeMap<u16, (usize, Option<BondOrder>, usize)>,
}

/// Parse a SMILES string into a hydrogen-suppressed molecular graph.
pub fn parse(smiles: &str) -> Result<Molecule, Error> {
    let trimmed = smiles.trim();
    if trimmed.is_empty() {
        return Err(Error::Empty);
    }
    let mut parser = Parser {
        input: trimmed.as_bytes(),
        pos: 0,
        atoms: Vec::new(),
        bonds: Vec::new(),
        prev_atom: None,
        pending_bond: None,
        branch_stack: Vec::new(),
        ring_closures: BTreeMap::new(),
    };
    parser.run()?;
    parser.finish()
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn run(&mut self) -> Result<(), Error> {
        while let Some(b) = self.peek() {
            let pos = self.pos;
            match b {
                b'-' | b'/' | b'\\' => {
                    self.pos += 1;
                    self.pending_bond = Some(BondOrder::Single);
                }
                b'=' => {
                    self.pos += 1;
                    self.pending_bond = Some(BondOrder::Double);
                }
                b'#' => {
                    self.pos += 1;
                    self.pending_bond = Some(BondOrder::Triple);
                }
                b':' => {
                    self.pos += 1;
                    self.pending_bond = Some(BondOrder::Aromatic);
                }
                b'(' => {
                    self.pos += 1;
                    if self.pending_bond.is_some() {
                        return Err(Error::DanglingBond { pos });
                    }
                    match self.prev_atom {
                        Some(prev) => self.branch_stack.push(prev),
                        None => return Err(Error::UnbalancedBranch { pos }),
                    }
                }
                b')' => {
                    self.pos += 1;
                    if self.pending_bond.is_some() {
                        return Err(Error::DanglingBond { pos });
                    }
                    match self.branch_stack.pop() {
                        Some(prev) => self.prev_atom = Some(prev),
                        None => return Err(Error::UnbalancedBranch { pos }),
                    }
                }
                b'.' => {
                    self.pos += 1;
                    if self.pending_bond.is_some() {
                        return Err(Error::DanglingBond { pos });
                    }
                    self.prev_atom = None;
                }
                b'0'..=b'9' => {
                    self.pos += 1;
                    self.ring_closure((b - b'0') as u16, pos)?;
                }
                b'%' => {
                    self.pos += 1;
                    let mut label = 0u16;
                    for _ in 0..2 {
                        match self.bump() {
                            Some(d @ b'0'..=b'9') => label = label * 10 + (d - b'0') as u16,
                            _ => {
                                return Err(Error::UnexpectedChar { ch: '%', pos });
                            }
                        }
                    }
                    self.ring_closure(label, pos)?;
                }
                b'[' => {
                    self.pos += 1;
                    let parsed = self.bracket_atom(pos)?;
                    self.add_atom(parsed, pos)?;
                }
                _ => {
                    let parsed = self.organic_atom(pos)?;
                    self.add_atom(parsed, pos)?;
                }
            }
        }

        if self.pending_bond.is_some() {
            return Err(Error::DanglingBond { pos: self.input.len() });
        }
        if !self.branch_stack.is_empty() {
            return Err(Error::UnbalancedBranch { pos: self.input.len() });
        }
        if !self.ring_closures.is_empty() {
            return Err(Error::UnclosedRing(
                self.ring_closures.keys().copied().collect(),
            ));
        }
        Ok(())
    }

    /// Bare atom outside brackets: organic subset or its aromatic lowercase
    /// form. Two-letter symbols (Cl, Br) are matched greedily.
    fn organic_atom(&mut self, pos: usize) -> Result<ParsedAtom, Error> {
        let b = match self.bump() {
            Some(b) => b,
            None => return Err(Error::Empty),
        };
        let (element, aromatic) = match b {
            b'B' if self.peek() == Some(b'r') => {
                self.pos += 1;
                (Element::Br, false)
            }
            b'C' if self.peek() == Some(b'l') => {
                self.pos += 1;
                (Element::Cl, false)
            }
            b'B' => (Element::B, false),
            b'C' => (Element::C, false),
            b'N' => (Element::N, false),
            b'O' => (Element::O, false),
            b'P' => (Element::P, false),
            b'S' => (Element::S, false),
            b'F' => (Element::F, false),
            b'I' => (Element::I, false),
            b'b' => (Element::B, true),
            b'c' => (Element::C, true),
            b'n' => (Element::N, true),
            b'o' => (Element::O, true),
            b'p' => (Element::P, true),
            b's' => (Element::S, true),
            other => {
                return Err(Error::UnexpectedChar {
                    ch: other as char,
                    pos,
                });
            }
        };
        let atom = if aromatic {
            Atom::aromatic(element)
        } else {
            Atom::new(element)
        };
        Ok(ParsedAtom {
            atom,
            explicit_h: false,
        })
    }

    /// Bracket atom: `[isotope? symbol chirality? Hn? charge? map?]`.
    /// Isotope, chirality and atom-map annotations are accepted and ignored.
    fn bracket_atom(&mut self, open_pos: usize) -> Result<ParsedAtom, Error> {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }

        let sym_pos = self.pos;
        let first = match self.bump() {
            Some(b) if b.is_ascii_alphabetic() => b,
            _ => return Err(Error::UnterminatedBracket { pos: open_pos }),
        };
        let aromatic = first.is_ascii_lowercase();
        let mut symbol = String::new();
        symbol.push(first.to_ascii_uppercase() as char);
        if !aromatic {
            if let Some(second) = self.peek() {
                if second.is_ascii_lowercase() {
                    self.pos += 1;
                    symbol.push(second as char);
                }
            }
        }
        let element: Element = symbol.parse().map_err(|_| Error::UnknownElement {
            symbol: symbol.clone(),
            pos: sym_pos,
        })?;

        while matches!(self.peek(), Some(b'@')) {
            self.pos += 1;
        }

        let mut hydrogens = 0u8;
        if self.peek() == Some(b'H') {
            self.pos += 1;
            hydrogens = 1;
            let mut count = 0u8;
            let mut saw_digit = false;
            while let Some(d @ b'0'..=b'9') = self.peek() {
                self.pos += 1;
                saw_digit = true;
                count = count.saturating_mul(10).saturating_add(d - b'0');
            }
            if saw_digit {
                hydrogens = count;
            }
        }

        let mut charge = 0i8;
        while let Some(sign @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let unit: i8 = if sign == b'+' { 1 } else { -1 };
            let mut magnitude = 0i8;
            let mut saw_digit = false;
            while let Some(d @ b'0'..=b'9') = self.peek() {
                self.pos += 1;
                saw_digit = true;
                magnitude = magnitude.saturating_mul(10).saturating_add((d - b'0') as i8);
            }
            charge += if saw_digit { unit * magnitude } else { unit };
        }

        if self.peek() == Some(b':') {
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }

        if self.bump() != Some(b']') {
            return Err(Error::UnterminatedBracket { pos: open_pos });
        }

        let mut atom = if aromatic {
            Atom::aromatic(element)
        } else {
            Atom::new(element)
        };
        atom.formal_charge = charge;
        atom.implicit_hydrogens = hydrogens;
        Ok(ParsedAtom {
            atom,
            explicit_h: true,
        })
    }

    fn add_atom(&mut self, parsed: ParsedAtom, pos: usize) -> Result<(), Error> {
        let idx = self.atoms.len();
        let aromatic = parsed.atom.aromatic;
        self.atoms.push(parsed);
        if let Some(prev) = self.prev_atom {
            let order = self
                .pending_bond
                .take()
                .unwrap_or_else(|| self.implicit_order(prev, aromatic));
            self.bonds.push(Bond::new(prev, idx, order));
        } else if self.pending_bond.is_some() {
            return Err(Error::DanglingBond { pos });
        }
        self.prev_atom = Some(idx);
        Ok(())
    }

    fn implicit_order(&self, prev: usize, next_aromatic: bool) -> BondOrder {
        if self.atoms[prev].atom.aromatic && next_aromatic {
            BondOrder::Aromatic
        } else {
            BondOrder::Single
        }
    }

    fn ring_closure(&mut self, label: u16, pos: usize) -> Result<(), Error> {
        let current = match self.prev_atom {
            Some(a) => a,
            None => {
                return Err(Error::UnexpectedChar {
                    ch: char::from_digit((label % 10) as u32, 10).unwrap_or('?'),
                    pos,
                });
            }
        };
        match self.ring_closures.remove(&label) {
            Some((open_atom, open_order, _)) => {
                if open_atom == current {
                    return Err(Error::RingSelfBond { label, pos });
                }
                let order = self
                    .pending_bond
                    .take()
                    .or(open_order)
                    .unwrap_or_else(|| {
                        self.implicit_order(open_atom, self.atoms[current].atom.aromatic)
                    });
                self.bonds.push(Bond::new(open_atom, current, order));
            }
            None => {
                let order = self.pending_bond.take();
                self.ring_closures.insert(label, (current, order, pos));
            }
        }
        Ok(())
    }

    /// Assign implicit hydrogens, fold explicit `[H]` atoms into their heavy
    /// neighbor, and build the final graph.
    fn finish(self) -> Result<Molecule, Error> {
        let Parser {
            mut atoms, bonds, ..
        } = self;

        // Valence sum per atom; aromatic atoms get one extra unit for the
        // delocalized electron.
        let mut valence = vec![0u8; atoms.len()];
        for bond in &bonds {
            valence[bond.i] = valence[bond.i].saturating_add(bond.order.valence_contribution());
            valence[bond.j] = valence[bond.j].saturating_add(bond.order.valence_contribution());
        }
        for (idx, parsed) in atoms.iter_mut().enumerate() {
            if parsed.explicit_h {
                continue;
            }
            let mut total = valence[idx];
            let valences = parsed.atom.element.default_valences();
            // Aromatic atoms carry one extra unit for the delocalized
            // electron and stay in the lowest valence state; an aromatic
            // sulfur or tertiary nitrogen never picks up a hydrogen from an
            // expanded valence.
            let allowed = if parsed.atom.aromatic {
                total = total.saturating_add(1);
                valences.get(..1).unwrap_or(&[])
            } else {
                valences
            };
            parsed.atom.implicit_hydrogens = allowed
                .iter()
                .find(|&&v| v >= total)
                .map(|&v| v - total)
                .unwrap_or(0);
        }

        // Fold explicit hydrogen atoms bonded to exactly one heavy atom.
        let mut degree = vec![0usize; atoms.len()];
        for bond in &bonds {
            degree[bond.i] += 1;
            degree[bond.j] += 1;
        }
        let mut folded = vec![false; atoms.len()];
        let mut extra_h = vec![0u8; atoms.len()];
        for bond in &bonds {
            for (h, heavy) in [(bond.i, bond.j), (bond.j, bond.i)] {
                if atoms[h].atom.element == Element::H
                    && atoms[heavy].atom.element != Element::H
                    && degree[h] == 1
                    && bond.order == BondOrder::Single
                    && atoms[h].atom.formal_charge == 0
                {
                    folded[h] = true;
                    extra_h[heavy] += 1;
                }
            }
        }

        let mut remap = vec![usize::MAX; atoms.len()];
        let mut final_atoms = Vec::with_capacity(atoms.len());
        for (idx, parsed) in atoms.into_iter().enumerate() {
            if folded[idx] {
                continue;
            }
            let mut atom = parsed.atom;
            atom.implicit_hydrogens = atom.implicit_hydrogens.saturating_add(extra_h[idx]);
            remap[idx] = final_atoms.len();
            final_atoms.push(atom);
        }
        let final_bonds = bonds
            .into_iter()
            .filter(|b| !folded[b.i] && !folded[b.j])
            .map(|b| Bond::new(remap[b.i], remap[b.j], b.order))
            .collect();

        Ok(Molecule::new(final_atoms, final_bonds)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h_counts(mol: &Molecule) -> Vec<u8> {
        mol.atoms().iter().map(|a| a.implicit_hydrogens).collect()
    }

    #[test]
    fn ethanol() {
        let mol = parse("CCO").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(h_counts(&mol), vec![3, 2, 1]);
        assert_eq!(mol.formula(), "C2H6O");
    }

    #[test]
    fn acetone_with_branch_and_double_bond() {
        let mol = parse("CC(=O)C").unwrap();
        assert_eq!(mol.formula(), "C3H6O");
        let carbonyl = mol.bond_between(1, 2).unwrap();
        assert_eq!(carbonyl.order, BondOrder::Double);
        assert_eq!(h_counts(&mol), vec![3, 0, 0, 3]);
    }

    #[test]
    fn aromatic_benzene() {
        let mol = parse("c1ccccc1").unwrap();
        assert_eq!(mol.atom_count(), 6);
        assert!((0..6).all(|i| mol.in_ring(i)));
        assert!((0..6).all(|i| mol.atom(i).aromatic));
        assert_eq!(h_counts(&mol), vec![1; 6]);
        // The ring-closure bond between aromatic atoms is aromatic too.
        assert_eq!(mol.bond_between(0, 5).unwrap().order, BondOrder::Aromatic);
    }

    #[test]
    fn kekulized_benzene() {
        let mol = parse("C1=CC=CC=C1").unwrap();
        assert_eq!(mol.formula(), "C6H6");
        assert!((0..6).all(|i| mol.in_ring(i)));
    }

    #[test]
    fn pyridine_nitrogen_has_no_hydrogen() {
        let mol = parse("c1ccncc1").unwrap();
        let n = mol
            .atoms()
            .iter()
            .position(|a| a.element == Element::N)
            .unwrap();
        assert_eq!(mol.atom(n).implicit_hydrogens, 0);
    }

    #[test]
    fn aromatic_heteroatoms_stay_in_lowest_valence() {
        // Thiophene sulfur must not pick up a hydrogen from sulfur's
        // expanded valence states.
        let mol = parse("c1ccsc1").unwrap();
        let s = mol
            .atoms()
            .iter()
            .position(|a| a.element == Element::S)
            .unwrap();
        assert_eq!(mol.atom(s).implicit_hydrogens, 0);

        // Same for a three-coordinate aromatic nitrogen.
        let mol = parse("Cn1ccnc1").unwrap();
        for (i, atom) in mol.atoms().iter().enumerate() {
            if atom.element == Element::N {
                assert_eq!(mol.atom(i).implicit_hydrogens, 0);
            }
        }

        // Furan oxygen has no room for a hydrogen either.
        let mol = parse("c1ccoc1").unwrap();
        let o = mol
            .atoms()
            .iter()
            .position(|a| a.element == Element::O)
            .unwrap();
        assert_eq!(mol.atom(o).implicit_hydrogens, 0);
    }

    #[test]
    fn pyrrole_nitrogen_keeps_bracket_hydrogen() {
        let mol = parse("c1cc[nH]c1").unwrap();
        let n = mol
            .atoms()
            .iter()
            .position(|a| a.element == Element::N)
            .unwrap();
        assert_eq!(mol.atom(n).implicit_hydrogens, 1);
    }

    #[test]
    fn bracket_charge_and_isotope() {
        let mol = parse("[13C]").unwrap();
        assert_eq!(mol.atom(0).implicit_hydrogens, 0);
        let mol = parse("[OH-]").unwrap();
        assert_eq!(mol.atom(0).formal_charge, -1);
        assert_eq!(mol.atom(0).implicit_hydrogens, 1);
        let mol = parse("[NH4+]").unwrap();
        assert_eq!(mol.atom(0).implicit_hydrogens, 4);
        assert_eq!(mol.atom(0).formal_charge, 1);
    }

    #[test]
    fn explicit_hydrogens_fold_into_heavy_atom() {
        let mol = parse("[H]O[H]").unwrap();
        assert_eq!(mol.atom_count(), 1);
        assert_eq!(mol.atom(0).element, Element::O);
        assert_eq!(mol.atom(0).implicit_hydrogens, 2);
    }

    #[test]
    fn dot_separated_components() {
        let mol = parse("O.O").unwrap();
        assert_eq!(mol.atom_count(), 2);
        assert!(mol.bond_between(0, 1).is_none());
    }

    #[test]
    fn percent_ring_closure() {
        let mol = parse("C%12CC%12").unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert!((0..3).all(|i| mol.in_ring(i)));
    }

    #[test]
    fn directional_bonds_read_as_single() {
        let mol = parse("C/C=C/C").unwrap();
        assert_eq!(mol.formula(), "C4H8");
        assert_eq!(mol.bond_between(1, 2).unwrap().order, BondOrder::Double);
    }

    #[test]
    fn triple_bond() {
        let mol = parse("C#N").unwrap();
        assert_eq!(mol.bond_between(0, 1).unwrap().order, BondOrder::Triple);
        assert_eq!(h_counts(&mol), vec![1, 0]);
    }

    #[test]
    fn error_cases() {
        assert!(matches!(parse(""), Err(Error::Empty)));
        assert!(matches!(parse("   "), Err(Error::Empty)));
        assert!(matches!(parse("C1CC"), Err(Error::UnclosedRing(_))));
        assert!(matches!(parse("C(C"), Err(Error::UnbalancedBranch { .. })));
        assert!(matches!(parse("CC)"), Err(Error::UnbalancedBranch { .. })));
        assert!(matches!(parse("C="), Err(Error::DanglingBond { .. })));
        assert!(matches!(parse("=C"), Err(Error::DanglingBond { .. })));
        assert!(matches!(parse("[C"), Err(Error::UnterminatedBracket { .. })));
        assert!(matches!(
            parse("[Xx]"),
            Err(Error::UnknownElement { .. })
        ));
        assert!(matches!(parse("Cx"), Err(Error::UnexpectedChar { .. })));
    }

    #[test]
    fn unsupported_metal_is_an_unknown_element() {
        let err = parse("[cH-]1cccc1.[cH-]1cccc1.[Fe+2]").unwrap_err();
        assert!(matches!(err, Error::UnknownElement { ref symbol, .. } if symbol == "Fe"));
    }

    #[test]
    fn sulfur_expanded_valence() {
        // DMSO: sulfur at valence 4 gets no implicit hydrogens beyond it.
        let mol = parse("CS(=O)C").unwrap();
        let s = mol
            .atoms()
            .iter()
            .position(|a| a.element == Element::S)
            .unwrap();
        assert_eq!(mol.atom(s).implicit_hydrogens, 0);
    }
}
