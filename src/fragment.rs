//! Decomposition of a molecular graph into Joback functional groups.
//!
//! Each catalog entry is a structural predicate rooted at one atom; a match
//! returns the atoms it claims (a carbonyl claims its oxygen, an ester
//! claims the carbon and both oxygens). The catalog is scanned in priority
//! order with claim bookkeeping, so more specific groups (acid, ester,
//! aldehyde) win over the generic ones they contain. Patterns are guarded to
//! be mutually exclusive on well-formed molecules, which keeps merged and
//! independent counting in agreement.

use log::{debug, trace};

use crate::groups::{GroupCounts, JobackGroup};
use crate::model::{BondOrder, Element, Molecule};

/// Controls how overlapping matches are counted.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// When true (the default), a match that would reuse an already-claimed
    /// atom is merged away. When false every match is counted independently.
    pub deduplicate: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { deduplicate: true }
    }
}

/// Result of decomposing one molecule.
#[derive(Debug, Clone)]
pub struct Fragmentation {
    /// Matched group multiset.
    pub counts: GroupCounts,
    /// Total atom count including implicit hydrogens; the critical-pressure
    /// correlation needs it.
    pub atom_count: usize,
    /// True when every heavy atom was assigned to a group.
    pub complete: bool,
    /// Human-readable status, e.g. `4/4 heavy atoms assigned`.
    pub detail: String,
}

struct GroupPattern {
    group: JobackGroup,
    matcher: fn(&Molecule, usize) -> Option<Vec<usize>>,
}

/// Decompose `mol` into functional groups.
pub fn fragment(mol: &Molecule, options: &MatchOptions) -> Fragmentation {
    let n = mol.atom_count();
    let mut claimed = vec![false; n];
    let mut counts = GroupCounts::new();

    for pattern in CATALOG {
        for root in 0..n {
            let Some(claim) = (pattern.matcher)(mol, root) else {
                continue;
            };
            let overlap = claim.iter().any(|&a| claimed[a]);
            if overlap && options.deduplicate {
                continue;
            }
            trace!(
                "matched {} at atom {} (claims {:?})",
                pattern.group.label(),
                root,
                claim
            );
            counts.increment(pattern.group);
            for a in claim {
                claimed[a] = true;
            }
        }
    }

    let assigned = claimed.iter().filter(|&&c| c).count();
    let complete = assigned == n;
    let detail = if complete {
        format!("{assigned}/{n} heavy atoms assigned")
    } else {
        let unassigned = (0..n)
            .filter(|&i| !claimed[i])
            .map(|i| format!("{}{}", mol.atom(i).element.symbol(), i))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{assigned}/{n} heavy atoms assigned; unassigned: {unassigned}")
    };
    debug!("fragmented {}: {}", mol.formula(), detail);

    Fragmentation {
        counts,
        atom_count: mol.total_atom_count(),
        complete,
        detail,
    }
}

const CATALOG: &[GroupPattern] = &[
    GroupPattern { group: JobackGroup::CarboxylicAcid, matcher: match_acid },
    GroupPattern { group: JobackGroup::Ester, matcher: match_ester },
    GroupPattern { group: JobackGroup::Aldehyde, matcher: match_aldehyde },
    GroupPattern { group: JobackGroup::RingKetone, matcher: match_ring_ketone },
    GroupPattern { group: JobackGroup::Ketone, matcher: match_ketone },
    GroupPattern { group: JobackGroup::Nitro, matcher: match_nitro },
    GroupPattern { group: JobackGroup::Nitrile, matcher: match_nitrile },
    GroupPattern { group: JobackGroup::CarbonylO, matcher: match_carbonyl_o },
    GroupPattern { group: JobackGroup::TerminalAlkyne, matcher: match_terminal_alkyne },
    GroupPattern { group: JobackGroup::InternalAlkyne, matcher: match_internal_alkyne },
    GroupPattern { group: JobackGroup::CumulatedAlkene, matcher: match_allene },
    GroupPattern { group: JobackGroup::RingAlkeneCh, matcher: match_ring_alkene_ch },
    GroupPattern { group: JobackGroup::RingAlkeneC, matcher: match_ring_alkene_c },
    GroupPattern { group: JobackGroup::RingMethylene, matcher: match_ring_ch2 },
    GroupPattern { group: JobackGroup::RingMethine, matcher: match_ring_ch },
    GroupPattern { group: JobackGroup::RingQuatCarbon, matcher: match_ring_quat },
    GroupPattern { group: JobackGroup::TerminalAlkene, matcher: match_terminal_alkene },
    GroupPattern { group: JobackGroup::InternalAlkene, matcher: match_internal_alkene },
    GroupPattern { group: JobackGroup::TrisubAlkene, matcher: match_trisub_alkene },
    GroupPattern { group: JobackGroup::Methyl, matcher: match_methyl },
    GroupPattern { group: JobackGroup::Methylene, matcher: match_methylene },
    GroupPattern { group: JobackGroup::Methine, matcher: match_methine },
    GroupPattern { group: JobackGroup::QuatCarbon, matcher: match_quat },
    GroupPattern { group: JobackGroup::PhenolOh, matcher: match_phenol_oh },
    GroupPattern { group: JobackGroup::AlcoholOh, matcher: match_alcohol_oh },
    GroupPattern { group: JobackGroup::RingEther, matcher: match_ring_ether },
    GroupPattern { group: JobackGroup::Ether, matcher: match_ether },
    GroupPattern { group: JobackGroup::ImineNh, matcher: match_imine_nh },
    GroupPattern { group: JobackGroup::PrimaryAmine, matcher: match_primary_amine },
    GroupPattern { group: JobackGroup::RingSecondaryAmine, matcher: match_ring_secondary_amine },
    GroupPattern { group: JobackGroup::SecondaryAmine, matcher: match_secondary_amine },
    GroupPattern { group: JobackGroup::RingImine, matcher: match_ring_imine },
    GroupPattern { group: JobackGroup::Imine, matcher: match_imine },
    GroupPattern { group: JobackGroup::TertiaryAmine, matcher: match_tertiary_amine },
    GroupPattern { group: JobackGroup::Thiol, matcher: match_thiol },
    GroupPattern { group: JobackGroup::RingSulfide, matcher: match_ring_sulfide },
    GroupPattern { group: JobackGroup::Sulfide, matcher: match_sulfide },
    GroupPattern { group: JobackGroup::Fluoro, matcher: match_fluoro },
    GroupPattern { group: JobackGroup::Chloro, matcher: match_chloro },
    GroupPattern { group: JobackGroup::Bromo, matcher: match_bromo },
    GroupPattern { group: JobackGroup::Iodo, matcher: match_iodo },
];

fn is(mol: &Molecule, i: usize, element: Element) -> bool {
    mol.atom(i).element == element
}

fn h(mol: &Molecule, i: usize) -> u8 {
    mol.atom(i).implicit_hydrogens
}

fn aromatic(mol: &Molecule, i: usize) -> bool {
    mol.atom(i).aromatic
}

fn all_single(mol: &Molecule, i: usize) -> bool {
    mol.neighbors(i).all(|(_, order)| order == BondOrder::Single)
}

/// All incident bonds single or aromatic (ring heteroatoms in aromatic rings).
fn all_saturated(mol: &Molecule, i: usize) -> bool {
    mol.neighbors(i)
        .all(|(_, order)| matches!(order, BondOrder::Single | BondOrder::Aromatic))
}

fn double_count(mol: &Molecule, i: usize) -> usize {
    mol.neighbors(i)
        .filter(|&(_, order)| order == BondOrder::Double)
        .count()
}

/// The neighbor double-bonded to `i` when there is exactly one and it is the
/// given element.
fn sole_double_to(mol: &Molecule, i: usize, element: Element) -> Option<usize> {
    let mut found = None;
    for (n, order) in mol.neighbors(i) {
        if order == BondOrder::Double {
            if found.is_some() || !is(mol, n, element) {
                return None;
            }
            found = Some(n);
        }
    }
    found
}

/// A terminal (degree-1) oxygen double-bonded to `i`.
fn terminal_double_o(mol: &Molecule, i: usize) -> Option<usize> {
    let o = sole_double_to(mol, i, Element::O)?;
    (mol.degree(o) == 1).then_some(o)
}

fn has_terminal_double_o(mol: &Molecule, i: usize) -> bool {
    mol.neighbors(i).any(|(n, order)| {
        order == BondOrder::Double && is(mol, n, Element::O) && mol.degree(n) == 1
    })
}

// --- carbonyl family ---

fn match_acid(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || aromatic(mol, i) || mol.in_ring(i) {
        return None;
    }
    let od = terminal_double_o(mol, i)?;
    let mut oh = None;
    for (n, order) in mol.neighbors(i) {
        if n == od {
            continue;
        }
        if order == BondOrder::Single
            && is(mol, n, Element::O)
            && mol.degree(n) == 1
            && h(mol, n) >= 1
        {
            if oh.is_some() {
                return None;
            }
            oh = Some(n);
        } else if !(order == BondOrder::Single && is(mol, n, Element::C)) {
            return None;
        }
    }
    let oh = oh?;
    Some(vec![i, od, oh])
}

fn match_ester(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || aromatic(mol, i) {
        return None;
    }
    let od = terminal_double_o(mol, i)?;
    let mut bridge = None;
    let mut carbon = false;
    for (n, order) in mol.neighbors(i) {
        if n == od {
            continue;
        }
        if order != BondOrder::Single {
            return None;
        }
        if is(mol, n, Element::O) && h(mol, n) == 0 && mol.degree(n) == 2 {
            if bridge.is_some() {
                return None;
            }
            bridge = Some(n);
        } else if is(mol, n, Element::C) {
            carbon = true;
        } else {
            return None;
        }
    }
    let bridge = bridge?;
    // Both sides carbon-substituted; formate esters are outside the catalog.
    if !carbon {
        return None;
    }
    let bridge_c = mol
        .neighbors(bridge)
        .any(|(n, order)| n != i && order == BondOrder::Single && is(mol, n, Element::C));
    if !bridge_c {
        return None;
    }
    Some(vec![i, od, bridge])
}

fn match_aldehyde(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || aromatic(mol, i) || mol.in_ring(i) || h(mol, i) != 1 {
        return None;
    }
    let od = terminal_double_o(mol, i)?;
    for (n, order) in mol.neighbors(i) {
        if n == od {
            continue;
        }
        if order != BondOrder::Single || !is(mol, n, Element::C) {
            return None;
        }
    }
    Some(vec![i, od])
}

fn match_ring_ketone(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || aromatic(mol, i) || !mol.in_ring(i) || h(mol, i) != 0 {
        return None;
    }
    let od = terminal_double_o(mol, i)?;
    for (n, order) in mol.neighbors(i) {
        if n == od {
            continue;
        }
        if order != BondOrder::Single || !is(mol, n, Element::C) {
            return None;
        }
    }
    Some(vec![i, od])
}

fn match_ketone(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || aromatic(mol, i) || mol.in_ring(i) || h(mol, i) != 0 {
        return None;
    }
    let od = terminal_double_o(mol, i)?;
    let mut carbons = 0;
    for (n, order) in mol.neighbors(i) {
        if n == od {
            continue;
        }
        if order != BondOrder::Single || !is(mol, n, Element::C) {
            return None;
        }
        carbons += 1;
    }
    (carbons == 2).then(|| vec![i, od])
}

fn match_carbonyl_o(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::O) || mol.degree(i) != 1 || h(mol, i) != 0 {
        return None;
    }
    let (partner, order) = mol.neighbors(i).next()?;
    if order != BondOrder::Double {
        return None;
    }
    // Carbonyl and nitro oxygens belong to their carbon/nitrogen groups.
    if is(mol, partner, Element::C) || is(mol, partner, Element::N) {
        return None;
    }
    Some(vec![i])
}

// --- nitrogen multiple bonds ---

fn match_nitro(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::N) || h(mol, i) != 0 || mol.degree(i) != 3 {
        return None;
    }
    let mut oxygens = Vec::new();
    let mut others = 0;
    for (n, order) in mol.neighbors(i) {
        let terminal_o = is(mol, n, Element::O)
            && mol.degree(n) == 1
            && h(mol, n) == 0
            && matches!(order, BondOrder::Single | BondOrder::Double);
        if terminal_o {
            oxygens.push(n);
        } else {
            others += 1;
        }
    }
    if oxygens.len() != 2 || others != 1 {
        return None;
    }
    let mut claim = vec![i];
    claim.extend(oxygens);
    Some(claim)
}

fn match_nitrile(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || h(mol, i) != 0 {
        return None;
    }
    let mut nitrogen = None;
    for (n, order) in mol.neighbors(i) {
        match order {
            BondOrder::Triple if is(mol, n, Element::N) && mol.degree(n) == 1 => {
                if nitrogen.is_some() {
                    return None;
                }
                nitrogen = Some(n);
            }
            BondOrder::Single | BondOrder::Aromatic => {}
            _ => return None,
        }
    }
    let nitrogen = nitrogen?;
    Some(vec![i, nitrogen])
}

// --- carbon skeleton ---

fn match_terminal_alkyne(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || h(mol, i) != 1 {
        return None;
    }
    let mut triple = false;
    for (n, order) in mol.neighbors(i) {
        match order {
            BondOrder::Triple if is(mol, n, Element::C) => triple = true,
            _ => return None,
        }
    }
    triple.then(|| vec![i])
}

fn match_internal_alkyne(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || h(mol, i) != 0 {
        return None;
    }
    let mut triple = false;
    for (n, order) in mol.neighbors(i) {
        match order {
            BondOrder::Triple if is(mol, n, Element::C) => {
                if triple {
                    return None;
                }
                triple = true;
            }
            BondOrder::Single => {}
            _ => return None,
        }
    }
    triple.then(|| vec![i])
}

fn match_allene(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || aromatic(mol, i) || h(mol, i) != 0 || mol.degree(i) != 2 {
        return None;
    }
    let all_double_c = mol
        .neighbors(i)
        .all(|(n, order)| order == BondOrder::Double && is(mol, n, Element::C));
    all_double_c.then(|| vec![i])
}

fn match_ring_alkene_ch(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || !mol.in_ring(i) || h(mol, i) != 1 {
        return None;
    }
    let unsaturated = aromatic(mol, i) || sole_double_to(mol, i, Element::C).is_some();
    unsaturated.then(|| vec![i])
}

fn match_ring_alkene_c(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || !mol.in_ring(i) || h(mol, i) != 0 {
        return None;
    }
    if has_terminal_double_o(mol, i) {
        return None;
    }
    let unsaturated = aromatic(mol, i) || sole_double_to(mol, i, Element::C).is_some();
    unsaturated.then(|| vec![i])
}

fn ring_alkane(mol: &Molecule, i: usize, hydrogens: u8) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::C)
        && mol.in_ring(i)
        && !aromatic(mol, i)
        && h(mol, i) == hydrogens
        && all_single(mol, i);
    matched.then(|| vec![i])
}

fn match_ring_ch2(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    ring_alkane(mol, i, 2)
}

fn match_ring_ch(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    ring_alkane(mol, i, 1)
}

fn match_ring_quat(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    ring_alkane(mol, i, 0)
}

fn chain_alkene(mol: &Molecule, i: usize, hydrogens: u8) -> Option<Vec<usize>> {
    if !is(mol, i, Element::C) || mol.in_ring(i) || aromatic(mol, i) || h(mol, i) != hydrogens {
        return None;
    }
    if double_count(mol, i) != 1 || sole_double_to(mol, i, Element::C).is_none() {
        return None;
    }
    let rest_single = mol
        .neighbors(i)
        .all(|(_, order)| matches!(order, BondOrder::Single | BondOrder::Double));
    rest_single.then(|| vec![i])
}

fn match_terminal_alkene(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkene(mol, i, 2)
}

fn match_internal_alkene(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkene(mol, i, 1)
}

fn match_trisub_alkene(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkene(mol, i, 0)
}

fn chain_alkane(mol: &Molecule, i: usize, hydrogens: u8) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::C)
        && !mol.in_ring(i)
        && !aromatic(mol, i)
        && h(mol, i) == hydrogens
        && mol.degree(i) == (4 - hydrogens) as usize
        && all_single(mol, i);
    matched.then(|| vec![i])
}

fn match_methyl(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkane(mol, i, 3)
}

fn match_methylene(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkane(mol, i, 2)
}

fn match_methine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkane(mol, i, 1)
}

fn match_quat(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    chain_alkane(mol, i, 0)
}

// --- oxygen ---

fn match_phenol_oh(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::O) || h(mol, i) != 1 || mol.degree(i) != 1 {
        return None;
    }
    let (partner, order) = mol.neighbors(i).next()?;
    let matched =
        order == BondOrder::Single && is(mol, partner, Element::C) && aromatic(mol, partner);
    matched.then(|| vec![i])
}

fn match_alcohol_oh(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::O) || h(mol, i) != 1 || mol.degree(i) != 1 {
        return None;
    }
    let (partner, order) = mol.neighbors(i).next()?;
    let matched = order == BondOrder::Single
        && is(mol, partner, Element::C)
        && !aromatic(mol, partner)
        && !has_terminal_double_o(mol, partner);
    matched.then(|| vec![i])
}

fn ether_like(mol: &Molecule, i: usize, in_ring: bool) -> Option<Vec<usize>> {
    if !is(mol, i, Element::O)
        || mol.in_ring(i) != in_ring
        || h(mol, i) != 0
        || mol.degree(i) != 2
        || !all_saturated(mol, i)
    {
        return None;
    }
    // An oxygen next to a carbonyl carbon is the ester bridge, not an ether.
    let beside_carbonyl = mol
        .neighbors(i)
        .any(|(n, _)| has_terminal_double_o(mol, n));
    (!beside_carbonyl).then(|| vec![i])
}

fn match_ring_ether(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    ether_like(mol, i, true)
}

fn match_ether(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    ether_like(mol, i, false)
}

// --- nitrogen ---

fn match_imine_nh(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::N) || h(mol, i) != 1 || mol.degree(i) != 1 {
        return None;
    }
    let (partner, order) = mol.neighbors(i).next()?;
    let matched = order == BondOrder::Double && is(mol, partner, Element::C);
    matched.then(|| vec![i])
}

fn match_primary_amine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::N)
        && !aromatic(mol, i)
        && h(mol, i) == 2
        && mol.degree(i) == 1
        && all_single(mol, i);
    matched.then(|| vec![i])
}

fn match_ring_secondary_amine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::N)
        && mol.in_ring(i)
        && h(mol, i) == 1
        && mol.degree(i) == 2
        && all_saturated(mol, i);
    matched.then(|| vec![i])
}

fn match_secondary_amine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::N)
        && !mol.in_ring(i)
        && !aromatic(mol, i)
        && h(mol, i) == 1
        && mol.degree(i) == 2
        && all_single(mol, i);
    matched.then(|| vec![i])
}

fn match_ring_imine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::N) || !mol.in_ring(i) || h(mol, i) != 0 || mol.degree(i) != 2 {
        return None;
    }
    let unsaturated = aromatic(mol, i) || sole_double_to(mol, i, Element::C).is_some();
    unsaturated.then(|| vec![i])
}

fn match_imine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    if !is(mol, i, Element::N) || mol.in_ring(i) || aromatic(mol, i) || h(mol, i) != 0 {
        return None;
    }
    if mol.degree(i) > 2 || sole_double_to(mol, i, Element::C).is_none() {
        return None;
    }
    let rest_single = mol
        .neighbors(i)
        .all(|(_, order)| matches!(order, BondOrder::Single | BondOrder::Double));
    rest_single.then(|| vec![i])
}

fn match_tertiary_amine(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::N)
        && !mol.in_ring(i)
        && !aromatic(mol, i)
        && h(mol, i) == 0
        && mol.degree(i) == 3
        && all_single(mol, i);
    matched.then(|| vec![i])
}

// --- sulfur ---

fn match_thiol(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched =
        is(mol, i, Element::S) && h(mol, i) == 1 && mol.degree(i) == 1 && all_single(mol, i);
    matched.then(|| vec![i])
}

fn match_ring_sulfide(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::S)
        && mol.in_ring(i)
        && h(mol, i) == 0
        && mol.degree(i) == 2
        && all_saturated(mol, i);
    matched.then(|| vec![i])
}

fn match_sulfide(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    let matched = is(mol, i, Element::S)
        && !mol.in_ring(i)
        && h(mol, i) == 0
        && mol.degree(i) == 2
        && all_single(mol, i);
    matched.then(|| vec![i])
}

// --- halogens ---

fn halogen(mol: &Molecule, i: usize, element: Element) -> Option<Vec<usize>> {
    let matched = is(mol, i, element)
        && h(mol, i) == 0
        && mol.degree(i) == 1
        && all_single(mol, i);
    matched.then(|| vec![i])
}

fn match_fluoro(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    halogen(mol, i, Element::F)
}

fn match_chloro(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    halogen(mol, i, Element::Cl)
}

fn match_bromo(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    halogen(mol, i, Element::Br)
}

fn match_iodo(mol: &Molecule, i: usize) -> Option<Vec<usize>> {
    halogen(mol, i, Element::I)
}
