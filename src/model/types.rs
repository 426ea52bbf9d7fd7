use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(pub(crate) String);

/// Elements that occur in organic compounds and the SMILES organic subset.
///
/// This is deliberately not the whole periodic table: the group catalog only
/// covers C/H/O/N/S/halogen chemistry, and compounds containing anything
/// outside this set fail at parse time with a [`ParseElementError`], which
/// batch validation records per compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    H,
    B,
    C,
    N,
    O,
    F,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    K,
    Ca,
    Zn,
    Ge,
    As,
    Se,
    Br,
    Sn,
    Sb,
    Te,
    I,
    Hg,
    Pb,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Zn => "Zn",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Sn => "Sn",
            Element::Sb => "Sb",
            Element::Te => "Te",
            Element::I => "I",
            Element::Hg => "Hg",
            Element::Pb => "Pb",
        }
    }

    /// Standard atomic weight (g/mol), conventional IUPAC values.
    pub fn atomic_mass(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::B => 10.81,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::Na => 22.99,
            Element::Mg => 24.305,
            Element::Al => 26.982,
            Element::Si => 28.085,
            Element::P => 30.974,
            Element::S => 32.06,
            Element::Cl => 35.45,
            Element::K => 39.098,
            Element::Ca => 40.078,
            Element::Zn => 65.38,
            Element::Ge => 72.63,
            Element::As => 74.922,
            Element::Se => 78.971,
            Element::Br => 79.904,
            Element::Sn => 118.71,
            Element::Sb => 121.76,
            Element::Te => 127.6,
            Element::I => 126.9,
            Element::Hg => 200.59,
            Element::Pb => 207.2,
        }
    }

    /// Mass of the most abundant isotope (Da).
    ///
    /// The liquid-viscosity correlation is parameterized against the exact
    /// (monoisotopic) molecular weight, not the standard atomic weight.
    pub fn monoisotopic_mass(&self) -> f64 {
        match self {
            Element::H => 1.00782503207,
            Element::B => 11.0093054,
            Element::C => 12.0,
            Element::N => 14.0030740048,
            Element::O => 15.99491461956,
            Element::F => 18.99840322,
            Element::Na => 22.9897692809,
            Element::Mg => 23.9850417,
            Element::Al => 26.98153863,
            Element::Si => 27.9769265325,
            Element::P => 30.97376163,
            Element::S => 31.972071,
            Element::Cl => 34.96885268,
            Element::K => 38.96370668,
            Element::Ca => 39.96259098,
            Element::Zn => 63.9291422,
            Element::Ge => 73.9211778,
            Element::As => 74.9215965,
            Element::Se => 79.9165213,
            Element::Br => 78.9183371,
            Element::Sn => 119.9021947,
            Element::Sb => 120.9038157,
            Element::Te => 129.9062244,
            Element::I => 126.904473,
            Element::Hg => 201.970643,
            Element::Pb => 207.9766521,
        }
    }

    /// Allowed valence states for implicit-hydrogen assignment, smallest
    /// first. Elements outside the SMILES organic subset get no implicit
    /// hydrogens.
    pub fn default_valences(&self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::B => &[3],
            Element::C => &[4],
            Element::N => &[3, 5],
            Element::O => &[2],
            Element::P => &[3, 5],
            Element::S => &[2, 4, 6],
            Element::F | Element::Cl | Element::Br | Element::I => &[1],
            _ => &[],
        }
    }

}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "B" => Ok(Element::B),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "F" => Ok(Element::F),
            "Na" => Ok(Element::Na),
            "Mg" => Ok(Element::Mg),
            "Al" => Ok(Element::Al),
            "Si" => Ok(Element::Si),
            "P" => Ok(Element::P),
            "S" => Ok(Element::S),
            "Cl" => Ok(Element::Cl),
            "K" => Ok(Element::K),
            "Ca" => Ok(Element::Ca),
            "Zn" => Ok(Element::Zn),
            "Ge" => Ok(Element::Ge),
            "As" => Ok(Element::As),
            "Se" => Ok(Element::Se),
            "Br" => Ok(Element::Br),
            "Sn" => Ok(Element::Sn),
            "Sb" => Ok(Element::Sb),
            "Te" => Ok(Element::Te),
            "I" => Ok(Element::I),
            "Hg" => Ok(Element::Hg),
            "Pb" => Ok(Element::Pb),
            other => Err(ParseElementError(other.to_string())),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribution to the valence sum used for implicit-hydrogen
    /// assignment. Aromatic bonds contribute 1; the extra aromatic electron
    /// is accounted for once per aromatic atom.
    pub fn valence_contribution(&self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BondOrder::Single => "single",
            BondOrder::Double => "double",
            BondOrder::Triple => "triple",
            BondOrder::Aromatic => "aromatic",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trips() {
        for elem in [Element::C, Element::Cl, Element::Br, Element::Na] {
            assert_eq!(elem.symbol().parse::<Element>().unwrap(), elem);
        }
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let err = "Fe".parse::<Element>().unwrap_err();
        assert!(err.to_string().contains("Fe"));
    }

    #[test]
    fn monoisotopic_carbon_is_exactly_twelve() {
        assert_eq!(Element::C.monoisotopic_mass(), 12.0);
    }

    #[test]
    fn valence_contributions() {
        assert_eq!(BondOrder::Single.valence_contribution(), 1);
        assert_eq!(BondOrder::Double.valence_contribution(), 2);
        assert_eq!(BondOrder::Triple.valence_contribution(), 3);
        assert_eq!(BondOrder::Aromatic.valence_contribution(), 1);
    }
}
