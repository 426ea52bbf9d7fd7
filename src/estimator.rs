//! The Joback property estimator.
//!
//! Construction decomposes the structure into functional groups once; every
//! property query is then a pure sum over the group contributions plugged
//! into the fixed Joback correlation. All estimates are in SI units.

use crate::error::Error;
use crate::fragment::{self, MatchOptions};
use crate::groups::{self, GroupCoeffs, GroupCounts, GroupTable};
use crate::model::Molecule;
use crate::smiles;

/// Structure notation accepted by [`Joback::new`]: a parsed graph or SMILES
/// text.
#[derive(Debug, Clone, Copy)]
pub enum StructureInput<'a> {
    Molecule(&'a Molecule),
    Smiles(&'a str),
}

impl<'a> From<&'a Molecule> for StructureInput<'a> {
    fn from(mol: &'a Molecule) -> Self {
        StructureInput::Molecule(mol)
    }
}

impl<'a> From<&'a str> for StructureInput<'a> {
    fn from(smiles: &'a str) -> Self {
        StructureInput::Smiles(smiles)
    }
}

/// Group-contribution estimator for one compound.
#[derive(Debug, Clone)]
pub struct Joback {
    notation: String,
    counts: GroupCounts,
    atom_count: usize,
    exact_mass: f64,
    table: GroupTable,
}

impl Joback {
    /// Build an estimator from a structure, using the default coefficient
    /// table. Fails if the SMILES does not parse or the structure cannot be
    /// fully decomposed into catalog groups.
    pub fn new<'a>(input: impl Into<StructureInput<'a>>) -> Result<Self, Error> {
        Self::with_coefficients(input, groups::default_coefficients())
    }

    /// Same as [`Joback::new`] with a caller-supplied coefficient table.
    pub fn with_coefficients<'a>(
        input: impl Into<StructureInput<'a>>,
        table: &GroupTable,
    ) -> Result<Self, Error> {
        let parsed;
        let (mol, notation) = match input.into() {
            StructureInput::Molecule(mol) => (mol, mol.formula()),
            StructureInput::Smiles(text) => {
                parsed = smiles::parse(text).map_err(|source| Error::Smiles {
                    smiles: text.to_string(),
                    source,
                })?;
                (&parsed, text.to_string())
            }
        };

        let frag = fragment::fragment(mol, &MatchOptions::default());
        if !frag.complete {
            return Err(Error::Fragmentation {
                structure: notation,
                detail: frag.detail,
            });
        }

        Ok(Self {
            notation,
            counts: frag.counts,
            atom_count: frag.atom_count,
            exact_mass: mol.exact_mass(),
            table: table.clone(),
        })
    }

    /// The input notation: the SMILES text, or the Hill formula for a
    /// pre-parsed molecule.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    pub fn counts(&self) -> &GroupCounts {
        &self.counts
    }

    /// Total atom count including hydrogens.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// Monoisotopic molecular mass (g/mol).
    pub fn exact_mass(&self) -> f64 {
        self.exact_mass
    }

    fn sum(
        &self,
        property: &'static str,
        pick: impl Fn(&GroupCoeffs) -> Option<f64>,
    ) -> Result<f64, Error> {
        let mut total = 0.0;
        for (group, count) in self.counts.iter() {
            let coeff = pick(self.table.get(group))
                .ok_or(Error::MissingContribution { group, property })?;
            total += coeff * count as f64;
        }
        Ok(total)
    }

    /// Normal boiling point (K).
    pub fn tb(&self) -> Result<f64, Error> {
        Ok(198.2 + self.sum("tb", |c| c.tb)?)
    }

    /// Melting point (K).
    pub fn tm(&self) -> Result<f64, Error> {
        Ok(122.5 + self.sum("tm", |c| c.tm)?)
    }

    /// Critical temperature (K). The correlation scales a boiling point;
    /// `tb` replaces the internal estimate when supplied.
    pub fn tc(&self, tb: Option<f64>) -> Result<f64, Error> {
        let s = self.sum("tc", |c| c.tc)?;
        let tb = match tb {
            Some(value) => value,
            None => self.tb()?,
        };
        Ok(tb / (0.584 + 0.965 * s - s * s))
    }

    /// Critical pressure (Pa). Uses the total atom count, hydrogens
    /// included.
    pub fn pc(&self) -> Result<f64, Error> {
        let s = self.sum("pc", |c| c.pc)?;
        let base = 0.113 + 0.0032 * self.atom_count as f64 - s;
        Ok(1e5 / (base * base))
    }

    /// Critical volume (m³/mol).
    pub fn vc(&self) -> Result<f64, Error> {
        Ok((17.5 + self.sum("vc", |c| c.vc)?) * 1e-6)
    }

    /// Ideal-gas enthalpy of formation at 298.15 K (J/mol).
    pub fn hf(&self) -> Result<f64, Error> {
        Ok((68.29 + self.sum("hform", |c| c.hform)?) * 1000.0)
    }

    /// Ideal-gas Gibbs energy of formation at 298.15 K (J/mol).
    pub fn gf(&self) -> Result<f64, Error> {
        Ok((53.88 + self.sum("gform", |c| c.gform)?) * 1000.0)
    }

    /// Enthalpy of fusion (J/mol).
    pub fn hfus(&self) -> Result<f64, Error> {
        Ok((-0.88 + self.sum("hfus", |c| c.hfus)?) * 1000.0)
    }

    /// Enthalpy of vaporization at the boiling point (J/mol).
    pub fn hvap(&self) -> Result<f64, Error> {
        Ok((15.3 + self.sum("hvap", |c| c.hvap)?) * 1000.0)
    }

    /// Ideal-gas heat capacity polynomial coefficients `[a, b, c, d]` for
    /// `Cp = a + bT + cT² + dT³` (J/(mol·K)).
    pub fn cpig_coeffs(&self) -> Result<[f64; 4], Error> {
        Ok([
            self.sum("cpa", |c| c.cpa)? - 37.93,
            self.sum("cpb", |c| c.cpb)? + 0.210,
            self.sum("cpc", |c| c.cpc)? - 3.91e-4,
            self.sum("cpd", |c| c.cpd)? + 2.06e-7,
        ])
    }

    /// Ideal-gas heat capacity at `t` K (J/(mol·K)).
    pub fn cpig(&self, t: f64) -> Result<f64, Error> {
        let [a, b, c, d] = self.cpig_coeffs()?;
        Ok(a + t * (b + t * (c + t * d)))
    }

    /// Liquid viscosity coefficients `[a, b]` for `μ = MW·exp(a/T + b)`.
    pub fn mul_coeffs(&self) -> Result<[f64; 2], Error> {
        Ok([
            self.sum("mul", |c| c.mua)? - 597.82,
            self.sum("mul", |c| c.mub)? - 11.202,
        ])
    }

    /// Liquid viscosity at `t` K (Pa·s), from the monoisotopic mass.
    pub fn mul(&self, t: f64) -> Result<f64, Error> {
        let [a, b] = self.mul_coeffs()?;
        Ok(self.exact_mass * (a / t + b).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::JobackGroup;

    fn assert_close(actual: f64, expected: f64) {
        let rel = ((actual - expected) / expected).abs();
        assert!(
            rel < 1e-9,
            "actual {actual} differs from expected {expected} (rel {rel:e})"
        );
    }

    fn acetone() -> Joback {
        Joback::new("CC(=O)C").unwrap()
    }

    #[test]
    fn acetone_decomposition() {
        let est = acetone();
        assert_eq!(est.counts().get(JobackGroup::Methyl), 2);
        assert_eq!(est.counts().get(JobackGroup::Ketone), 1);
        assert_eq!(est.atom_count(), 10);
        assert_close(est.exact_mass(), 58.041_864_8);
    }

    #[test]
    fn acetone_temperatures() {
        let est = acetone();
        assert_close(est.tb().unwrap(), 322.11);
        assert_close(est.tm().unwrap(), 173.5);
        assert_close(est.tc(None).unwrap(), 500.5590049525365);
        // Supplying the self-estimated Tb must change nothing.
        assert_close(est.tc(Some(322.11)).unwrap(), 500.5590049525365);
    }

    #[test]
    fn acetone_critical_properties() {
        let est = acetone();
        assert_close(est.pc().unwrap(), 4802499.604994407);
        assert_close(est.vc().unwrap(), 2.095e-4);
    }

    #[test]
    fn acetone_formation_and_phase_change() {
        let est = acetone();
        assert_close(est.hf().unwrap(), -217830.0);
        assert_close(est.gf().unwrap(), -154540.0);
        assert_close(est.hfus().unwrap(), 5125.0);
        assert_close(est.hvap().unwrap(), 29018.0);
    }

    #[test]
    fn acetone_heat_capacity() {
        let est = acetone();
        let [a, b, c, d] = est.cpig_coeffs().unwrap();
        assert_close(a, 7.52);
        assert_close(b, 0.26084);
        assert_close(c, -1.207e-4);
        assert_close(d, 1.546e-8);
        assert_close(est.cpig(300.0).unwrap(), 75.32642);
    }

    #[test]
    fn acetone_viscosity() {
        let est = acetone();
        let [a, b] = est.mul_coeffs().unwrap();
        assert_close(a, 839.11);
        assert_close(b, -14.99);
        assert_close(est.mul(300.0).unwrap(), 2.940378347162687e-4);
    }

    #[test]
    fn molecule_input_matches_smiles_input() {
        let mol = crate::smiles::parse("CC(=O)C").unwrap();
        let from_mol = Joback::new(&mol).unwrap();
        let from_text = acetone();
        assert_eq!(from_mol.tb().unwrap(), from_text.tb().unwrap());
        assert_eq!(from_mol.notation(), "C3H6O");
        assert_eq!(from_text.notation(), "CC(=O)C");
    }

    #[test]
    fn queries_are_idempotent() {
        let est = acetone();
        assert_eq!(est.tb().unwrap(), est.tb().unwrap());
        assert_eq!(est.mul(300.0).unwrap(), est.mul(300.0).unwrap());
    }

    #[test]
    fn incomplete_decomposition_is_an_error() {
        let err = Joback::new("C").unwrap_err();
        assert!(matches!(err, Error::Fragmentation { ref structure, .. } if structure == "C"));
    }

    #[test]
    fn bad_smiles_is_an_error() {
        let err = Joback::new("C1CC").unwrap_err();
        assert!(matches!(err, Error::Smiles { .. }));
    }

    #[test]
    fn missing_viscosity_contribution() {
        // =C< has no viscosity coefficients in the published table.
        let est = Joback::new("C=C(C)C").unwrap();
        let err = est.mul_coeffs().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingContribution {
                group: JobackGroup::TrisubAlkene,
                property: "mul",
            }
        ));
        assert!(est.tb().is_ok());
    }
}
