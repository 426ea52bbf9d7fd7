//! Joback group catalog: the 41 functional groups and their contribution
//! coefficients.
//!
//! The coefficient table ships embedded as TOML and is parsed once into a
//! process-wide immutable table. A custom table can be supplied to
//! [`load_coefficients`] for alternative parameterizations.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::Error;

/// The 41 functional groups of the Joback method, in the order of the
/// published table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobackGroup {
    Methyl,
    Methylene,
    Methine,
    QuatCarbon,
    TerminalAlkene,
    InternalAlkene,
    TrisubAlkene,
    CumulatedAlkene,
    TerminalAlkyne,
    InternalAlkyne,
    RingMethylene,
    RingMethine,
    RingQuatCarbon,
    RingAlkeneCh,
    RingAlkeneC,
    Fluoro,
    Chloro,
    Bromo,
    Iodo,
    AlcoholOh,
    PhenolOh,
    Ether,
    RingEther,
    Ketone,
    RingKetone,
    Aldehyde,
    CarboxylicAcid,
    Ester,
    CarbonylO,
    PrimaryAmine,
    SecondaryAmine,
    RingSecondaryAmine,
    TertiaryAmine,
    Imine,
    RingImine,
    ImineNh,
    Nitrile,
    Nitro,
    Thiol,
    Sulfide,
    RingSulfide,
}

pub const GROUP_COUNT: usize = 41;

impl JobackGroup {
    pub const ALL: [JobackGroup; GROUP_COUNT] = [
        JobackGroup::Methyl,
        JobackGroup::Methylene,
        JobackGroup::Methine,
        JobackGroup::QuatCarbon,
        JobackGroup::TerminalAlkene,
        JobackGroup::InternalAlkene,
        JobackGroup::TrisubAlkene,
        JobackGroup::CumulatedAlkene,
        JobackGroup::TerminalAlkyne,
        JobackGroup::InternalAlkyne,
        JobackGroup::RingMethylene,
        JobackGroup::RingMethine,
        JobackGroup::RingQuatCarbon,
        JobackGroup::RingAlkeneCh,
        JobackGroup::RingAlkeneC,
        JobackGroup::Fluoro,
        JobackGroup::Chloro,
        JobackGroup::Bromo,
        JobackGroup::Iodo,
        JobackGroup::AlcoholOh,
        JobackGroup::PhenolOh,
        JobackGroup::Ether,
        JobackGroup::RingEther,
        JobackGroup::Ketone,
        JobackGroup::RingKetone,
        JobackGroup::Aldehyde,
        JobackGroup::CarboxylicAcid,
        JobackGroup::Ester,
        JobackGroup::CarbonylO,
        JobackGroup::PrimaryAmine,
        JobackGroup::SecondaryAmine,
        JobackGroup::RingSecondaryAmine,
        JobackGroup::TertiaryAmine,
        JobackGroup::Imine,
        JobackGroup::RingImine,
        JobackGroup::ImineNh,
        JobackGroup::Nitrile,
        JobackGroup::Nitro,
        JobackGroup::Thiol,
        JobackGroup::Sulfide,
        JobackGroup::RingSulfide,
    ];

    /// Label as written in the Joback & Reid paper.
    pub fn label(&self) -> &'static str {
        match self {
            JobackGroup::Methyl => "-CH3",
            JobackGroup::Methylene => ">CH2",
            JobackGroup::Methine => ">CH-",
            JobackGroup::QuatCarbon => ">C<",
            JobackGroup::TerminalAlkene => "=CH2",
            JobackGroup::InternalAlkene => "=CH-",
            JobackGroup::TrisubAlkene => "=C<",
            JobackGroup::CumulatedAlkene => "=C=",
            JobackGroup::TerminalAlkyne => "#CH",
            JobackGroup::InternalAlkyne => "#C-",
            JobackGroup::RingMethylene => "ring -CH2-",
            JobackGroup::RingMethine => "ring >CH-",
            JobackGroup::RingQuatCarbon => "ring >C<",
            JobackGroup::RingAlkeneCh => "ring =CH-",
            JobackGroup::RingAlkeneC => "ring =C<",
            JobackGroup::Fluoro => "-F",
            JobackGroup::Chloro => "-Cl",
            JobackGroup::Bromo => "-Br",
            JobackGroup::Iodo => "-I",
            JobackGroup::AlcoholOh => "-OH (alcohol)",
            JobackGroup::PhenolOh => "-OH (phenol)",
            JobackGroup::Ether => "-O- (non-ring)",
            JobackGroup::RingEther => "-O- (ring)",
            JobackGroup::Ketone => ">C=O (non-ring)",
            JobackGroup::RingKetone => ">C=O (ring)",
            JobackGroup::Aldehyde => "O=CH- (aldehyde)",
            JobackGroup::CarboxylicAcid => "-COOH (acid)",
            JobackGroup::Ester => "-COO- (ester)",
            JobackGroup::CarbonylO => "=O (other)",
            JobackGroup::PrimaryAmine => "-NH2",
            JobackGroup::SecondaryAmine => ">NH (non-ring)",
            JobackGroup::RingSecondaryAmine => ">NH (ring)",
            JobackGroup::TertiaryAmine => ">N- (non-ring)",
            JobackGroup::Imine => "-N= (non-ring)",
            JobackGroup::RingImine => "-N= (ring)",
            JobackGroup::ImineNh => "=NH",
            JobackGroup::Nitrile => "-CN",
            JobackGroup::Nitro => "-NO2",
            JobackGroup::Thiol => "-SH",
            JobackGroup::Sulfide => "-S- (non-ring)",
            JobackGroup::RingSulfide => "-S- (ring)",
        }
    }

    /// Stable snake-case key used in the TOML coefficient table.
    pub fn key(&self) -> &'static str {
        match self {
            JobackGroup::Methyl => "methyl",
            JobackGroup::Methylene => "methylene",
            JobackGroup::Methine => "methine",
            JobackGroup::QuatCarbon => "quat_carbon",
            JobackGroup::TerminalAlkene => "terminal_alkene",
            JobackGroup::InternalAlkene => "internal_alkene",
            JobackGroup::TrisubAlkene => "trisub_alkene",
            JobackGroup::CumulatedAlkene => "cumulated_alkene",
            JobackGroup::TerminalAlkyne => "terminal_alkyne",
            JobackGroup::InternalAlkyne => "internal_alkyne",
            JobackGroup::RingMethylene => "ring_methylene",
            JobackGroup::RingMethine => "ring_methine",
            JobackGroup::RingQuatCarbon => "ring_quat_carbon",
            JobackGroup::RingAlkeneCh => "ring_alkene_ch",
            JobackGroup::RingAlkeneC => "ring_alkene_c",
            JobackGroup::Fluoro => "fluoro",
            JobackGroup::Chloro => "chloro",
            JobackGroup::Bromo => "bromo",
            JobackGroup::Iodo => "iodo",
            JobackGroup::AlcoholOh => "alcohol_oh",
            JobackGroup::PhenolOh => "phenol_oh",
            JobackGroup::Ether => "ether",
            JobackGroup::RingEther => "ring_ether",
            JobackGroup::Ketone => "ketone",
            JobackGroup::RingKetone => "ring_ketone",
            JobackGroup::Aldehyde => "aldehyde",
            JobackGroup::CarboxylicAcid => "carboxylic_acid",
            JobackGroup::Ester => "ester",
            JobackGroup::CarbonylO => "carbonyl_o",
            JobackGroup::PrimaryAmine => "primary_amine",
            JobackGroup::SecondaryAmine => "secondary_amine",
            JobackGroup::RingSecondaryAmine => "ring_secondary_amine",
            JobackGroup::TertiaryAmine => "tertiary_amine",
            JobackGroup::Imine => "imine",
            JobackGroup::RingImine => "ring_imine",
            JobackGroup::ImineNh => "imine_nh",
            JobackGroup::Nitrile => "nitrile",
            JobackGroup::Nitro => "nitro",
            JobackGroup::Thiol => "thiol",
            JobackGroup::Sulfide => "sulfide",
            JobackGroup::RingSulfide => "ring_sulfide",
        }
    }

    pub fn from_key(key: &str) -> Option<JobackGroup> {
        JobackGroup::ALL.iter().copied().find(|g| g.key() == key)
    }
}

impl fmt::Display for JobackGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contribution coefficients for one group. The published table has gaps;
/// absent coefficients are `None` and surface as
/// [`Error::MissingContribution`] when a property needs them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupCoeffs {
    /// Critical temperature (dimensionless).
    pub tc: Option<f64>,
    /// Critical pressure (bar⁻¹).
    pub pc: Option<f64>,
    /// Critical volume (cm³/mol).
    pub vc: Option<f64>,
    /// Normal boiling point (K).
    pub tb: Option<f64>,
    /// Melting point (K).
    pub tm: Option<f64>,
    /// Enthalpy of formation (kJ/mol).
    pub hform: Option<f64>,
    /// Gibbs energy of formation (kJ/mol).
    pub gform: Option<f64>,
    /// Ideal-gas heat capacity polynomial coefficients.
    pub cpa: Option<f64>,
    pub cpb: Option<f64>,
    pub cpc: Option<f64>,
    pub cpd: Option<f64>,
    /// Enthalpy of fusion (kJ/mol).
    pub hfus: Option<f64>,
    /// Enthalpy of vaporization at Tb (kJ/mol).
    pub hvap: Option<f64>,
    /// Liquid viscosity coefficients.
    pub mua: Option<f64>,
    pub mub: Option<f64>,
}

/// Complete coefficient table, one record per group.
#[derive(Debug, Clone)]
pub struct GroupTable {
    coeffs: Vec<GroupCoeffs>,
}

impl GroupTable {
    pub fn get(&self, group: JobackGroup) -> &GroupCoeffs {
        &self.coeffs[group as usize]
    }
}

#[derive(Debug, Deserialize)]
struct TableFile {
    groups: BTreeMap<String, GroupCoeffs>,
}

/// Parse a coefficient table. `None` loads the embedded default table;
/// `Some(toml)` parses a caller-supplied table, which must cover all 41
/// groups.
pub fn load_coefficients(custom: Option<&str>) -> Result<GroupTable, Error> {
    let text = custom.unwrap_or(DEFAULT_TABLE_TOML);
    let file: TableFile = toml::from_str(text)?;
    for key in file.groups.keys() {
        if JobackGroup::from_key(key).is_none() {
            return Err(Error::UnknownGroup(key.clone()));
        }
    }
    let mut coeffs = Vec::with_capacity(GROUP_COUNT);
    for group in JobackGroup::ALL {
        match file.groups.get(group.key()) {
            Some(record) => coeffs.push(record.clone()),
            None => return Err(Error::MissingGroup(group.key().to_string())),
        }
    }
    Ok(GroupTable { coeffs })
}

const DEFAULT_TABLE_TOML: &str = include_str!("../resources/joback.toml");

/// The embedded default table, parsed on first use.
pub fn default_coefficients() -> &'static GroupTable {
    static TABLE: OnceLock<GroupTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        load_coefficients(None)
            .expect("failed to parse embedded coefficient table. This is a library bug.")
    })
}

/// Multiset of matched groups, ordered by table position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCounts(BTreeMap<JobackGroup, u32>);

impl GroupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, group: JobackGroup) {
        *self.0.entry(group).or_insert(0) += 1;
    }

    pub fn get(&self, group: JobackGroup) -> u32 {
        self.0.get(&group).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobackGroup, u32)> + '_ {
        self.0.iter().map(|(&g, &c)| (g, c))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of group occurrences.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl fmt::Display for GroupCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (group, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", group.label(), count)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_covers_all_groups() {
        let table = default_coefficients();
        for group in JobackGroup::ALL {
            // Every group has at least a boiling-point contribution.
            assert!(
                table.get(group).tb.is_some(),
                "no tb coefficient for {}",
                group.key()
            );
        }
    }

    #[test]
    fn known_coefficient_values() {
        let table = default_coefficients();
        let methyl = table.get(JobackGroup::Methyl);
        assert_eq!(methyl.tc, Some(0.0141));
        assert_eq!(methyl.tb, Some(23.58));
        assert_eq!(methyl.mua, Some(548.29));
        let ketone = table.get(JobackGroup::Ketone);
        assert_eq!(ketone.pc, Some(0.0031));
        assert_eq!(ketone.hform, Some(-133.22));
    }

    #[test]
    fn published_gaps_are_absent() {
        let table = default_coefficients();
        assert_eq!(table.get(JobackGroup::CumulatedAlkene).mua, None);
        assert_eq!(table.get(JobackGroup::ImineNh).tc, None);
        assert_eq!(table.get(JobackGroup::RingKetone).hfus, None);
    }

    #[test]
    fn custom_table_must_be_complete() {
        let err = load_coefficients(Some("[groups.methyl]\ntb = 23.58\n")).unwrap_err();
        assert!(matches!(err, Error::MissingGroup(_)));
    }

    #[test]
    fn unknown_group_key_is_rejected() {
        let mut toml_text = String::new();
        for group in JobackGroup::ALL {
            toml_text.push_str(&format!("[groups.{}]\ntb = 1.0\n", group.key()));
        }
        toml_text.push_str("[groups.bogus]\ntb = 1.0\n");
        let err = load_coefficients(Some(&toml_text)).unwrap_err();
        assert!(matches!(err, Error::UnknownGroup(ref k) if k == "bogus"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = load_coefficients(Some("not toml at [[")).unwrap_err();
        assert!(matches!(err, Error::CoefficientParse(_)));
    }

    #[test]
    fn counts_display() {
        let mut counts = GroupCounts::new();
        counts.increment(JobackGroup::Ketone);
        counts.increment(JobackGroup::Methyl);
        counts.increment(JobackGroup::Methyl);
        assert_eq!(counts.get(JobackGroup::Methyl), 2);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.to_string(), "{-CH3: 2, >C=O (non-ring): 1}");
    }

    #[test]
    fn key_round_trips() {
        for group in JobackGroup::ALL {
            assert_eq!(JobackGroup::from_key(group.key()), Some(group));
        }
        assert_eq!(JobackGroup::from_key("bogus"), None);
    }
}
