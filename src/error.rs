use thiserror::Error;

use crate::groups::JobackGroup;

/// Errors from estimator construction and coefficient-table loading.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse SMILES '{smiles}': {source}")]
    Smiles {
        smiles: String,
        #[source]
        source: crate::smiles::Error,
    },

    #[error("could not decompose '{structure}' into functional groups: {detail}")]
    Fragmentation { structure: String, detail: String },

    #[error("group '{group}' has no {property} contribution coefficient")]
    MissingContribution {
        group: JobackGroup,
        property: &'static str,
    },

    #[error("failed to parse coefficient table: {0}")]
    CoefficientParse(#[from] toml::de::Error),

    #[error("coefficient table is missing group '{0}'")]
    MissingGroup(String),

    #[error("coefficient table names unknown group '{0}'")]
    UnknownGroup(String),
}
