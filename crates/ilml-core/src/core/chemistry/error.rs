use thiserror::Error;

/// Raised by a [`Toolkit`](super::toolkit::Toolkit) when a notation string is not
/// syntactically valid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid SMILES '{smiles}': {reason}")]
pub struct ParseError {
    pub smiles: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(smiles: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            smiles: smiles.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidChargeError {
    #[error("ions must have a non-zero charge")]
    Neutral,

    #[error("cations must have a positive charge, got {charge:+}")]
    NotPositive { charge: i32 },

    #[error("anions must have a negative charge, got {charge:+}")]
    NotNegative { charge: i32 },

    #[error("ionic liquid fragments cannot be paired as cation and anion, got {left:+} and {right:+}")]
    Unpairable { left: i32, right: i32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChemistryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    InvalidCharge(#[from] InvalidChargeError),

    #[error("Ionic liquid SMILES '{smiles}' must contain exactly 2 fragments, found {found}")]
    FragmentCount { smiles: String, found: usize },
}
