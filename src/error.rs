use rustyms::error::CustomError as RustyMsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid peptide sequence: {0}")]
    InvalidPeptideSequence(RustyMsError),
    #[error("Cannot determine the monoisotopic mass of water")]
    WaterMass,
    #[error("No residue mass known for '{0}'")]
    UnknownResidue(char),
    #[error("Unknown ion series '{0}'")]
    UnknownIonSeries(char),
    #[error("Cannot parse ion label '{0}'")]
    InvalidIonLabel(String),
    #[error("Ion {ion} has ladder position {number}, outside 1..{length} for a peptide of length {length}")]
    LadderPositionOutOfRange {
        ion: String,
        number: usize,
        length: usize,
    },
    #[error("Coverage ({0}) and sequence ({1}) must have the same length")]
    CoverageShape(usize, usize),
    #[error("Ion {0} has charge 0")]
    InvalidCharge(String),
    #[error("Unknown export feature: {0}")]
    UnknownFeature(String),
}
