use std::collections::HashMap;

use rustyms::{
    CompoundPeptidoformIon,
    Element::{H as Hydrogen, O as Oxygen},
};
use tracing::debug;

use crate::error::Error;

/// One letter codes of the proteinogenic amino acids, including selenocysteine and pyrrolysine.
pub const PROTEINOGENIC_RESIDUES: &str = "ACDEFGHIKLMNOPQRSTUVWY";

/// Lookup table for monoisotopic residue masses (amino acid mass minus water), keyed by one letter code.
///
#[derive(Debug, Clone, Default)]
pub struct ResidueMasses {
    masses: HashMap<char, f64>,
}

impl ResidueMasses {
    /// Creates an empty table. Use [`ResidueMasses::with_residue`] to fill it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the table of proteinogenic residues from rustyms' elemental compositions.
    ///
    pub fn monoisotopic() -> Result<Self, Error> {
        let water = Self::water_mass()?;

        let mut masses = HashMap::with_capacity(PROTEINOGENIC_RESIDUES.len());
        for residue in PROTEINOGENIC_RESIDUES.chars() {
            let peptide = CompoundPeptidoformIon::pro_forma(&residue.to_string(), None)
                .map_err(Error::InvalidPeptideSequence)?;

            // A peptide of a single residue is the residue plus water (N-terminal H, C-terminal OH)
            let peptide_mass = match peptide.formulas().mass_bounds().into_option() {
                Some((min, _)) => min.monoisotopic_mass().value,
                None => return Err(Error::UnknownResidue(residue)),
            };
            masses.insert(residue, peptide_mass - water);
        }
        debug!("Built monoisotopic mass table for {} residues", masses.len());

        Ok(Self { masses })
    }

    fn water_mass() -> Result<f64, Error> {
        let hydrogen = Hydrogen.mass(None).ok_or(Error::WaterMass)?.value;
        let oxygen = Oxygen.mass(None).ok_or(Error::WaterMass)?.value;
        Ok(2.0 * hydrogen + oxygen)
    }

    /// Adds or replaces a residue, e.g. to apply a fixed modification.
    ///
    /// # Arguments
    /// * `residue` - One letter code
    /// * `mass` - Monoisotopic residue mass in Dalton
    ///
    pub fn with_residue(mut self, residue: char, mass: f64) -> Self {
        self.masses.insert(residue, mass);
        self
    }

    pub fn mass(&self, residue: char) -> Result<f64, Error> {
        self.masses
            .get(&residue)
            .copied()
            .ok_or(Error::UnknownResidue(residue))
    }

    /// Sum of the residue masses of the sequence (no terminal groups).
    pub fn sequence_mass(&self, sequence: &str) -> Result<f64, Error> {
        sequence.chars().map(|residue| self.mass(residue)).sum()
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl FromIterator<(char, f64)> for ResidueMasses {
    fn from_iter<T: IntoIterator<Item = (char, f64)>>(iter: T) -> Self {
        Self {
            masses: iter.into_iter().collect(),
        }
    }
}
