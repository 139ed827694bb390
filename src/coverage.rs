use ndarray::{s, Array1, ArrayView1};
use tracing::{trace, warn};

use crate::{
    configuration::Configuration,
    error::Error,
    ion_match::{Direction, IonMatch, IonSeries},
    utils::percentage,
};

/// Confirmed backbone bonds of one ladder, stored in residue coordinates (0 = N-terminal residue).
///
/// For a forward ladder `n` marks the last residue of the fragment (index `n - 1`), for a reverse
/// ladder the first residue of the fragment (index `length - n`).
///
#[derive(Debug, Clone, PartialEq)]
pub struct LadderCoverage {
    direction: Direction,
    bonds: Array1<bool>,
}

impl LadderCoverage {
    pub fn new(direction: Direction, length: usize) -> Self {
        Self {
            direction,
            bonds: Array1::from_elem(length, false),
        }
    }

    /// Marks the bond confirmed by the fragment with the given ladder number.
    ///
    /// # Arguments
    /// * `number` - Ladder number, within `1..length`
    ///
    pub fn confirm(&mut self, number: usize) -> Result<(), Error> {
        let length = self.bonds.len();
        if number == 0 || number >= length {
            return Err(Error::LadderPositionOutOfRange {
                ion: format!("{} fragment {number}", self.direction),
                number,
                length,
            });
        }
        let index = self.direction.residue_index(number - 1, length);
        self.bonds[index] = true;
        Ok(())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Bond confirmations in residue coordinates.
    pub fn bonds(&self) -> ArrayView1<'_, bool> {
        self.bonds.view()
    }

    /// Bond confirmations in ladder order, i.e. index `n - 1` holds fragment `n`.
    pub fn ladder_order(&self) -> ArrayView1<'_, bool> {
        match self.direction {
            Direction::Forward => self.bonds.view(),
            Direction::Reverse => self.bonds.slice(s![..;-1]),
        }
    }

    /// Residues bracketed by two consecutive confirmed bonds, walking away from the ladder's
    /// terminus. The terminus itself counts as a confirmed bond.
    ///
    pub fn corroborated(&self) -> Array1<bool> {
        let length = self.bonds.len();
        let mut covered = Array1::from_elem(length, false);

        let mut previous = true;
        for ladder_index in 0..length {
            let index = self.direction.residue_index(ladder_index, length);
            let current = self.bonds[index];
            covered[index] = current && previous;
            previous = current;
        }

        covered
    }
}

/// Checks that an ion can be placed on a peptide of the given length.
fn check_ion(length: usize, ion_match: &IonMatch) -> Result<(), Error> {
    if ion_match.charge == 0 {
        warn!("Rejecting {ion_match}: charge 0");
        return Err(Error::InvalidCharge(ion_match.to_string()));
    }
    if let Some((_, number)) = ion_match.fragment_position() {
        if number == 0 || number >= length {
            warn!("Rejecting {ion_match}: outside the ladder of a {length} residue peptide");
            return Err(Error::LadderPositionOutOfRange {
                ion: ion_match.to_string(),
                number,
                length,
            });
        }
    }
    Ok(())
}

/// Checks that every ion can be placed on a peptide of the given length.
///
/// # Arguments
/// * `length` - Number of residues of the peptide
/// * `matches` - Annotated ions
///
pub fn validate_matches(length: usize, matches: &[IonMatch]) -> Result<(), Error> {
    matches
        .iter()
        .try_for_each(|ion_match| check_ion(length, ion_match))
}

/// Builds the forward (a, b, c) and reverse (x, y, z) ladders from all fragment ions,
/// regardless of charge and neutral losses. Every ion is validated on the way.
///
pub fn merged_ladders(
    length: usize,
    matches: &[IonMatch],
) -> Result<(LadderCoverage, LadderCoverage), Error> {
    let mut forward = LadderCoverage::new(Direction::Forward, length);
    let mut reverse = LadderCoverage::new(Direction::Reverse, length);

    for ion_match in matches {
        check_ion(length, ion_match)?;
        match ion_match.fragment_position() {
            Some((series, number)) => match series.direction() {
                Direction::Forward => forward.confirm(number)?,
                Direction::Reverse => reverse.confirm(number)?,
            },
            None => trace!("Skipping {ion_match}: not a backbone fragment"),
        }
    }

    Ok((forward, reverse))
}

/// Builds the ladder of a single series, only using fragments of the configured charge and, unless
/// configured otherwise, without neutral losses. Only the fragments passing these filters are
/// checked, use [`validate_matches`] to check all ions.
///
pub fn single_series_ladder(
    series: IonSeries,
    length: usize,
    matches: &[IonMatch],
    config: &Configuration,
) -> Result<LadderCoverage, Error> {
    let mut ladder = LadderCoverage::new(series.direction(), length);
    matches
        .iter()
        .filter(|ion_match| ion_match.charge == config.single_series_charge)
        .filter(|ion_match| config.single_series_neutral_losses || !ion_match.has_neutral_loss())
        .filter_map(IonMatch::fragment_position)
        .filter(|(ion_series, _)| *ion_series == series)
        .try_for_each(|(_, number)| ladder.confirm(number))?;

    Ok(ladder)
}

/// Residue coverage of a peptide, merged over the forward and reverse ladders.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceCoverage {
    covered: Array1<bool>,
}

impl SequenceCoverage {
    pub fn from_ladders(forward: &LadderCoverage, reverse: &LadderCoverage) -> Self {
        Self {
            covered: &forward.corroborated() | &reverse.corroborated(),
        }
    }

    pub fn from_matches(length: usize, matches: &[IonMatch]) -> Result<Self, Error> {
        let (forward, reverse) = merged_ladders(length, matches)?;
        Ok(Self::from_ladders(&forward, &reverse))
    }

    pub fn covered(&self) -> &Array1<bool> {
        &self.covered
    }

    pub fn into_covered(self) -> Array1<bool> {
        self.covered
    }

    pub fn covered_count(&self) -> usize {
        self.covered.iter().filter(|&&covered| covered).count()
    }

    pub fn len(&self) -> usize {
        self.covered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }

    /// Percentage of covered residues, 0 for an empty sequence.
    pub fn percentage(&self) -> f64 {
        percentage(self.covered_count(), self.len())
    }
}
