use ndarray::ArrayView1;

use crate::{
    configuration::Configuration,
    coverage::{single_series_ladder, validate_matches, LadderCoverage},
    error::Error,
    ion_match::{Direction, IonMatch, IonSeries},
    utils::residues_for_coverage,
};

/// Keeps `current` if it is strictly longer than `longest`, then clears `current`.
fn keep_longest(longest: &mut String, current: &mut String) {
    if current.len() > longest.len() {
        *longest = std::mem::take(current);
    } else {
        current.clear();
    }
}

/// Longest stretch of consecutive covered residues, read N- to C-terminal.
/// The first stretch wins on ties. Empty if nothing is covered.
///
/// # Arguments
/// * `coverage` - Residue coverage, one entry per residue
/// * `sequence` - Peptide sequence, same length as `coverage`
///
pub fn longest_run(coverage: ArrayView1<'_, bool>, sequence: &str) -> Result<String, Error> {
    let residues = residues_for_coverage(coverage.len(), sequence)?;
    let mut longest = String::new();
    let mut current = String::new();

    for (&covered, residue) in coverage.iter().zip(residues) {
        if covered {
            current.push(residue);
        } else {
            keep_longest(&mut longest, &mut current);
        }
    }
    keep_longest(&mut longest, &mut current);

    Ok(longest)
}

/// Longest stretch of corroborated residues within one ladder.
///
/// The ladder is walked away from its terminus, so reverse ladders collect their residues
/// C-terminus first. Those stretches are flipped to read N- to C-terminal like the sequence.
///
/// # Arguments
/// * `ladder` - Ladder of a single ion series
/// * `sequence` - Peptide sequence, same length as the ladder
///
pub fn longest_ladder_run(ladder: &LadderCoverage, sequence: &str) -> Result<String, Error> {
    let residues = residues_for_coverage(ladder.len(), sequence)?;
    let covered = ladder.corroborated();
    let length = residues.len();

    let orient = |run: &mut String| {
        if ladder.direction() == Direction::Reverse {
            *run = run.chars().rev().collect();
        }
    };

    let mut longest = String::new();
    let mut current = String::new();
    for ladder_index in 0..length {
        let index = ladder.direction().residue_index(ladder_index, length);
        if covered[index] {
            current.push(residues[index]);
        } else {
            orient(&mut current);
            keep_longest(&mut longest, &mut current);
        }
    }
    orient(&mut current);
    keep_longest(&mut longest, &mut current);

    Ok(longest)
}

/// Longest single series stretch over all six series, see [`longest_ladder_run`]. Series are
/// tried in a, b, c, x, y, z order and a later series only wins if its stretch is longer.
///
/// # Arguments
/// * `matches` - Annotated ions, all of them are validated
/// * `sequence` - Peptide sequence
/// * `config` - Charge and neutral loss filters
///
pub fn longest_single_series_tag(
    matches: &[IonMatch],
    sequence: &str,
    config: &Configuration,
) -> Result<(Option<IonSeries>, String), Error> {
    validate_matches(sequence.chars().count(), matches)?;
    best_single_series(matches, sequence, config)
}

/// [`longest_single_series_tag`] for ions that were already validated.
pub(crate) fn best_single_series(
    matches: &[IonMatch],
    sequence: &str,
    config: &Configuration,
) -> Result<(Option<IonSeries>, String), Error> {
    let length = sequence.chars().count();

    let mut best_series = None;
    let mut best_tag = String::new();
    for series in IonSeries::ALL {
        let ladder = single_series_ladder(series, length, matches, config)?;
        let tag = longest_ladder_run(&ladder, sequence)?;
        if tag.len() > best_tag.len() {
            best_series = Some(series);
            best_tag = tag;
        }
    }

    Ok((best_series, best_tag))
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;

    use super::*;

    fn parse(labels: &[&str]) -> Vec<IonMatch> {
        labels.iter().map(|label| label.parse().unwrap()).collect()
    }

    #[test]
    fn test_longest_run() {
        let coverage = Array1::from(vec![true, true, false, true, true, true, false]);
        assert_eq!(longest_run(coverage.view(), "PEPTIDE").unwrap(), "TID");

        let coverage = Array1::from(vec![false, true, true, true, true, false, false]);
        assert_eq!(longest_run(coverage.view(), "PEPTIDE").unwrap(), "EPTI");

        // run reaching the C-terminus
        let coverage = Array1::from(vec![false, false, false, false, true, true, true]);
        assert_eq!(longest_run(coverage.view(), "PEPTIDE").unwrap(), "IDE");
    }

    #[test]
    fn test_longest_run_first_wins_ties() {
        let coverage = Array1::from(vec![true, true, false, true, true, false, false]);
        assert_eq!(longest_run(coverage.view(), "PEPTIDE").unwrap(), "PE");
    }

    #[test]
    fn test_longest_run_nothing_covered() {
        let coverage = Array1::from_elem(7, false);
        assert_eq!(longest_run(coverage.view(), "PEPTIDE").unwrap(), "");
        assert_eq!(longest_run(Array1::from_elem(0, false).view(), "").unwrap(), "");
    }

    #[test]
    fn test_forward_ladder_run() {
        let config = Configuration::default();
        let matches = parse(&["b2", "b3", "b4", "b5", "b6"]);
        let ladder = single_series_ladder(IonSeries::B, 7, &matches, &config).unwrap();
        assert_eq!(longest_ladder_run(&ladder, "PEPTIDE").unwrap(), "PTID");
    }

    #[test]
    fn test_reverse_ladder_run_reads_n_to_c() {
        let config = Configuration::default();
        // y1..y4 of PEPTIDE cover TIDE
        let matches = parse(&["y1", "y2", "y3", "y4"]);
        let ladder = single_series_ladder(IonSeries::Y, 7, &matches, &config).unwrap();
        assert_eq!(longest_ladder_run(&ladder, "PEPTIDE").unwrap(), "TIDE");

        // z2, z3, z4 bracket I and T, x6 belongs to another ladder
        let matches = parse(&["z2", "z3", "z4", "x6"]);
        let ladder = single_series_ladder(IonSeries::Z, 7, &matches, &config).unwrap();
        assert_eq!(longest_ladder_run(&ladder, "PEPTIDE").unwrap(), "TI");
    }

    #[test]
    fn test_single_series_tag() {
        let config = Configuration::default();
        let matches = parse(&["b2", "b3", "b4", "y1", "y2", "y3", "y4"]);
        let (series, tag) = longest_single_series_tag(&matches, "PEPTIDE", &config).unwrap();
        assert_eq!(series, Some(IonSeries::Y));
        assert_eq!(tag, "TIDE");

        // equal length, the earlier series is kept
        let matches = parse(&["b2", "b3", "b4", "y2", "y3", "y4"]);
        let (series, tag) = longest_single_series_tag(&matches, "PEPTIDE", &config).unwrap();
        assert_eq!(series, Some(IonSeries::B));
        assert_eq!(tag, "PT");
    }

    #[test]
    fn test_single_series_ignores_other_charges() {
        let config = Configuration::default();
        let matches = parse(&["b2^2", "b3^2", "b4^2", "y2^2", "y3^2"]);
        let (series, tag) = longest_single_series_tag(&matches, "PEPTIDE", &config).unwrap();
        assert_eq!(series, None);
        assert_eq!(tag, "");
    }

    #[test]
    fn test_single_series_rejects_invalid_ions() {
        let config = Configuration::default();
        let matches = parse(&["b2", "y7"]);
        assert!(longest_single_series_tag(&matches, "PEPTIDE", &config).is_err());

        // filtered out by charge, still not placeable on a 7-mer
        let matches = parse(&["b2", "b3", "y9^2"]);
        assert!(matches!(
            longest_single_series_tag(&matches, "PEPTIDE", &config),
            Err(Error::LadderPositionOutOfRange { number: 9, .. })
        ));
        let matches = parse(&["b2", "b3", "y2^0"]);
        assert!(matches!(
            longest_single_series_tag(&matches, "PEPTIDE", &config),
            Err(Error::InvalidCharge(_))
        ));
    }

    #[test]
    fn test_longest_run_coverage_must_match_sequence() {
        assert!(matches!(
            longest_run(Array1::from_elem(7, true).view(), "PEP"),
            Err(Error::CoverageShape(7, 3))
        ));
        assert!(matches!(
            longest_run(Array1::from_elem(3, true).view(), "PEPTIDE"),
            Err(Error::CoverageShape(3, 7))
        ));
    }

    #[test]
    fn test_ladder_run_must_match_sequence() {
        let config = Configuration::default();
        // y1..y3 on a 7 residue ladder cover IDE, not residues of a shorter sequence
        let matches = parse(&["y1", "y2", "y3"]);
        let ladder = single_series_ladder(IonSeries::Y, 7, &matches, &config).unwrap();
        assert_eq!(longest_ladder_run(&ladder, "PEPTIDE").unwrap(), "IDE");
        assert!(matches!(
            longest_ladder_run(&ladder, "PEPTI"),
            Err(Error::CoverageShape(7, 5))
        ));
        assert!(matches!(
            longest_ladder_run(&ladder, "PEPTIDEK"),
            Err(Error::CoverageShape(7, 8))
        ));
    }
}
