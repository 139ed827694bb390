use ndarray::Array1;
use tracing::trace;

use crate::{
    configuration::Configuration,
    coverage::{merged_ladders, SequenceCoverage},
    error::Error,
    gap_tag::render_tag,
    ion_match::{IonMatch, IonSeries},
    longest_run::{best_single_series, longest_run},
    residue_masses::ResidueMasses,
};

/// Fragment ion coverage of a single peptide-spectrum match.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    pub sequence: String,
    /// Merged residue coverage of the forward and reverse ladders
    pub covered: Array1<bool>,
    pub coverage_percentage: f64,
    pub longest_annotated_tag: String,
    pub longest_single_series_tag: String,
    /// Series of `longest_single_series_tag`, `None` if it is empty
    pub longest_single_series: Option<IonSeries>,
    pub gap_annotated_tag: String,
    /// Number of backbone fragment matches that went into the coverage
    pub annotated_fragments: usize,
}

pub struct FragmentCoverage<'a> {
    config: &'a Configuration,
    masses: &'a ResidueMasses,
}

impl FragmentCoverage<'_> {
    /// Creates a new FragmentCoverage instance. Both arguments are only read, so one instance can
    /// be shared between threads.
    ///
    /// Arguments:
    /// * `config` - Filters for the single series tag and gap mass precision
    /// * `masses` - Residue masses for the gap tag
    ///
    pub fn new<'a>(config: &'a Configuration, masses: &'a ResidueMasses) -> FragmentCoverage<'a> {
        FragmentCoverage { config, masses }
    }

    /// Calculates coverage and tags of a peptide from its annotated ions.
    ///
    /// # Arguments
    /// * `sequence` - Peptide sequence in one letter codes
    /// * `matches` - Ions annotated in the spectrum, fragment ladder numbers must lie within `1..sequence.len()`
    ///
    pub fn annotate(&self, sequence: &str, matches: &[IonMatch]) -> Result<CoverageResult, Error> {
        let length = sequence.chars().count();

        // validates every ion, the single series ladders below rely on it
        let (forward, reverse) = merged_ladders(length, matches)?;
        let coverage = SequenceCoverage::from_ladders(&forward, &reverse);

        let longest_annotated_tag = longest_run(coverage.covered().view(), sequence)?;
        let (longest_single_series, longest_single_series_tag) =
            best_single_series(matches, sequence, self.config)?;
        let gap_annotated_tag = render_tag(
            coverage.covered().view(),
            sequence,
            self.masses,
            self.config.gap_mass_decimals,
        )?;
        let annotated_fragments = matches
            .iter()
            .filter(|ion_match| ion_match.fragment_position().is_some())
            .count();

        let coverage_percentage = coverage.percentage();
        trace!(
            "{sequence}: {annotated_fragments} fragments, {coverage_percentage:.1}% covered, tag {gap_annotated_tag}"
        );

        Ok(CoverageResult {
            sequence: sequence.to_string(),
            covered: coverage.into_covered(),
            coverage_percentage,
            longest_annotated_tag,
            longest_single_series_tag,
            longest_single_series,
            gap_annotated_tag,
            annotated_fragments,
        })
    }
}
