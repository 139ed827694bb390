pub mod configuration;
/// Merged and single series residue coverage
pub mod coverage;
pub mod error;
/// Named report columns
pub mod features;
pub mod fragment_coverage;
/// Sequence with uncovered stretches collapsed to their mass
pub mod gap_tag;
pub mod ion_match;
pub mod longest_run;
pub mod residue_masses;
// Various utilities
pub mod utils;
