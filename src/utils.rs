use crate::error::Error;

/// Share of `part` in `total` in percent. Returns 0 if `total` is 0.
///
/// # Arguments
/// * `part` - Number of counted elements
/// * `total` - Number of elements
///
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * part as f64 / total as f64
}

/// Formats a mass with a fixed number of decimals. Independent of the locale.
///
/// # Arguments
/// * `mass` - Mass in Dalton
/// * `decimals` - Number of decimals
///
pub fn format_mass(mass: f64, decimals: usize) -> String {
    format!("{mass:.decimals$}")
}

/// Residues of the sequence, if there is exactly one coverage entry per residue.
///
/// # Arguments
/// * `coverage_length` - Number of coverage entries
/// * `sequence` - Peptide sequence
///
pub fn residues_for_coverage(coverage_length: usize, sequence: &str) -> Result<Vec<char>, Error> {
    let residues: Vec<char> = sequence.chars().collect();
    if residues.len() != coverage_length {
        return Err(Error::CoverageShape(coverage_length, residues.len()));
    }
    Ok(residues)
}
