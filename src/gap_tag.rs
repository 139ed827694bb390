use ndarray::ArrayView1;

use crate::{
    error::Error,
    residue_masses::ResidueMasses,
    utils::{format_mass, residues_for_coverage},
};

fn flush_gap(tag: &mut String, gap_mass: &mut f64, decimals: usize) {
    if *gap_mass > 0.0 {
        tag.push('<');
        tag.push_str(&format_mass(*gap_mass, decimals));
        tag.push('>');
        *gap_mass = 0.0;
    }
}

/// Renders the sequence with covered residues written out and each maximal uncovered stretch
/// replaced by its summed residue mass, e.g. `PEP<214.13>DE`.
///
/// # Arguments
/// * `coverage` - Residue coverage, one entry per residue
/// * `sequence` - Peptide sequence, same length as `coverage`
/// * `masses` - Residue masses used for the gaps
/// * `decimals` - Fixed number of decimals of the gap masses
///
pub fn render_tag(
    coverage: ArrayView1<'_, bool>,
    sequence: &str,
    masses: &ResidueMasses,
    decimals: usize,
) -> Result<String, Error> {
    let residues = residues_for_coverage(coverage.len(), sequence)?;
    let mut tag = String::with_capacity(sequence.len());
    let mut gap_mass = 0.0;

    for (&covered, residue) in coverage.iter().zip(residues) {
        if covered {
            flush_gap(&mut tag, &mut gap_mass, decimals);
            tag.push(residue);
        } else {
            gap_mass += masses.mass(residue)?;
        }
    }
    flush_gap(&mut tag, &mut gap_mass, decimals);

    Ok(tag)
}
