use crate::{error::Error, fragment_coverage::CoverageResult};

/// Renders one report column from a coverage result.
pub type FeatureFn = fn(&CoverageResult) -> String;

/// Named report features in registration order.
///
pub struct FeatureRegistry {
    features: Vec<(&'static str, FeatureFn)>,
}

fn sequence_coverage(result: &CoverageResult) -> String {
    result.coverage_percentage.to_string()
}

fn longest_annotated(result: &CoverageResult) -> String {
    result.longest_annotated_tag.clone()
}

fn longest_annotated_single_series(result: &CoverageResult) -> String {
    result.longest_single_series_tag.clone()
}

fn amino_acids_annotated(result: &CoverageResult) -> String {
    result.gap_annotated_tag.clone()
}

fn annotated_fragment_ions(result: &CoverageResult) -> String {
    result.annotated_fragments.to_string()
}

impl FeatureRegistry {
    pub fn empty() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Adds a feature. A feature with the same name is replaced in place.
    pub fn register(&mut self, name: &'static str, feature: FeatureFn) -> &mut Self {
        match self
            .features
            .iter_mut()
            .find(|(registered, _)| *registered == name)
        {
            Some(entry) => entry.1 = feature,
            None => self.features.push((name, feature)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Result<FeatureFn, Error> {
        self.features
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, feature)| *feature)
            .ok_or_else(|| Error::UnknownFeature(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.features.iter().map(|(name, _)| *name)
    }

    /// Renders a single feature.
    pub fn render_feature(&self, name: &str, result: &CoverageResult) -> Result<String, Error> {
        let feature = self.get(name)?;
        Ok(feature(result))
    }

    /// Renders all features in registration order.
    pub fn render(&self, result: &CoverageResult) -> Vec<(&'static str, String)> {
        self.features
            .iter()
            .map(|(name, feature)| (*name, feature(result)))
            .collect()
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("sequence_coverage", sequence_coverage)
            .register("longest_amino_acid_sequence_annotated", longest_annotated)
            .register(
                "longest_amino_acid_sequence_annotated_single_serie",
                longest_annotated_single_series,
            )
            .register("amino_acids_annotated", amino_acids_annotated)
            .register("annotated_fragment_ions", annotated_fragment_ions);
        registry
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        configuration::Configuration, fragment_coverage::FragmentCoverage, ion_match::IonMatch,
        residue_masses::ResidueMasses,
    };

    use super::*;

    fn result() -> CoverageResult {
        let config = Configuration::default();
        let masses = ResidueMasses::monoisotopic().unwrap();
        let matches: Vec<IonMatch> = ["b2", "b3", "b4", "b5", "b6", "p^2"]
            .iter()
            .map(|label| label.parse().unwrap())
            .collect();
        FragmentCoverage::new(&config, &masses)
            .annotate("PEPTIDE", &matches)
            .unwrap()
    }

    #[test]
    fn test_default_features() {
        let registry = FeatureRegistry::default();
        let rendered = registry.render(&result());
        assert_eq!(
            rendered,
            vec![
                ("sequence_coverage", (100.0 * 4.0 / 7.0_f64).to_string()),
                ("longest_amino_acid_sequence_annotated", "PTID".to_string()),
                (
                    "longest_amino_acid_sequence_annotated_single_serie",
                    "PTID".to_string()
                ),
                ("amino_acids_annotated", "<226.10>PTID<129.04>".to_string()),
                ("annotated_fragment_ions", "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_feature() {
        let registry = FeatureRegistry::default();
        assert!(matches!(
            registry.render_feature("spectrum_title", &result()),
            Err(Error::UnknownFeature(_))
        ));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = FeatureRegistry::default();
        registry.register("sequence_coverage", |result| {
            format!("{:.1}", result.coverage_percentage)
        });
        registry.register("covered_residues", |result| {
            result.covered.iter().filter(|&&covered| covered).count().to_string()
        });

        assert_eq!(
            registry.render_feature("sequence_coverage", &result()).unwrap(),
            "57.1"
        );
        assert_eq!(
            registry.render_feature("covered_residues", &result()).unwrap(),
            "4"
        );
        assert_eq!(registry.names().count(), 6);
        assert_eq!(registry.names().next(), Some("sequence_coverage"));
    }
}
