/// Default number of decimals used for the masses in gap tags, e.g. `<113.08>`.
pub const DEFAULT_GAP_MASS_DECIMALS: usize = 2;

pub struct Configuration {
    /// Only fragments with this charge contribute to the single series runs.
    pub single_series_charge: usize,
    /// Whether fragments with neutral losses contribute to the single series runs.
    pub single_series_neutral_losses: bool,
    /// Fixed number of decimals for gap masses.
    pub gap_mass_decimals: usize,
}

impl Configuration {
    pub fn new(
        single_series_charge: usize,
        single_series_neutral_losses: bool,
        gap_mass_decimals: usize,
    ) -> Self {
        Self {
            single_series_charge,
            single_series_neutral_losses,
            gap_mass_decimals,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(1, false, DEFAULT_GAP_MASS_DECIMALS)
    }
}
