use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Terminus a fragment ladder grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// N-terminal ladders (a, b, c)
    Forward,
    /// C-terminal ladders (x, y, z)
    Reverse,
}

impl Direction {
    /// Maps a 0-based ladder index (`number - 1`) onto a 0-based residue index counted from the
    /// N-terminus.
    ///
    /// # Arguments
    /// * `ladder_index` - Ladder index, must be smaller than `length`
    /// * `length` - Length of the peptide sequence
    ///
    pub fn residue_index(&self, ladder_index: usize, length: usize) -> usize {
        match self {
            Direction::Forward => ladder_index,
            Direction::Reverse => length - 1 - ladder_index,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "N-terminal"),
            Direction::Reverse => write!(f, "C-terminal"),
        }
    }
}

/// The six backbone fragment ion series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IonSeries {
    A,
    B,
    C,
    X,
    Y,
    Z,
}

impl IonSeries {
    pub const ALL: [IonSeries; 6] = [
        IonSeries::A,
        IonSeries::B,
        IonSeries::C,
        IonSeries::X,
        IonSeries::Y,
        IonSeries::Z,
    ];

    pub fn direction(&self) -> Direction {
        match self {
            IonSeries::A | IonSeries::B | IonSeries::C => Direction::Forward,
            IonSeries::X | IonSeries::Y | IonSeries::Z => Direction::Reverse,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            IonSeries::A => 'a',
            IonSeries::B => 'b',
            IonSeries::C => 'c',
            IonSeries::X => 'x',
            IonSeries::Y => 'y',
            IonSeries::Z => 'z',
        }
    }
}

impl TryFrom<char> for IonSeries {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a' => Ok(IonSeries::A),
            'b' => Ok(IonSeries::B),
            'c' => Ok(IonSeries::C),
            'x' => Ok(IonSeries::X),
            'y' => Ok(IonSeries::Y),
            'z' => Ok(IonSeries::Z),
            _ => Err(Error::UnknownIonSeries(value)),
        }
    }
}

impl Display for IonSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NeutralLoss {
    Water,
    Ammonia,
    PhosphoricAcid,
    Other(String),
}

/// Names of other losses are bracketed when they contain a `-`, e.g. `[C2H5-SH]`.
impl Display for NeutralLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NeutralLoss::Water => write!(f, "H2O"),
            NeutralLoss::Ammonia => write!(f, "NH3"),
            NeutralLoss::PhosphoricAcid => write!(f, "H3PO4"),
            NeutralLoss::Other(name) if name.contains('-') => write!(f, "[{name}]"),
            NeutralLoss::Other(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for NeutralLoss {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .strip_prefix('[')
            .and_then(|name| name.strip_suffix(']'))
            .unwrap_or(s);
        if name.is_empty() || name.contains(|c| c == '[' || c == ']') {
            return Err(Error::InvalidIonLabel(s.to_string()));
        }
        match name {
            "H2O" => Ok(NeutralLoss::Water),
            "NH3" => Ok(NeutralLoss::Ammonia),
            "H3PO4" => Ok(NeutralLoss::PhosphoricAcid),
            other => Ok(NeutralLoss::Other(other.to_string())),
        }
    }
}

/// Splits a label at every `-` outside of brackets.
fn split_losses(label: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut bracketed = false;
    for (idx, c) in label.char_indices() {
        match c {
            '[' => bracketed = true,
            ']' => bracketed = false,
            '-' if !bracketed => {
                parts.push(&label[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&label[start..]);
    parts
}

/// What an annotated peak was explained by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ion {
    /// Backbone fragment, `number` residues away from the origin terminus of its series
    Fragment { series: IonSeries, number: usize },
    Precursor,
    /// Immonium ion of the given residue
    Immonium(char),
    /// Reporter ion (e.g. TMT/iTRAQ channel)
    Reporter(String),
}

impl Display for Ion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ion::Fragment { series, number } => write!(f, "{series}{number}"),
            Ion::Precursor => write!(f, "p"),
            Ion::Immonium(residue) => write!(f, "I{residue}"),
            Ion::Reporter(name) => write!(f, "r{name}"),
        }
    }
}

impl FromStr for Ion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars
            .next()
            .ok_or_else(|| Error::InvalidIonLabel(s.to_string()))?;
        let rest = chars.as_str();

        match (first, rest) {
            ('p', "") => Ok(Ion::Precursor),
            ('I', residue) if residue.chars().count() == 1 => {
                Ok(Ion::Immonium(residue.chars().next().unwrap_or_default()))
            }
            ('r', name) if !name.is_empty() => Ok(Ion::Reporter(name.to_string())),
            (series, number) => {
                let series = IonSeries::try_from(series)?;
                let number = number
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidIonLabel(s.to_string()))?;
                Ok(Ion::Fragment { series, number })
            }
        }
    }
}

/// A peak of the spectrum explained by an ion of the candidate peptide.
#[derive(Debug, Clone, PartialEq)]
pub struct IonMatch {
    pub ion: Ion,
    pub charge: usize,
    pub neutral_losses: Vec<NeutralLoss>,
    pub mz: f64,
    pub intensity: f64,
}

impl IonMatch {
    pub fn new(ion: Ion, charge: usize, mz: f64, intensity: f64) -> Self {
        Self {
            ion,
            charge,
            neutral_losses: Vec::new(),
            mz,
            intensity,
        }
    }

    /// Fragment ion match without peak information.
    pub fn fragment(series: IonSeries, number: usize, charge: usize) -> Self {
        Self::new(Ion::Fragment { series, number }, charge, 0.0, 0.0)
    }

    pub fn with_neutral_loss(mut self, loss: NeutralLoss) -> Self {
        self.neutral_losses.push(loss);
        self
    }

    pub fn has_neutral_loss(&self) -> bool {
        !self.neutral_losses.is_empty()
    }

    /// Series and ladder number if this is a backbone fragment
    pub fn fragment_position(&self) -> Option<(IonSeries, usize)> {
        match self.ion {
            Ion::Fragment { series, number } => Some((series, number)),
            _ => None,
        }
    }
}

impl Display for IonMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ion)?;
        if self.charge != 1 {
            write!(f, "^{}", self.charge)?;
        }
        for loss in self.neutral_losses.iter() {
            write!(f, "-{loss}")?;
        }
        Ok(())
    }
}

fn parse_charge(charge: &str, label: &str) -> Result<usize, Error> {
    charge
        .parse::<usize>()
        .map_err(|_| Error::InvalidIonLabel(label.to_string()))
}

/// Parses compact labels like `b2`, `y7^2` or `y5^2-NH3-H2O`. The m/z and intensity are set to 0.
///
/// Reporter labels (`r<name>[^<charge>]`) have no loss part, their name runs up to the charge and
/// may contain `-`, e.g. `rTMT-126`.
///
impl FromStr for IonMatch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();

        if let Some(reporter) = label.strip_prefix('r') {
            let (name, charge) = match reporter.rsplit_once('^') {
                Some((name, charge)) => (name, parse_charge(charge, s)?),
                None => (reporter, 1),
            };
            if name.is_empty() {
                return Err(Error::InvalidIonLabel(s.to_string()));
            }
            return Ok(IonMatch::new(Ion::Reporter(name.to_string()), charge, 0.0, 0.0));
        }

        let parts = split_losses(label);
        // a split always yields at least one part
        let ion_chunk = parts.first().copied().unwrap_or_default();

        let (ion_chunk, charge) = match ion_chunk.split_once('^') {
            Some((ion_chunk, charge)) => (ion_chunk, parse_charge(charge, s)?),
            None => (ion_chunk, 1),
        };

        let mut ion_match = IonMatch::new(ion_chunk.parse()?, charge, 0.0, 0.0);
        for loss in parts.iter().skip(1) {
            ion_match = ion_match.with_neutral_loss(loss.parse()?);
        }

        Ok(ion_match)
    }
}
