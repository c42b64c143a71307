use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

/// All common tempo changes between two consecutive notes.
///
/// When classifying a ratio, earlier entries win ties.
pub static COMMON_RHYTHMS: [RhythmRatio; 9] = [
    RhythmRatio::new(1, 1, 0.0),
    RhythmRatio::new(2, 1, 0.3),
    RhythmRatio::new(1, 2, 0.5),
    RhythmRatio::new(3, 1, 0.3),
    RhythmRatio::new(1, 3, 0.35),
    RhythmRatio::new(3, 2, 0.6),
    RhythmRatio::new(2, 3, 0.4),
    RhythmRatio::new(5, 4, 0.5),
    RhythmRatio::new(4, 5, 0.7),
];

/// The ratio between a note's delta time and its predecessor's delta time,
/// alongside the difficulty of playing that tempo change.
///
/// Two ratios are considered equal if their numerator and denominator match.
#[derive(Copy, Clone, Debug)]
pub struct RhythmRatio {
    numerator: u32,
    denominator: u32,
    difficulty: f64,
}

impl RhythmRatio {
    const fn new(numerator: u32, denominator: u32, difficulty: f64) -> Self {
        Self {
            numerator,
            denominator,
            difficulty,
        }
    }

    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    pub const fn difficulty(&self) -> f64 {
        self.difficulty
    }
}

impl PartialEq for RhythmRatio {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for RhythmRatio {}

impl Hash for RhythmRatio {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl Display for RhythmRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The classified tempo change of a note.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rhythm {
    /// An entry of [`COMMON_RHYTHMS`].
    Common(&'static RhythmRatio),
    /// The ratio is too far off from every common rhythm.
    Irregular,
}

impl Rhythm {
    /// Difficulty of an irregular rhythm; harder than any common rhythm.
    pub const IRREGULAR_DIFFICULTY: f64 = 0.8;

    /// Maximum relative deviation from the closest common rhythm.
    pub const RATIO_TOLERANCE: f64 = 0.25;

    /// Classify the given delta time ratio.
    ///
    /// Non-positive or non-finite ratios are irregular.
    pub fn closest(ratio: f64) -> Self {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Self::Irregular;
        }

        // `min_by` returns the first of equally close entries
        let closest = COMMON_RHYTHMS.iter().min_by(|a, b| {
            let a = (a.ratio() - ratio).abs();
            let b = (b.ratio() - ratio).abs();

            a.total_cmp(&b)
        });

        match closest {
            Some(rhythm) if (ratio / rhythm.ratio() - 1.0).abs() <= Self::RATIO_TOLERANCE => {
                Self::Common(rhythm)
            }
            Some(_) | None => Self::Irregular,
        }
    }

    pub const fn difficulty(self) -> f64 {
        match self {
            Self::Common(rhythm) => rhythm.difficulty,
            Self::Irregular => Self::IRREGULAR_DIFFICULTY,
        }
    }

    /// The ratio value of a common rhythm.
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::Common(rhythm) => Some(rhythm.ratio()),
            Self::Irregular => None,
        }
    }

    pub const fn is_irregular(self) -> bool {
        matches!(self, Self::Irregular)
    }
}

impl Default for Rhythm {
    fn default() -> Self {
        Self::Common(&COMMON_RHYTHMS[0])
    }
}

impl Display for Rhythm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Common(rhythm) => Display::fmt(rhythm, f),
            Self::Irregular => f.write_str("irregular"),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn exact_ratios() {
        for rhythm in COMMON_RHYTHMS.iter() {
            assert_eq!(Rhythm::closest(rhythm.ratio()), Rhythm::Common(rhythm));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Rhythm::closest(1.0).to_string(), "1/1");
        assert_eq!(Rhythm::closest(0.5).to_string(), "1/2");
        assert_eq!(Rhythm::closest(1.52).to_string(), "3/2");
        assert_eq!(Rhythm::Irregular.to_string(), "irregular");
    }

    #[test]
    fn tie_goes_to_earlier_entry() {
        // Equally close to 2/1 and 3/1
        assert_eq!(Rhythm::closest(2.5).to_string(), "2/1");
    }

    #[test]
    fn out_of_tolerance_is_irregular() {
        assert_eq!(Rhythm::closest(3.75).to_string(), "3/1");
        assert!(Rhythm::closest(3.8).is_irregular());
        assert!(Rhythm::closest(10.0).is_irregular());
        assert!(Rhythm::closest(0.01).is_irregular());
        assert!(Rhythm::closest(0.0).is_irregular());
        assert!(Rhythm::closest(-1.0).is_irregular());
        assert!(Rhythm::closest(f64::NAN).is_irregular());
        assert!(Rhythm::closest(f64::INFINITY).is_irregular());
    }

    #[test]
    fn irregular_is_hardest() {
        let max = COMMON_RHYTHMS
            .iter()
            .map(RhythmRatio::difficulty)
            .fold(0.0, f64::max);

        assert!(Rhythm::Irregular.difficulty() > max);
        assert_eq!(Rhythm::Irregular.ratio(), None);
    }

    #[test]
    fn identity_ignores_difficulty() {
        let lhs = RhythmRatio::new(3, 2, 0.6);
        let rhs = RhythmRatio::new(3, 2, 0.1);

        assert_eq!(lhs, rhs);
        assert_ne!(lhs, RhythmRatio::new(2, 3, 0.6));
    }

    proptest! {
        #[test]
        fn total_and_deterministic(ratio in 0.000_1_f64..1_000.0) {
            let first = Rhythm::closest(ratio);
            let second = Rhythm::closest(ratio);

            prop_assert_eq!(first, second);

            if let Rhythm::Common(rhythm) = first {
                prop_assert!(COMMON_RHYTHMS.contains(rhythm));

                let dist = (rhythm.ratio() - ratio).abs();
                prop_assert!(COMMON_RHYTHMS.iter().all(|r| (r.ratio() - ratio).abs() >= dist));
            }
        }
    }
}
