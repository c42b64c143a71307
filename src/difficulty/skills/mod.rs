use crate::{
    difficulty::object::DifficultyObject,
    util::{difficulty::logistic, float_ext::FloatExt},
};

pub use self::{burst::Burst, continuous::Continuous};

mod burst;
mod continuous;

/// Length of a strain section in milliseconds.
///
/// Section peaks are only used to plot strains; ratings are based on the
/// strain of each object.
pub const SECTION_LENGTH: f64 = 400.0;

/// Weight factor between consecutive sorted strains.
pub const DECAY_WEIGHT: f64 = 0.9;

pub type StrainPeaks = std::vec::IntoIter<f64>;

/// An independent axis of difficulty.
///
/// Difficulty objects must be processed in order and a skill never looks
/// ahead of the current object.
pub trait Skill {
    const NAME: &'static str;

    fn process(&mut self, curr: &DifficultyObject, objects: &[DifficultyObject]);

    /// Consume the skill and return its strain peaks per section.
    fn into_strain_peaks(self) -> StrainPeaks;

    /// The strain after each processed object.
    fn object_strains(&self) -> &[f64];

    /// Weighted sum of the sorted object strains.
    ///
    /// The amount of strains is fixed by the amount of objects so the value
    /// only depends on how strenuous each object is.
    fn difficulty_value(&self) -> f64 {
        difficulty_value(self.object_strains().to_vec(), DECAY_WEIGHT)
    }

    /// The amount of objects whose strain is comparable to the top strain.
    fn count_top_weighted_strains(&self, difficulty_value: f64) -> f64 {
        count_top_weighted_strains(self.object_strains(), difficulty_value)
    }
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

/// Sum the given strains in descending order where the `k`-th strain is
/// weighted by `decay_weight^k`.
///
/// Zero strains do not contribute and are removed before sorting.
pub fn difficulty_value(mut strains: Vec<f64>, decay_weight: f64) -> f64 {
    strains.retain(|&strain| strain > 0.0);
    strains.sort_unstable_by(|a, b| b.total_cmp(a));

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    for strain in strains {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn count_top_weighted_strains(object_strains: &[f64], difficulty_value: f64) -> f64 {
    if object_strains.is_empty() {
        return 0.0;
    }

    // * What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if FloatExt::eq(consistent_top_strain, 0.0) {
        return object_strains.len() as f64;
    }

    object_strains
        .iter()
        .map(|s| logistic(*s / consistent_top_strain, 0.88, 10.0, Some(1.1)))
        .sum()
}

/// All skills that are processed in lockstep.
#[derive(Clone, Debug, Default)]
pub struct Skills {
    pub continuous: Continuous,
    pub burst: Burst,
}

impl Skills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, curr: &DifficultyObject, objects: &[DifficultyObject]) {
        self.continuous.process(curr, objects);
        self.burst.process(curr, objects);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::model::hit_object::{HitClass, HitObject};

    use super::*;

    fn stream(times: impl IntoIterator<Item = f64>) -> Skills {
        let hit_objects: Vec<_> = times
            .into_iter()
            .map(|time| HitObject::note(time, HitClass::Center))
            .collect();

        let objects = DifficultyObject::create_all(&hit_objects, 1.0);
        let mut skills = Skills::new();

        for curr in objects.iter() {
            skills.process(curr, &objects);
        }

        skills
    }

    #[test]
    fn weighted_sum() {
        let value = difficulty_value(vec![1.0, 0.0, 2.0, 4.0], DECAY_WEIGHT);

        assert!((value - (4.0 + 2.0 * 0.9 + 1.0 * 0.81)).abs() < 1e-12);
        assert!(difficulty_value(Vec::new(), DECAY_WEIGHT).abs() < f64::EPSILON);
        assert!(difficulty_value(vec![0.0; 5], DECAY_WEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn no_transitions_no_difficulty() {
        for skills in [stream([0.0; 0]), stream([1000.0])] {
            assert!(skills.continuous.difficulty_value().abs() < f64::EPSILON);
            assert!(skills.burst.difficulty_value().abs() < f64::EPSILON);
        }
    }

    #[test]
    fn difficulty_value_is_idempotent() {
        let skills = stream((0..100).map(|i| f64::from(i) * 120.0 + f64::from(i % 3) * 20.0));

        let first = skills.continuous.difficulty_value();
        let second = skills.continuous.difficulty_value();
        assert!(first > 0.0);
        assert_eq!(first.to_bits(), second.to_bits());

        let first = skills.burst.difficulty_value();
        let second = skills.burst.difficulty_value();
        assert!(first > 0.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn strain_peaks_per_section() {
        let skills = stream((0..10).map(|i| f64::from(i) * 100.0));

        // Sections end at 400, 800, and 1200; the last one is still open
        let peaks: Vec<_> = skills.continuous.into_strain_peaks().collect();
        assert_eq!(peaks.len(), 3);
        assert!(peaks.iter().all(|&peak| peak > 0.0));
    }

    #[test]
    fn top_weighted_strains_without_difficulty() {
        assert!(count_top_weighted_strains(&[], 0.0).abs() < f64::EPSILON);
        assert!((count_top_weighted_strains(&[1.0, 2.0], 0.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn top_weighted_strains_of_uniform_strains() {
        let strains = [1.0; 20];
        let difficulty = difficulty_value(strains.to_vec(), DECAY_WEIGHT);
        let count = count_top_weighted_strains(&strains, difficulty);

        assert!(count > 0.0);
        assert!(count <= 20.0 * 1.1);
    }

    proptest! {
        #[test]
        fn aggregation_ignores_peak_order(
            peaks in prop::collection::vec(0.0_f64..1_000.0, 0..64),
            seed in any::<u64>(),
        ) {
            let expected = difficulty_value(peaks.clone(), DECAY_WEIGHT);

            let mut reversed = peaks.clone();
            reversed.reverse();

            let mut rotated = peaks;

            if !rotated.is_empty() {
                let mid = (seed % rotated.len() as u64) as usize;
                rotated.rotate_left(mid);
            }

            prop_assert_eq!(difficulty_value(reversed, DECAY_WEIGHT).to_bits(), expected.to_bits());
            prop_assert_eq!(difficulty_value(rotated, DECAY_WEIGHT).to_bits(), expected.to_bits());
        }
    }
}
