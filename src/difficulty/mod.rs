use std::cmp;

use crate::{
    model::{beatmap::Beatmap, hit_object::HitObject, mods::GameMods},
    util::difficulty::{norm, reverse_lerp},
};

use self::{
    attributes::{DifficultyAttributes, RhythmRatings, SkillValue},
    gradual::GradualDifficulty,
    object::DifficultyObject,
    skills::{Burst, Continuous, Skill, Skills, DECAY_WEIGHT},
    strains::Strains,
};

pub mod attributes;
pub mod evaluators;
pub mod gradual;
pub mod object;
pub mod rhythm;
pub mod skills;
pub mod strains;

#[allow(clippy::unreadable_literal)]
const DIFFICULTY_MULTIPLIER: f64 = 0.084375;
const CONTINUOUS_SKILL_MULTIPLIER: f64 = 0.445 * DIFFICULTY_MULTIPLIER;
const BURST_SKILL_MULTIPLIER: f64 = 0.75 * DIFFICULTY_MULTIPLIER;

/// Difficulty calculator.
///
/// A single calculator can be reused for any amount of maps; every
/// calculation creates its own skills.
///
/// # Example
///
/// ```
/// use rhythm_stars::{Beatmap, Difficulty, HitClass, HitObject};
///
/// let map = Beatmap::new(vec![
///     HitObject::note(0.0, HitClass::Center),
///     HitObject::note(100.0, HitClass::Rim),
///     HitObject::note(150.0, HitClass::Center),
///     HitObject::note(300.0, HitClass::Rim),
/// ]);
///
/// let attrs = Difficulty::new()
///     .mods(64) // DT
///     .calculate(&map);
///
/// assert_eq!(attrs.max_combo(), 4);
/// assert!(attrs.stars() > 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    passed_objects: Option<u32>,
    /// Clamped between 0.01 and 100.0.
    clock_rate: Option<f64>,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub const fn new() -> Self {
        Self {
            mods: GameMods::DEFAULT,
            passed_objects: None,
            clock_rate: None,
        }
    }

    /// Specify mods.
    ///
    /// Accepted types are
    /// - `u32`
    /// - [`rosu_mods::GameModsLegacy`]
    /// - [`rosu_mods::GameMods`]
    /// - [`rosu_mods::GameModsIntermode`]
    /// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// Only the first `passed_objects` hit objects will be considered.
    pub const fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate.clamp(0.01, 100.0)),
            ..self
        }
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, map: &Beatmap) -> DifficultyAttributes {
        let DifficultyValues { skills, max_combo } = DifficultyValues::calculate(self, map);

        let attrs = DifficultyValues::eval(&skills, max_combo);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            stars = attrs.stars,
            max_combo = attrs.max_combo,
            clock_rate = self.get_clock_rate(),
            "finished difficulty calculation"
        );

        attrs
    }

    /// Perform the difficulty calculation but instead of evaluating the skill
    /// strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap) -> Strains {
        strains::strains(self, map)
    }

    /// Create a gradual difficulty calculator for a map.
    pub fn gradual(&self, map: &Beatmap) -> GradualDifficulty {
        GradualDifficulty::new(self, map)
    }

    pub const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate
            .unwrap_or_else(|| self.mods.clock_rate().clamp(0.01, 100.0))
    }

    pub fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    /// The hit objects that are considered for the calculation.
    fn hit_objects<'a>(&self, map: &'a Beatmap) -> &'a [HitObject] {
        let take = cmp::min(self.get_passed_objects(), map.hit_objects.len());

        &map.hit_objects[..take]
    }
}

pub struct DifficultyValues {
    pub skills: Skills,
    pub max_combo: u32,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let hit_objects = difficulty.hit_objects(map);
        let max_combo = hit_objects.iter().filter(|h| h.is_hit()).count() as u32;

        let diff_objects = DifficultyObject::create_all(hit_objects, difficulty.get_clock_rate());
        let mut skills = Skills::new();

        for hit_object in diff_objects.iter() {
            skills.process(hit_object, &diff_objects);
        }

        Self { skills, max_combo }
    }

    pub fn eval(skills: &Skills, max_combo: u32) -> DifficultyAttributes {
        let Skills { continuous, burst } = skills;

        let continuous_difficulty_value = continuous.difficulty_value();
        let burst_difficulty_value = burst.difficulty_value();

        let continuous_skill = continuous_difficulty_value * CONTINUOUS_SKILL_MULTIPLIER;
        let burst_skill = burst_difficulty_value * BURST_SKILL_MULTIPLIER;

        let continuous_difficult_strains =
            continuous.count_top_weighted_strains(continuous_difficulty_value);

        let strain_length_bonus =
            1.0 + 0.15 * reverse_lerp(continuous_difficult_strains, 1000.0, 1555.0);

        let (combined_rating, consistency_factor) =
            combined_difficulty_value(continuous, burst, strain_length_bonus);

        let stars = rescale(combined_rating * 1.4);

        // * Calculate proportional contribution of each skill to the combinedRating.
        let total_skill = continuous_skill + burst_skill;

        let ratings = if total_skill > 0.0 {
            let skill_rating = stars / total_skill;

            RhythmRatings {
                continuous: continuous_skill * skill_rating,
                burst: burst_skill * skill_rating,
                consistency_factor,
            }
        } else {
            RhythmRatings {
                consistency_factor,
                ..Default::default()
            }
        };

        DifficultyAttributes {
            skills: vec![
                SkillValue {
                    name: Continuous::NAME,
                    value: continuous_difficulty_value,
                },
                SkillValue {
                    name: Burst::NAME,
                    value: burst_difficulty_value,
                },
            ],
            stars,
            max_combo,
            ratings,
        }
    }
}

/// Returns the combined rating and the consistency factor
fn combined_difficulty_value(
    continuous: &Continuous,
    burst: &Burst,
    strain_length_bonus: f64,
) -> (f64, f64) {
    let mut object_strains = combine_strains(
        continuous.object_strains(),
        burst.object_strains(),
        strain_length_bonus,
    );

    if object_strains.is_empty() {
        return (0.0, 0.0);
    }

    // * The average of the top 5% of strains from hit objects.
    let take = cmp::min(1 + object_strains.len() / 20, object_strains.len());

    let (bigger, nth, _) = object_strains.select_nth_unstable_by(take - 1, |a, b| b.total_cmp(a));

    let top_average_object_strain = (bigger.iter().sum::<f64>() + *nth) / take as f64;

    // * Calculates a consistency factor as the sum of difficulty from hit objects compared to if every object were as hard as the hardest.
    // * The top average strain is used instead of the very hardest to prevent exceptionally hard objects lowering the factor.
    let consistency_factor = object_strains.iter().sum::<f64>()
        / (top_average_object_strain * object_strains.len() as f64);

    let difficulty = skills::difficulty_value(object_strains, DECAY_WEIGHT);

    (difficulty, consistency_factor)
}

/// Combine the skills' strains of each object.
fn combine_strains(continuous: &[f64], burst: &[f64], strain_length_bonus: f64) -> Vec<f64> {
    continuous
        .iter()
        .zip(burst)
        .map(|(&continuous, &burst)| {
            let continuous = continuous * CONTINUOUS_SKILL_MULTIPLIER * strain_length_bonus;
            let burst = burst * BURST_SKILL_MULTIPLIER;

            norm(2.0, [continuous, burst])
        })
        // * Objects with 0 strain are excluded to avoid worst-case time complexity of the following sort.
        // * These objects will not contribute to the difficulty.
        .filter(|&strain| strain > 0.0)
        .collect()
}

fn rescale(stars: f64) -> f64 {
    if stars < 0.0 {
        stars
    } else {
        10.43 * f64::ln(stars / 8.0 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::HitClass;

    use super::*;

    fn map(times: &[f64]) -> Beatmap {
        times
            .iter()
            .map(|&time| HitObject::note(time, HitClass::Center))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn empty_map() {
        let attrs = Difficulty::new().calculate(&Beatmap::default());

        assert!(attrs.stars().abs() < f64::EPSILON);
        assert_eq!(attrs.max_combo(), 0);
        assert_eq!(attrs.skill("continuous"), Some(0.0));
        assert_eq!(attrs.skill("burst"), Some(0.0));
        assert_eq!(attrs.ratings, RhythmRatings::default());
    }

    #[test]
    fn clock_rate_is_clamped() {
        assert!((Difficulty::new().clock_rate(0.0).get_clock_rate() - 0.01).abs() < f64::EPSILON);
        assert!((Difficulty::new().clock_rate(1e9).get_clock_rate() - 100.0).abs() < f64::EPSILON);
        assert!((Difficulty::new().mods(64).get_clock_rate() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_clock_rate_overrides_mods() {
        let difficulty = Difficulty::new().mods(64).clock_rate(1.2);

        assert!((difficulty.get_clock_rate() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn ratings_add_up_to_stars() {
        let attrs = Difficulty::new().calculate(&map(&[0.0, 100.0, 150.0, 300.0, 350.0, 380.0]));

        let sum = attrs.ratings.continuous + attrs.ratings.burst;
        assert!((sum - attrs.stars).abs() < 1e-9);
        assert!(attrs.ratings.consistency_factor > 0.0);
        assert!(attrs.ratings.consistency_factor <= 1.0 + 1e-9);
    }

    #[test]
    fn rescale_is_monotonic() {
        assert!(rescale(0.0).abs() < f64::EPSILON);
        assert!(rescale(1.0) < rescale(2.0));
        assert!((rescale(-1.0) + 1.0).abs() < f64::EPSILON);
    }
}
