use crate::{
    difficulty::{
        skills::{Skill, SECTION_LENGTH},
        DifficultyValues,
    },
    Beatmap, Difficulty,
};

/// The result of calculating the strains on a map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Strains {
    /// Strain peaks of the continuous skill.
    pub continuous: Vec<f64>,
    /// Strain peaks of the burst skill.
    pub burst: Vec<f64>,
}

impl Strains {
    /// Time between two strains in ms.
    pub const SECTION_LEN: f64 = SECTION_LENGTH;
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap) -> Strains {
    let DifficultyValues { skills, .. } = DifficultyValues::calculate(difficulty, map);

    Strains {
        continuous: skills.continuous.into_strain_peaks().collect(),
        burst: skills.burst.into_strain_peaks().collect(),
    }
}
