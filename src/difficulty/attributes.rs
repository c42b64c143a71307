/// The difficulty value of a single skill.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SkillValue {
    /// The name of the skill, e.g. `"continuous"`.
    pub name: &'static str,
    /// The aggregated difficulty value of the skill.
    pub value: f64,
}

/// The contribution of each skill to the star rating.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RhythmRatings {
    /// The star rating portion of sustained note density.
    pub continuous: f64,
    /// The star rating portion of sudden tempo changes.
    pub burst: f64,
    /// Ratio between the total strain of all objects and the total strain if
    /// every object were as hard as the hardest ones.
    pub consistency_factor: f64,
}

/// The result of a difficulty calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyAttributes {
    /// The difficulty value of each skill in processing order.
    pub skills: Vec<SkillValue>,
    /// The final star rating.
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// Rhythm specific sub-ratings.
    pub ratings: RhythmRatings,
}

impl DifficultyAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.stars
    }

    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Return the difficulty value of the skill with the given name.
    pub fn skill(&self, name: &str) -> Option<f64> {
        self.skills
            .iter()
            .find(|skill| skill.name == name)
            .map(|skill| skill.value)
    }
}
