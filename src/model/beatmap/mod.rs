use std::{io, path::Path, str::FromStr};

use crate::{difficulty::gradual::GradualDifficulty, Difficulty, DifficultyAttributes};

use super::hit_object::HitObject;

pub use self::decode::{BeatmapState, ParseBeatmapError};

mod decode;

/// All beatmap data that is relevant for difficulty calculation.
///
/// Hit objects are always sorted by their start time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Beatmap {
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Create a [`Beatmap`] from hit objects that are already in memory.
    ///
    /// The objects are sorted stably by their start time.
    pub fn new(mut hit_objects: Vec<HitObject>) -> Self {
        hit_objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        Self { hit_objects }
    }

    /// Parse a [`Beatmap`] by providing a path to a `.osu` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        rosu_map::from_path(path)
    }

    /// Parse a [`Beatmap`] by providing the content of a `.osu` file as a
    /// slice of bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        rosu_map::from_bytes(bytes)
    }

    /// Calculate the difficulty attributes without any mods.
    pub fn difficulty(&self) -> DifficultyAttributes {
        Difficulty::new().calculate(self)
    }

    /// Create a gradual difficulty calculator for this [`Beatmap`].
    pub fn gradual_difficulty(&self, difficulty: &Difficulty) -> GradualDifficulty {
        GradualDifficulty::new(difficulty, self)
    }

    /// The amount of hit objects that contribute to the combo.
    pub fn max_combo(&self) -> u32 {
        self.hit_objects.iter().filter(|h| h.is_hit()).count() as u32
    }
}

impl From<Vec<HitObject>> for Beatmap {
    fn from(hit_objects: Vec<HitObject>) -> Self {
        Self::new(hit_objects)
    }
}

impl FromStr for Beatmap {
    type Err = io::Error;

    /// Parse a [`Beatmap`] by providing the content of a `.osu` file as a
    /// string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        rosu_map::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::HitClass;

    use super::*;

    #[test]
    fn new_sorts_stably() {
        let map = Beatmap::new(vec![
            HitObject::note(300.0, HitClass::Center),
            HitObject::note(100.0, HitClass::Rim),
            HitObject::roll(100.0),
            HitObject::note(0.0, HitClass::Center),
        ]);

        let times: Vec<_> = map.hit_objects.iter().map(|h| h.start_time).collect();
        assert_eq!(times, [0.0, 100.0, 100.0, 300.0]);
        assert_eq!(map.hit_objects[1].class, HitClass::Rim);
        assert!(!map.hit_objects[2].is_hit());
        assert_eq!(map.max_combo(), 3);
    }
}
