use crate::{
    difficulty::{object::DifficultyObject, skills::Skills, DifficultyValues},
    model::beatmap::Beatmap,
    Difficulty, DifficultyAttributes,
};

/// Gradually calculate the difficulty attributes of a map.
///
/// Note that this struct implements [`Iterator`]. On every call of
/// [`Iterator::next`], the map's next hit object will be processed and the
/// [`DifficultyAttributes`] will be updated and returned.
///
/// The attributes after the last hit object are the same as the ones of a
/// regular calculation.
///
/// # Example
///
/// ```
/// use rhythm_stars::{Beatmap, Difficulty, GradualDifficulty, HitClass, HitObject};
///
/// let map = Beatmap::new(vec![
///     HitObject::note(0.0, HitClass::Center),
///     HitObject::note(100.0, HitClass::Rim),
///     HitObject::roll(200.0),
///     HitObject::note(600.0, HitClass::Center),
/// ]);
///
/// let difficulty = Difficulty::new().mods(64); // DT
/// let mut iter = GradualDifficulty::new(&difficulty, &map);
///
/// // the difficulty of the map after the first hit object
/// let attrs1 = iter.next();
/// // ... after the second hit object
/// let attrs2 = iter.next();
///
/// // Remaining hit objects
/// for difficulty in iter {
///     // ...
/// }
/// ```
pub struct GradualDifficulty {
    idx: usize,
    diff_objects: Vec<DifficultyObject>,
    skills: Skills,
    first_combo: u32,
    max_combo: u32,
    /// Amount of considered hit objects.
    len: usize,
}

impl GradualDifficulty {
    /// Create a new difficulty attributes iterator for a map.
    pub fn new(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let hit_objects = difficulty.hit_objects(map);

        let first_combo = hit_objects
            .first()
            .map_or(0, |h| u32::from(h.is_hit()));

        let diff_objects = DifficultyObject::create_all(hit_objects, difficulty.get_clock_rate());

        Self {
            idx: 0,
            diff_objects,
            skills: Skills::new(),
            first_combo,
            max_combo: 0,
            len: hit_objects.len(),
        }
    }

    /// Process the next hit object without evaluating the skills.
    ///
    /// Returns `false` if there are no hit objects left.
    fn process_next(&mut self) -> bool {
        if self.idx >= self.len {
            return false;
        }

        // The first hit object has no difficulty object
        if let Some(curr) = self.idx.checked_sub(1).and_then(|i| self.diff_objects.get(i)) {
            self.skills.process(curr, &self.diff_objects);
            self.max_combo += u32::from(curr.is_hit);
        } else {
            self.max_combo = self.first_combo;
        }

        self.idx += 1;

        true
    }
}

impl Iterator for GradualDifficulty {
    type Item = DifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.process_next() {
            return None;
        }

        Some(DifficultyValues::eval(&self.skills, self.max_combo))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();

        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.idx = self.len;

            return None;
        }

        for _ in 0..n {
            self.process_next();
        }

        self.next()
    }
}

impl ExactSizeIterator for GradualDifficulty {
    fn len(&self) -> usize {
        self.len - self.idx
    }
}
