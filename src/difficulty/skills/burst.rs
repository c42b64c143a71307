use crate::{
    difficulty::{object::DifficultyObject, rhythm::Rhythm},
    util::{float_ext::FloatExt, limited_queue::LimitedQueue},
};

const RHYTHM_HISTORY_MAX_LENGTH: usize = 8;

define_skill! {
    /// Sudden tempo changes between notes.
    #[derive(Clone, Debug)]
    pub struct Burst: "burst" {
        rhythm_strain: f64 = 0.0,
        notes_since_rhythm_change: usize = 0,
        history: LimitedQueue<HistoryElement, RHYTHM_HISTORY_MAX_LENGTH> = LimitedQueue::new(),
    }
}

impl Burst {
    const SKILL_MULTIPLIER: f64 = 10.0;
    const STRAIN_DECAY_BASE: f64 = 0.0;

    const STRAIN_DECAY: f64 = 0.96;

    fn strain_value_of(&mut self, curr: &DifficultyObject, _: &[DifficultyObject]) -> f64 {
        // * drum rolls and swells are exempt.
        if !curr.is_hit {
            self.reset_rhythm_and_strain();

            return 0.0;
        }

        self.rhythm_strain *= Self::STRAIN_DECAY;
        self.notes_since_rhythm_change += 1;

        let difficulty = curr.rhythm.difficulty();

        // * rhythm difficulty zero (due to rhythm not changing) => no rhythm strain.
        if FloatExt::eq(difficulty, 0.0) {
            return 0.0;
        }

        let mut object_strain = difficulty;

        object_strain *= self.repetition_penalties(curr);
        object_strain *= pattern_length_penalty(self.notes_since_rhythm_change);
        object_strain *= self.speed_penalty(curr.delta_time);

        // * careful - needs to be done here since calls above read this value
        self.notes_since_rhythm_change = 0;

        self.rhythm_strain += object_strain;

        self.rhythm_strain
    }

    /// Penalize the most recent rhythm patterns that already appeared within
    /// the history.
    fn repetition_penalties(&mut self, curr: &DifficultyObject) -> f64 {
        let mut penalty = 1.0;

        self.history.push(HistoryElement::new(curr));

        for most_recent_patterns_to_compare in 2..=RHYTHM_HISTORY_MAX_LENGTH / 2 {
            let Some(last_start) = self
                .history
                .len()
                .checked_sub(most_recent_patterns_to_compare + 1)
            else {
                continue;
            };

            for start in (0..=last_start).rev() {
                if !self.same_pattern(start, most_recent_patterns_to_compare) {
                    continue;
                }

                let notes_since = curr.idx - self.history[start].idx;
                penalty *= repetition_penalty(notes_since);

                break;
            }
        }

        penalty
    }

    fn same_pattern(&self, start: usize, most_recent_patterns_to_compare: usize) -> bool {
        let recent_start = self.history.len() - most_recent_patterns_to_compare;

        (0..most_recent_patterns_to_compare)
            .all(|i| self.history[start + i].rhythm == self.history[recent_start + i].rhythm)
    }

    fn speed_penalty(&mut self, delta_time: f64) -> f64 {
        if delta_time < 80.0 {
            return 1.0;
        }

        if delta_time < 210.0 {
            return f64::max(0.0, 1.4 - 0.005 * delta_time);
        }

        self.reset_rhythm_and_strain();

        0.0
    }

    fn reset_rhythm_and_strain(&mut self) {
        self.rhythm_strain = 0.0;
        self.notes_since_rhythm_change = 0;
    }
}

fn repetition_penalty(notes_since: usize) -> f64 {
    f64::min(1.0, 0.032 * notes_since as f64)
}

fn pattern_length_penalty(pattern_length: usize) -> f64 {
    let pattern_length = pattern_length as f64;
    let short_pattern_penalty = f64::min(0.15 * pattern_length, 1.0);
    let long_pattern_penalty = f64::clamp(2.5 - 0.15 * pattern_length, 0.0, 1.0);

    f64::min(short_pattern_penalty, long_pattern_penalty)
}

#[derive(Copy, Clone, Debug, Default)]
struct HistoryElement {
    idx: usize,
    rhythm: Rhythm,
}

impl HistoryElement {
    const fn new(curr: &DifficultyObject) -> Self {
        Self {
            idx: curr.idx,
            rhythm: curr.rhythm,
        }
    }
}
