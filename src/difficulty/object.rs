use crate::{
    difficulty::rhythm::Rhythm,
    model::hit_object::{HitClass, HitObject},
};

/// Delta times are never smaller than this value (in ms).
pub const MIN_DELTA_TIME: f64 = 1.0;

/// A [`HitObject`] in relation to its predecessors, adjusted by the clock
/// rate.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    pub is_hit: bool,
    /// Time since the previous note of the same [`HitClass`].
    pub same_class_interval: Option<f64>,
    pub rhythm: Rhythm,
}

impl DifficultyObject {
    /// Create difficulty objects for all but the first hit object.
    pub fn create_all(hit_objects: &[HitObject], clock_rate: f64) -> Vec<Self> {
        let Some((first, rest)) = hit_objects.split_first() else {
            return Vec::new();
        };

        let mut diff_objects: Vec<Self> = Vec::with_capacity(rest.len());
        let mut last_by_class = LastByClass::default();
        last_by_class.update(first);

        let mut last = first;

        for (idx, curr) in rest.iter().enumerate() {
            let start_time = curr.start_time / clock_rate;
            let delta_time = clamped_delta_time((curr.start_time - last.start_time) / clock_rate);

            let same_class_interval = if curr.is_hit() {
                last_by_class
                    .get(curr.class)
                    .map(|prev_time| (curr.start_time - prev_time) / clock_rate)
            } else {
                None
            };

            let rhythm = match diff_objects.last() {
                Some(prev) => Rhythm::closest(delta_time / prev.delta_time),
                None => Rhythm::default(),
            };

            diff_objects.push(Self {
                idx,
                start_time,
                delta_time,
                is_hit: curr.is_hit(),
                same_class_interval,
                rhythm,
            });

            last_by_class.update(curr);
            last = curr;
        }

        diff_objects
    }

    pub fn previous<'a>(&self, backwards_idx: usize, objects: &'a [Self]) -> Option<&'a Self> {
        self.idx
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| objects.get(idx))
    }
}

fn clamped_delta_time(delta_time: f64) -> f64 {
    if delta_time >= MIN_DELTA_TIME {
        return delta_time;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(delta_time, "clamped delta time to {MIN_DELTA_TIME}ms");

    MIN_DELTA_TIME
}

/// Start time of the most recent note per [`HitClass`].
#[derive(Default)]
struct LastByClass {
    center: Option<f64>,
    rim: Option<f64>,
}

impl LastByClass {
    const fn get(&self, class: HitClass) -> Option<f64> {
        match class {
            HitClass::Center => self.center,
            HitClass::Rim => self.rim,
        }
    }

    fn update(&mut self, h: &HitObject) {
        if !h.is_hit() {
            return;
        }

        match h.class {
            HitClass::Center => self.center = Some(h.start_time),
            HitClass::Rim => self.rim = Some(h.start_time),
        }
    }
}
