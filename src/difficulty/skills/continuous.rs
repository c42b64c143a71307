use crate::difficulty::{evaluators::ContinuousEvaluator, object::DifficultyObject};

define_skill! {
    /// Sustained note density.
    #[derive(Clone, Debug)]
    pub struct Continuous: "continuous" {}
}

impl Continuous {
    const SKILL_MULTIPLIER: f64 = 1.1;
    const STRAIN_DECAY_BASE: f64 = 0.4;

    #[allow(clippy::unused_self)]
    fn strain_value_of(&mut self, curr: &DifficultyObject, _: &[DifficultyObject]) -> f64 {
        ContinuousEvaluator::evaluate_diff_of(curr)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        difficulty::skills::Skill,
        model::hit_object::{HitClass, HitObject},
    };

    use super::*;

    fn continuous(hit_objects: &[HitObject]) -> Continuous {
        let objects = DifficultyObject::create_all(hit_objects, 1.0);
        let mut skill = Continuous::new();

        for curr in objects.iter() {
            skill.process(curr, &objects);
        }

        skill
    }

    fn stream(len: u32, spacing: f64) -> Vec<HitObject> {
        (0..len)
            .map(|i| HitObject::note(f64::from(i) * spacing, HitClass::Center))
            .collect()
    }

    fn notes(times: &[f64]) -> Vec<HitObject> {
        times
            .iter()
            .map(|&time| HitObject::note(time, HitClass::Center))
            .collect()
    }

    #[test]
    fn denser_streams_are_harder() {
        let fast = continuous(&stream(200, 100.0)).difficulty_value();
        let slow = continuous(&stream(200, 200.0)).difficulty_value();

        assert!(fast > slow);
        assert!(slow > 0.0);
    }

    #[test]
    fn short_stream_with_doubled_spacing_is_easier() {
        let dense = continuous(&notes(&[0.0, 150.0, 300.0])).difficulty_value();
        let sparse = continuous(&notes(&[0.0, 300.0, 600.0])).difficulty_value();

        assert!(dense > sparse, "{dense} <= {sparse}");
    }

    proptest! {
        #[test]
        fn doubled_deltas_lower_difficulty(
            deltas in prop::collection::vec(1.0_f64..1_000.0, 1..40),
        ) {
            let times = |factor: f64| {
                let mut time = 0.0;
                let mut times = vec![time];

                for delta in deltas.iter() {
                    time += delta * factor;
                    times.push(time);
                }

                notes(&times)
            };

            let dense = continuous(&times(1.0)).difficulty_value();
            let sparse = continuous(&times(2.0)).difficulty_value();

            prop_assert!(sparse > 0.0);
            prop_assert!(dense > sparse, "{} <= {}", dense, sparse);
        }
    }

    #[test]
    fn rolls_have_no_strain() {
        let hit_objects: Vec<_> = (0..20).map(|i| HitObject::roll(f64::from(i) * 50.0)).collect();
        let skill = continuous(&hit_objects);

        assert!(skill.object_strains().iter().all(|&strain| strain.abs() < f64::EPSILON));
        assert!(skill.difficulty_value().abs() < f64::EPSILON);
    }

    #[test]
    fn strain_decays_between_notes() {
        let skill = continuous(&[
            HitObject::note(0.0, HitClass::Center),
            HitObject::note(100.0, HitClass::Center),
            HitObject::note(5100.0, HitClass::Center),
        ]);

        let strains = skill.object_strains();
        assert!(strains[1] < strains[0]);
    }
}
