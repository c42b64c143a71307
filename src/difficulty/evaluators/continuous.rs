use crate::difficulty::object::DifficultyObject;

pub struct ContinuousEvaluator;

impl ContinuousEvaluator {
    pub fn evaluate_diff_of(curr: &DifficultyObject) -> f64 {
        if !curr.is_hit {
            return 0.0;
        }

        // * Add a base strain to all objects
        let mut object_strain = 0.5;

        if let Some(interval) = curr.same_class_interval {
            object_strain +=
                Self::speed_bonus(interval) + 0.5 * Self::speed_bonus(curr.delta_time);
        }

        object_strain
    }

    fn speed_bonus(mut interval: f64) -> f64 {
        // * Interval is capped at a very small value to prevent infinite values.
        interval = f64::max(interval, 1.0);

        20.0 / interval
    }
}
