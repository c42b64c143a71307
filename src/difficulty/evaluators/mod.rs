pub use self::continuous::ContinuousEvaluator;

mod continuous;
