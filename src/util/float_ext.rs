pub trait FloatExt: Sized {
    /// `self == other`
    fn eq(self, other: Self) -> bool;
}

impl FloatExt for f64 {
    fn eq(self, other: Self) -> bool {
        (self - other).abs() < f64::EPSILON
    }
}
