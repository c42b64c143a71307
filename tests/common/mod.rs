// False positive
#[allow(unused)]
pub use self::{mods::*, paths::*};

use rhythm_stars::{Beatmap, HitClass, HitObject};

/// Paths to .osu files
mod paths {
    pub const STREAM: &str = "./resources/stream.osu";
    pub const MIXED: &str = "./resources/mixed.osu";
}

/// Bit values for mods
mod mods {
    #![allow(unused)]

    pub const NM: u32 = 0;
    pub const DT: u32 = 1 << 6;
    pub const HT: u32 = 1 << 8;
}

/// A map of center notes at the given timestamps.
#[allow(unused)]
pub fn notes(times: &[f64]) -> Beatmap {
    times
        .iter()
        .map(|&time| HitObject::note(time, HitClass::Center))
        .collect::<Vec<_>>()
        .into()
}
