/// Beatmap types and decoding.
pub mod beatmap;

/// Hit objects as consumed by the difficulty calculation.
pub mod hit_object;

/// Game modifiers.
pub mod mods;
