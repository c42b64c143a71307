use rosu_map::section::hit_objects::hit_samples::HitSoundType;

/// All hitobject related data required for difficulty calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitObject {
    pub start_time: f64,
    pub kind: HitObjectKind,
    pub class: HitClass,
}

impl HitObject {
    /// Create a new [`HitObject`].
    pub const fn new(start_time: f64, kind: HitObjectKind, class: HitClass) -> Self {
        Self {
            start_time,
            kind,
            class,
        }
    }

    /// Create a hittable note.
    pub const fn note(start_time: f64, class: HitClass) -> Self {
        Self::new(start_time, HitObjectKind::Note, class)
    }

    /// Create a roll.
    pub const fn roll(start_time: f64) -> Self {
        Self::new(start_time, HitObjectKind::Roll, HitClass::Center)
    }

    /// Create a swell.
    pub const fn swell(start_time: f64) -> Self {
        Self::new(start_time, HitObjectKind::Swell, HitClass::Center)
    }

    /// Whether the hitobject is a note.
    ///
    /// Only notes are considered by the skills and only notes contribute to
    /// the combo.
    pub const fn is_hit(&self) -> bool {
        matches!(self.kind, HitObjectKind::Note)
    }
}

/// The type of a [`HitObject`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HitObjectKind {
    #[default]
    Note,
    /// A sustained object without discrete hits, e.g. a slider or hold.
    Roll,
    /// A spinner-like object.
    Swell,
}

/// The classification of a [`HitObject`].
///
/// Two notes of the same class are played with the same input so the time
/// between them affects how tiring a pattern is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitClass {
    #[default]
    Center,
    Rim,
}

impl From<HitSoundType> for HitClass {
    fn from(sound: HitSoundType) -> Self {
        if sound.has_flag(HitSoundType::CLAP | HitSoundType::WHISTLE) {
            Self::Rim
        } else {
            Self::Center
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_from_sound() {
        assert_eq!(HitClass::from(HitSoundType::default()), HitClass::Center);
        assert_eq!(HitClass::from(HitSoundType::from(HitSoundType::WHISTLE)), HitClass::Rim);
        assert_eq!(HitClass::from(HitSoundType::from(HitSoundType::CLAP)), HitClass::Rim);
        assert_eq!(HitClass::from(HitSoundType::from(HitSoundType::FINISH)), HitClass::Center);
    }

    #[test]
    fn only_notes_are_hits() {
        assert!(HitObject::note(0.0, HitClass::Rim).is_hit());
        assert!(!HitObject::roll(0.0).is_hit());
        assert!(!HitObject::swell(0.0).is_hit());
    }
}
