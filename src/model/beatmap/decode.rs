use rosu_map::{
    section::hit_objects::{
        hit_samples::{HitSoundType, ParseHitSoundTypeError},
        HitObjectType, ParseHitObjectTypeError,
    },
    util::{ParseNumberError, StrExt},
    DecodeBeatmap, DecodeState,
};

use crate::model::hit_object::{HitClass, HitObject, HitObjectKind};

use super::Beatmap;

/// The state of a [`Beatmap`] for [`DecodeBeatmap`].
pub struct BeatmapState {
    hit_objects: Vec<HitObject>,
}

impl DecodeState for BeatmapState {
    fn create(_version: i32) -> Self {
        Self {
            hit_objects: Vec::with_capacity(512),
        }
    }
}

impl From<BeatmapState> for Beatmap {
    fn from(state: BeatmapState) -> Self {
        Beatmap::new(state.hit_objects)
    }
}

/// All the ways that parsing a [`Beatmap`] can fail.
#[derive(Debug, thiserror::Error)]
pub enum ParseBeatmapError {
    #[error("failed to parse hit object type")]
    HitObjectType(#[from] ParseHitObjectTypeError),
    #[error("failed to parse hit sound type")]
    HitSoundType(#[from] ParseHitSoundTypeError),
    #[error("invalid hit object line")]
    InvalidHitObjectLine,
    #[error("failed to parse number")]
    Number(#[from] ParseNumberError),
    #[error("unknown hit object type")]
    UnknownHitObjectType,
}

impl DecodeBeatmap for Beatmap {
    type Error = ParseBeatmapError;
    type State = BeatmapState;

    fn parse_general(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_editor(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_metadata(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_difficulty(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_events(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_timing_points(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_colors(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_hit_objects(state: &mut Self::State, line: &str) -> Result<(), Self::Error> {
        let mut split = line.trim_comment().split(',');

        let (Some(_x), Some(_y), Some(start_time), Some(kind), Some(sound_type)) = (
            split.next(),
            split.next(),
            split.next(),
            split.next(),
            split.next(),
        ) else {
            return Err(ParseBeatmapError::InvalidHitObjectLine);
        };

        let start_time = start_time.parse_num::<f64>()?;
        let hit_object_type: HitObjectType = kind.parse()?;
        let sound: HitSoundType = sound_type.parse()?;

        let kind = if hit_object_type.has_flag(HitObjectType::CIRCLE) {
            HitObjectKind::Note
        } else if hit_object_type.has_flag(HitObjectType::SLIDER)
            || hit_object_type.has_flag(HitObjectType::HOLD)
        {
            HitObjectKind::Roll
        } else if hit_object_type.has_flag(HitObjectType::SPINNER) {
            HitObjectKind::Swell
        } else {
            return Err(ParseBeatmapError::UnknownHitObjectType);
        };

        state
            .hit_objects
            .push(HitObject::new(start_time, kind, HitClass::from(sound)));

        Ok(())
    }

    fn parse_variables(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_catch_the_beat(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn parse_mania(_: &mut Self::State, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
