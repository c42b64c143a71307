//! Library to calculate difficulty attributes for rhythm game beatmaps.
//!
//! ## Description
//!
//! A beatmap is a time-ordered list of [`HitObject`]s. Every object after
//! the first is turned into a difficulty object which is fed through a set
//! of independent skills:
//!
//!   - `continuous`: rewards sustained, evenly spaced note density
//!   - `burst`: rewards sudden tempo changes, weighted by how awkward the
//!     [`Rhythm`] between two consecutive notes is
//!
//! Each skill accumulates a decaying strain. The strain after every object
//! is weighted and combined into a single star rating.
//!
//! ## Usage
//!
//! ```no_run
//! use rhythm_stars::{Beatmap, Difficulty};
//!
//! // Decode the map
//! let map = Beatmap::from_path("./resources/stream.osu").unwrap();
//!
//! // Calculate difficulty attributes
//! let attrs = Difficulty::new()
//!     .mods(64) // DT
//!     .calculate(&map);
//!
//! println!(
//!     "Stars: {:.2} | Max combo: {} | Burst: {:.2}",
//!     attrs.stars(),
//!     attrs.max_combo(),
//!     attrs.ratings.burst,
//! );
//! ```
//!
//! ## Gradual calculation
//!
//! [`GradualDifficulty`] yields the attributes after every hit object which
//! is useful to display the difficulty progression of a map in an editor.
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Errors encountered during beatmap decoding as well as clamped timings and finished calculations are logged through `tracing`. | [`tracing`]
//!
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

#[doc(inline)]
pub use self::{
    difficulty::{
        attributes::{DifficultyAttributes, RhythmRatings, SkillValue},
        gradual::GradualDifficulty,
        rhythm::{Rhythm, RhythmRatio, COMMON_RHYTHMS},
        strains::Strains,
        Difficulty,
    },
    model::{
        beatmap::{Beatmap, ParseBeatmapError},
        hit_object::{HitClass, HitObject, HitObjectKind},
        mods::GameMods,
    },
};

#[macro_use]
mod util;

/// Difficulty calculation and its building blocks.
pub mod difficulty;

/// Types used in and around this crate.
pub mod model;
