//! Core services shared by the Tumble crates: the host [`Platform`]
//! capability and the static [`LessonIndex`].

pub mod collections;
pub mod lessons;
pub mod platform;

pub use lessons::{Lesson, LessonError, LessonIndex};
pub use platform::{Platform, PlatformError};
