//! Lesson index: which repository each lesson lives in and the discussion
//! thread attached to it.
//!
//! The index is static configuration. Tooling outside the widgets reads it;
//! nothing in the render path does.

use std::fmt;

use crate::collections::OrderedMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub repo: &'static str,
    pub discourse_id: u32,
}

impl Lesson {
    pub const fn new(id: &'static str, repo: &'static str, discourse_id: u32) -> Self {
        Self {
            id,
            repo,
            discourse_id,
        }
    }
}

const BUILTIN_LESSONS: [Lesson; 9] = [
    Lesson::new("intro", "rn-timer", 1881),
    Lesson::new("timer", "rn-timer", 1882),
    Lesson::new("trace-update-cycle", "rn-timer", 1883),
    Lesson::new("scrollview", "rn-tumblr", 1884),
    Lesson::new("tumble-photopost-layout", "rn-tumblr", 1885),
    Lesson::new("cross-platform-pager", "rn-tumblr", 1886),
    Lesson::new("tumble-image-modal", "rn-tumblr", 1887),
    Lesson::new("animated-intro", "rn-tumblr", 1888),
    Lesson::new("tumble-animate-image-modal", "rn-tumblr", 1889),
];

/// Lessons keyed by id, iterated in declaration order.
#[derive(Clone, Debug, Default)]
pub struct LessonIndex {
    lessons: OrderedMap<Lesson>,
}

impl LessonIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lessons shipped with the course.
    pub fn builtin() -> Self {
        let mut index = Self::new();
        for lesson in BUILTIN_LESSONS {
            index.lessons.insert(lesson.id, lesson);
        }
        index
    }

    /// Adds a lesson. Ids are unique; a second lesson with the same id is
    /// rejected and the index is left unchanged.
    pub fn insert(&mut self, lesson: Lesson) -> Result<(), LessonError> {
        if self.lessons.contains_key(lesson.id) {
            return Err(LessonError::Duplicate { id: lesson.id });
        }
        self.lessons.insert(lesson.id, lesson);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lesson> + '_ {
        self.lessons.values()
    }

    pub fn by_repo<'a>(&'a self, repo: &'a str) -> impl Iterator<Item = &'a Lesson> + 'a {
        self.iter().filter(move |lesson| lesson.repo == repo)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    Duplicate { id: &'static str },
}

impl fmt::Display for LessonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonError::Duplicate { id } => write!(f, "lesson {id} already indexed"),
        }
    }
}

impl std::error::Error for LessonError {}

#[cfg(test)]
#[path = "tests/lessons_tests.rs"]
mod tests;
