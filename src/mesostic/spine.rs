// src/mesostic/spine.rs
// Spine normalization and rotation state

use crate::error::{Error, Result};

/// Longest spine accepted; anything beyond this is cut off before lowercasing.
pub const MAX_SPINE_CHARS: usize = 32;

/// The spine string: the word or phrase spelled vertically down the poem
/// by the capitalized letters.
///
/// Normalization: strip all Unicode whitespace, truncate to
/// [`MAX_SPINE_CHARS`], then lowercase. Repeated characters are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spine {
    chars: Vec<char>,
}

impl Spine {
    /// Build a spine from a title, with an optional explicit override.
    /// A non-empty override wins over the title.
    ///
    /// Returns [`Error::EmptySpine`] when nothing survives normalization;
    /// callers must not run the engine on an empty spine.
    pub fn new(title: &str, spine_override: Option<&str>) -> Result<Self> {
        let source = match spine_override {
            Some(ss) if !ss.trim().is_empty() => ss,
            _ => title,
        };

        let chars: Vec<char> = source
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(MAX_SPINE_CHARS)
            .flat_map(|c| c.to_lowercase())
            .collect();

        if chars.is_empty() {
            return Err(Error::EmptySpine);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, idx: usize) -> char {
        self.chars[idx % self.chars.len()]
    }

    /// The spine as a single lowercase string, e.g. for store file names.
    pub fn label(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Position within the spine for one poem build.
///
/// Exactly one cursor exists per build session; it is created at zero and
/// dies with the session. Never shared across concurrent builds.
#[derive(Debug, Default)]
pub struct SpineCursor {
    pos: usize,
}

impl SpineCursor {
    pub fn new() -> Self {
        Self { pos: 0 }
    }

    /// The spine character currently being sought.
    pub fn current(&self, spine: &Spine) -> char {
        spine.char_at(self.pos)
    }

    /// The character after the current one, wrapping at the end.
    /// The segmenter uses it for the look-ahead cut.
    pub fn upcoming(&self, spine: &Spine) -> char {
        spine.char_at(self.pos + 1)
    }

    /// Rotate to the next spine position after a successful match.
    /// Failed matches hold in place: the same character is sought in the
    /// next segment.
    pub fn advance(&mut self, spine: &Spine) {
        self.pos = (self.pos + 1) % spine.len();
    }
}
