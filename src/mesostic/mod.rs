// src/mesostic/mod.rs

//! The mesostic engine.
//!
//! A mesostic spells its spine word down the *middle* of the poem (an
//! acrostic uses line starts). Source prose is cut into segments at
//! clause punctuation; each segment is scanned for the current spine
//! character, split into a west fragment (up to and including the
//! capitalized hit) and an east fragment (truncated before the next
//! spine character), and the west fragments are right-aligned so the
//! capitals form a vertical column.
//!
//! The engine is pure and synchronous: no I/O, no logging, no shared
//! state. Every build owns its own cursor and fragment lists, so
//! concurrent callers never interact.

pub mod line;
pub mod spine;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use line::{scan_segment, LineSplit};
use spine::{Spine, SpineCursor};

/// Segments are cut at sentence/clause punctuation, not at newlines, so
/// one clause becomes one candidate poem line.
static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,.;:]").expect("static pattern"));

/// One poem build: owns the spine cursor and the growing fragment list
/// for the duration of a single [`build`](MesosticBuilder::build) call.
///
/// Segments that never contain the sought character are dropped from the
/// output entirely (no blank placeholder line), and the cursor holds so
/// the same character is sought in the next segment.
#[derive(Debug)]
pub struct MesosticBuilder {
    spine: Spine,
    cursor: SpineCursor,
    fragments: Vec<LineSplit>,
}

impl MesosticBuilder {
    pub fn new(spine: Spine) -> Self {
        Self {
            spine,
            cursor: SpineCursor::new(),
            fragments: Vec::new(),
        }
    }

    pub fn spine(&self) -> &Spine {
        &self.spine
    }

    /// Run the source text through the engine and render the poem.
    ///
    /// May return an empty string when nothing matches; that is a valid
    /// result, not an error.
    pub fn build(mut self, source: &str) -> String {
        for segment in SEGMENT_SPLIT.split(source) {
            let ss_char = self.cursor.current(&self.spine);
            let next_char = self.cursor.upcoming(&self.spine);

            if let Some(split) = scan_segment(segment, ss_char, next_char) {
                self.fragments.push(split);
                self.cursor.advance(&self.spine);
            }
            // no match: hold the cursor, drop the segment
        }

        self.render()
    }

    /// Right-align all west fragments on a common column and join with
    /// the east fragments. The capitals end up stacked vertically.
    fn render(&self) -> String {
        let west_width = self
            .fragments
            .iter()
            .map(LineSplit::west_width)
            .max()
            .unwrap_or(0);

        let lines: Vec<String> = self
            .fragments
            .iter()
            .map(|frag| {
                let pad = " ".repeat(west_width - frag.west_width());
                format!("{pad}{}{}", frag.west, frag.east)
            })
            .collect();

        lines.join("\n")
    }
}

/// Build a mesostic in one call.
///
/// `spine_source` is typically a title; a non-empty `spine_override`
/// replaces it. Fails only when both normalize to an empty spine.
pub fn build_mesostic(
    spine_source: &str,
    spine_override: Option<&str>,
    source_text: &str,
) -> Result<String> {
    let spine = Spine::new(spine_source, spine_override)?;
    Ok(MesosticBuilder::new(spine).build(source_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn quick_brown_fox_three_lines() {
        let poem =
            build_mesostic("craque", None, "the quick brown; fox jumps over; the lazy dog").unwrap();
        // the first east fragment stops before the 'r' of "brown": that
        // 'r' is the next spine character and belongs to the next line
        let want = "      the quiCk b\n\
                    fox jumps oveR\n\
                    \x20       the lAzy dog";
        assert_eq!(poem, want);
    }

    #[test]
    fn single_segment_single_capital() {
        let poem = build_mesostic("wander", None, "the quick brown fox").unwrap();
        assert_eq!(poem, "the quick broWn fox");
        assert_eq!(poem.matches('W').count(), 1);
    }

    #[test]
    fn no_match_anywhere_yields_empty_poem() {
        let poem = build_mesostic("zzz", None, "a vowel heavy line; and another one").unwrap();
        assert_eq!(poem, "");
    }

    #[test]
    fn empty_source_yields_empty_poem() {
        let poem = build_mesostic("craque", None, "").unwrap();
        assert_eq!(poem, "");
    }

    #[test]
    fn empty_spine_refuses_to_run() {
        assert!(matches!(
            build_mesostic("", None, "some text"),
            Err(Error::EmptySpine)
        ));
    }

    #[test]
    fn cursor_holds_on_unmatched_segments() {
        // middle segment has no 'r'; it is dropped and 'r' is found in
        // the third segment instead
        let poem =
            build_mesostic("cra", None, "echo; no match.. fox jumps over; lazy dog").unwrap();
        let capitals: String = poem.chars().filter(|c| c.is_uppercase()).collect();
        assert_eq!(capitals, "CRA");
    }

    #[test]
    fn spine_wraps_past_its_end() {
        let source = "cat; rat; bat; cot; rot; dab";
        let poem = build_mesostic("cra", None, source).unwrap();
        let capitals: String = poem.chars().filter(|c| c.is_uppercase()).collect();
        assert_eq!(capitals, "CRACRA");
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let source = "the quick brown; fox jumps over; the lazy dog";
        let a = build_mesostic("craque", None, source).unwrap();
        let b = build_mesostic("craque", None, source).unwrap();
        assert_eq!(a, b);
    }
}
