// src/mesostic/line.rs
// Per-segment west/east scanner

/// The two halves of a matched segment. West ends with the capitalized
/// spine hit; east is everything after it up to the look-ahead cut. Both
/// sides are whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSplit {
    pub west: String,
    pub east: String,
}

impl LineSplit {
    /// West width in code points, the unit the aligner pads with.
    pub fn west_width(&self) -> usize {
        self.west.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    West,
    East,
}

/// Scan one source segment for `spine_char`.
///
/// The segment is case-folded before scanning; only the matched character
/// comes out capitalized. Rules, in order:
/// - west side: first occurrence of `spine_char` wins, is capitalized,
///   and flips the scan to the east side;
/// - east side: stop at `next_char` (that hit belongs to the next line)
///   or at a repeat of `spine_char` (a line may not carry the spine
///   character twice);
/// - a segment that never contains `spine_char` yields `None`.
pub fn scan_segment(segment: &str, spine_char: char, next_char: char) -> Option<LineSplit> {
    let mut west = String::new();
    let mut east = String::new();
    let mut side = Side::West;

    for c in segment.to_lowercase().chars() {
        match side {
            Side::West => {
                if c == spine_char {
                    west.extend(c.to_uppercase());
                    side = Side::East;
                } else {
                    west.push(c);
                }
            }
            Side::East => {
                if c == next_char || c == spine_char {
                    break;
                }
                east.push(c);
            }
        }
    }

    if side == Side::West {
        return None;
    }

    Some(LineSplit {
        west: west.trim().to_string(),
        east: east.trim().to_string(),
    })
}
