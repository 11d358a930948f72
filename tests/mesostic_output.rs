// tests/mesostic_output.rs
// End-to-end engine checks on realistic source text

use hpschd::build_mesostic;
use hpschd::mesostic::spine::Spine;

// A real NASA APOD explanation (2000-01-01, "The Millennium that
// Defines Universe"): long prose with plenty of clause punctuation.
const MILLENNIUM: &str = "Welcome to the millennial year at the threshold of millennium three.  \
During millennium two, humanity continually redefined its concept of \"Universe\": \
first as spheres centered on the Earth, in mid-millennium as the Solar System, \
a few centuries ago as the Galaxy, and within the last century as the matter \
emanating from the Big Bang.  During millennium three humanity may hope to \
discover alien life, to understand the geometry and composition of our present \
concept of Universe, and even to travel through this Universe.  Whatever our \
accomplishments, humanity will surely find adventure and discovery in the space \
above and beyond, and possibly define the surrounding Universe in ways and \
colors we cannot yet imagine by the threshold of millennium four.";

const MILLENNIUM_TITLE: &str = "The Millennium that Defines Universe";

fn capital_column(line: &str) -> Option<usize> {
    line.chars().position(|c| c.is_uppercase())
}

#[test]
fn quick_brown_fox_renders_exactly() {
    let poem = build_mesostic("craque", None, "the quick brown; fox jumps over; the lazy dog")
        .unwrap();
    // east of the first line is cut before the 'r' of "brown", the next
    // spine character; the capitals stay column-aligned on the longest west
    assert_eq!(
        poem,
        "      the quiCk b\nfox jumps oveR\n        the lAzy dog"
    );
}

#[test]
fn apod_explanation_produces_a_poem() {
    let poem = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();
    assert!(!poem.is_empty());
    assert!(poem.lines().count() > 5);
}

#[test]
fn repeated_builds_are_byte_identical() {
    let a = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();
    let b = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();
    assert_eq!(a, b);
}

#[test]
fn capitals_spell_consecutive_spine_characters() {
    let spine = Spine::new(MILLENNIUM_TITLE, None).unwrap();
    let poem = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();

    let capitals: Vec<char> = poem
        .chars()
        .filter(|c| c.is_uppercase())
        .flat_map(|c| c.to_lowercase())
        .collect();

    assert!(!capitals.is_empty());
    for (i, c) in capitals.iter().enumerate() {
        assert_eq!(
            *c,
            spine.char_at(i),
            "capital {i} should be spine position {} of {}",
            i % spine.len(),
            spine.label()
        );
    }
}

#[test]
fn capitals_line_up_in_one_column() {
    let poem = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();

    let columns: Vec<usize> = poem
        .lines()
        .map(|l| capital_column(l).expect("every rendered line carries a capital"))
        .collect();

    let column = columns[0];
    assert!(columns.iter().all(|c| *c == column));

    // the widest west fragment gets zero padding, so some line starts
    // flush left
    assert!(poem.lines().any(|l| !l.starts_with(' ')));
}

#[test]
fn each_line_carries_exactly_one_capital() {
    let poem = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();
    for line in poem.lines() {
        assert_eq!(
            line.chars().filter(|c| c.is_uppercase()).count(),
            1,
            "line {line:?}"
        );
    }
}

#[test]
fn unmatchable_source_yields_empty_poem_without_error() {
    let poem = build_mesostic("xyz", None, "a bland clause; and a second one").unwrap();
    assert_eq!(poem, "");
}

#[test]
fn spine_override_replaces_the_title() {
    let with_title = build_mesostic(MILLENNIUM_TITLE, None, MILLENNIUM).unwrap();
    let with_override = build_mesostic(MILLENNIUM_TITLE, Some("craque"), MILLENNIUM).unwrap();
    assert_ne!(with_title, with_override);

    let capitals: Vec<char> = with_override
        .chars()
        .filter(|c| c.is_uppercase())
        .flat_map(|c| c.to_lowercase())
        .collect();
    let craque = Spine::new("craque", None).unwrap();
    for (i, c) in capitals.iter().enumerate() {
        assert_eq!(*c, craque.char_at(i));
    }
}
