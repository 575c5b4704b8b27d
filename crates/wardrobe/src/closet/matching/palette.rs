//! Static color tables: the harmony matrix and the trending palette.
//!
//! Both tables are process-wide immutable configuration, safe for
//! unsynchronized concurrent reads.

/// Current trending palette (earth tones), matched case-insensitively.
pub const TRENDING_COLORS: &[&str] = &["beige", "brown", "olive", "cream", "tan"];

/// Colors considered harmonious with `color`. The table is stored
/// one-directionally; [`color_compatible`] checks both directions.
fn harmonious(color: &str) -> &'static [&'static str] {
    match color {
        "black" => &[
            "white", "grey", "red", "blue", "pink", "beige", "brown", "green", "yellow",
        ],
        "white" => &[
            "black", "blue", "red", "green", "brown", "grey", "navy", "pink",
        ],
        "blue" => &["white", "beige", "brown", "grey", "navy", "black"],
        "navy" => &["white", "beige", "grey", "red", "pink"],
        "grey" => &["black", "white", "blue", "pink", "yellow", "purple"],
        "brown" => &["beige", "cream", "white", "olive", "tan"],
        "beige" => &["brown", "white", "navy", "blue", "olive", "tan"],
        "red" => &["black", "white", "navy", "grey"],
        "pink" => &["white", "grey", "navy", "black"],
        "green" => &["beige", "brown", "white", "black"],
        "olive" => &["brown", "beige", "white", "black"],
        _ => &[],
    }
}

/// Whether two color names read as compatible: identical names always match,
/// otherwise either direction of the harmony table may list the pair.
/// Comparison is case-insensitive.
pub fn color_compatible(first: &str, second: &str) -> bool {
    let first = first.to_ascii_lowercase();
    let second = second.to_ascii_lowercase();

    first == second
        || harmonious(&first).contains(&second.as_str())
        || harmonious(&second).contains(&first.as_str())
}

pub(crate) fn is_trending(color: &str) -> bool {
    let color = color.to_ascii_lowercase();
    TRENDING_COLORS.contains(&color.as_str())
}
