//! Spectral class to display colour

/// Default colour for stars with no (or an unrecognised) spectral class
pub const DEFAULT_STAR_COLOR: &str = "#ffffff";

/// Map a spectral class (e.g. `"G2V"`, `"k5iii"`) to a hex colour.
///
/// Only the leading letter of the Morgan–Keenan class is considered.
pub fn spectral_class_color(spectral_class: Option<&str>) -> &'static str {
    let Some(first) = spectral_class.and_then(|s| s.trim().chars().next()) else {
        return DEFAULT_STAR_COLOR;
    };

    match first.to_ascii_lowercase() {
        'o' => "#9bb0ff",
        'b' => "#aabfff",
        'a' => "#cad7ff",
        'f' => "#f8f7ff",
        'g' => "#fff4ea",
        'k' => "#ffd2a1",
        'm' => "#ffcc6f",
        _ => DEFAULT_STAR_COLOR,
    }
}
