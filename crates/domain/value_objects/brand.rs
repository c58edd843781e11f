pub const CORAL: &str = "#F97368";
pub const GREEN: &str = "#87AA8C";
pub const CHARCOAL: &str = "#44444A";
pub const OFF_WHITE: &str = "#F5F2ED";
pub const DARK_BG: &str = "#0a0a0c";

pub const BRAND_NAME: &str = "rekan";

pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1350;

const LIGHT_LUMINANCE_THRESHOLD: f64 = 140.0;

/// Maps a palette name (`coral`, `offWhite`, ...) or a literal `#hex` to a CSS color.
/// Anything unknown falls back to coral.
pub fn resolve_color(name: Option<&str>) -> &str {
    match name {
        None => CORAL,
        Some(hex) if hex.starts_with('#') => hex,
        Some("coral") => CORAL,
        Some("green") => GREEN,
        Some("charcoal") => CHARCOAL,
        Some("offWhite") => OFF_WHITE,
        Some("darkBg") => DARK_BG,
        Some(_) => CORAL,
    }
}

/// `0.299R + 0.587G + 0.114B` of a `#rrggbb` color. `None` when a channel does not parse.
pub fn luminance(hex: &str) -> Option<f64> {
    let color = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |range: std::ops::Range<usize>| {
        color
            .get(range)
            .and_then(|raw| u8::from_str_radix(raw, 16).ok())
            .map(f64::from)
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Some(r * 0.299 + g * 0.587 + b * 0.114)
}

/// Short colors (`#fff`) count as light; colors that cannot be read count as dark.
pub fn is_light_color(hex: &str) -> bool {
    let color = hex.strip_prefix('#').unwrap_or(hex);
    if color.len() < 6 {
        return true;
    }

    luminance(hex).is_some_and(|value| value > LIGHT_LUMINANCE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_and_hex_values_resolve() {
        assert_eq!(resolve_color(None), CORAL);
        assert_eq!(resolve_color(Some("green")), GREEN);
        assert_eq!(resolve_color(Some("#123456")), "#123456");
        assert_eq!(resolve_color(Some("purple")), CORAL);
    }

    #[test]
    fn dark_and_light_backgrounds_are_told_apart() {
        assert!(!is_light_color(DARK_BG));
        assert!(is_light_color(OFF_WHITE));
        assert!(!is_light_color(CHARCOAL));
        assert!(is_light_color("#fff"));
    }

    #[test]
    fn threshold_is_strictly_greater_than_140() {
        // 0x8c = 140 on every channel gives exactly 140.
        assert!(!is_light_color("#8c8c8c"));
        assert!(is_light_color("#8d8d8d"));
    }

    #[test]
    fn unreadable_colors_are_dark() {
        assert_eq!(luminance("linear-gradient(red, blue)"), None);
        assert!(!is_light_color("linear-gradient(red, blue)"));
    }
}
