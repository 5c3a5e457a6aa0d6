//! Colour palettes and the alpha blend used for the typing trail.

use ratatui::style::Color;

/// RGB triple, kept separate from [`Color`] so blending stays plain math.
pub type Rgb = (u8, u8, u8);

/// One of the two colour palettes.  Which one is active is decided each
/// frame by the caller — nothing in here reads ambient state.
pub struct Theme;

impl Theme {
    /// Ink colour for the animated text: light on dark, dark on light.
    pub fn ink(dark: bool) -> Rgb {
        if dark {
            (235, 235, 235)
        } else {
            (20, 20, 20)
        }
    }

    /// Background the ink is blended toward as characters fade out.
    pub fn background(dark: bool) -> Rgb {
        if dark {
            (16, 16, 20)
        } else {
            (250, 250, 248)
        }
    }

    /// Background as a terminal colour, for filling the surface.
    pub fn background_color(dark: bool) -> Color {
        let (r, g, b) = Self::background(dark);
        Color::Rgb(r, g, b)
    }

    /// The cursor uses slightly-translucent ink, as the original did.
    pub fn cursor(dark: bool) -> Color {
        blend(Self::ink(dark), Self::background(dark), 0.8)
    }

    /// Status-bar style mirrors the ink palette at low emphasis.
    pub fn status_fg(dark: bool) -> Color {
        blend(Self::ink(dark), Self::background(dark), 0.55)
    }
}

/// Linearly blend `ink` toward `bg` by `alpha` (1.0 = full ink, 0.0 = gone).
/// Alpha is clamped so out-of-range simulation values can never produce a
/// wild colour.
pub fn blend(ink: Rgb, bg: Rgb, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    let ch = |i: u8, b: u8| (b as f32 + (i as f32 - b as f32) * a).round() as u8;
    Color::Rgb(ch(ink.0, bg.0), ch(ink.1, bg.1), ch(ink.2, bg.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_uses_light_ink_and_vice_versa() {
        let (r, g, b) = Theme::ink(true);
        assert!(r > 200 && g > 200 && b > 200);
        let (r, g, b) = Theme::ink(false);
        assert!(r < 60 && g < 60 && b < 60);
    }

    #[test]
    fn blend_endpoints_hit_ink_and_background() {
        let ink = (235, 235, 235);
        let bg = (16, 16, 20);
        assert_eq!(blend(ink, bg, 1.0), Color::Rgb(235, 235, 235));
        assert_eq!(blend(ink, bg, 0.0), Color::Rgb(16, 16, 20));
    }

    #[test]
    fn blend_clamps_out_of_range_alpha() {
        let ink = (200, 100, 50);
        let bg = (0, 0, 0);
        assert_eq!(blend(ink, bg, 2.0), blend(ink, bg, 1.0));
        assert_eq!(blend(ink, bg, -1.0), blend(ink, bg, 0.0));
    }
}
