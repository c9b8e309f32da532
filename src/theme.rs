//! Colour palette for the view.
//! Purple and pink by default, each role overridable from `[theme]` in config.toml

use ratatui::style::Color;

use crate::config::ThemeConfig;

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Color,        // Page title (purple-800)
    pub accent: Color,       // Active borders, selected tab, key hints (purple-600)
    pub accent_soft: Color,  // Fact card border (pink-300)
    pub star: Color,         // Filled stars (yellow-400)
    pub star_empty: Color,   // Unfilled stars (gray-300)
    pub text: Color,         // Body text (gray-700 on dark terminals reads as light gray)
    pub text_dim: Color,     // Hints, secondary text
    pub bg_selected: Color,  // Selected breed card
    pub inactive: Color,     // Inactive borders, disabled carousel arrows
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::Rgb(168, 85, 247),
            accent: Color::Rgb(147, 51, 234),
            accent_soft: Color::Rgb(249, 168, 212),
            star: Color::Rgb(250, 204, 21),
            star_empty: Color::Rgb(209, 213, 219),
            text: Color::Rgb(229, 231, 235),
            text_dim: Color::Rgb(156, 163, 175),
            bg_selected: Color::Rgb(59, 7, 100),
            inactive: Color::Rgb(107, 114, 128),
        }
    }
}

impl Theme {
    /// Built-in palette with any valid overrides from config applied
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();

        let overrides = [
            (&config.title, &mut theme.title),
            (&config.accent, &mut theme.accent),
            (&config.star, &mut theme.star),
            (&config.star_empty, &mut theme.star_empty),
            (&config.text, &mut theme.text),
        ];

        for (value, slot) in overrides {
            let Some(value) = value else { continue };
            match Self::parse_hex_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!("Ignoring invalid theme colour {:?}", value),
            }
        }

        theme
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if !s.is_ascii() {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(Theme::parse_hex_color("#6B21A8"), Some(Color::Rgb(107, 33, 168)));
        assert_eq!(Theme::parse_hex_color("fc0"), Some(Color::Rgb(255, 204, 0)));
        assert_eq!(Theme::parse_hex_color("#12345"), None);
        assert_eq!(Theme::parse_hex_color("#zzzzzz"), None);
        assert_eq!(Theme::parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_overrides_apply_and_bad_values_are_ignored() {
        let config = ThemeConfig {
            star: Some("#ff0000".to_string()),
            title: Some("purple".to_string()),
            ..Default::default()
        };

        let theme = Theme::from_config(&config);
        let default = Theme::default();

        assert_eq!(theme.star, Color::Rgb(255, 0, 0));
        assert_eq!(theme.title, default.title);
        assert_eq!(theme.accent, default.accent);
    }
}
