//! Presentation derived from the weather condition
//!
//! Pure lookups: condition -> backdrop (background color + art), text
//! color, lifestyle tip, emoji. Matching is case-insensitive over the five
//! provider categories; everything else falls through to the defaults.

use ratatui::style::Color;

/// Coarse weather category, parsed from the provider's condition string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Other,
}

impl Condition {
    /// Parse a provider condition string, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "clear" => Condition::Clear,
            "clouds" => Condition::Clouds,
            "rain" => Condition::Rain,
            "snow" => Condition::Snow,
            "thunderstorm" => Condition::Thunderstorm,
            _ => Condition::Other,
        }
    }
}

/// Full-viewport backdrop for a condition.
pub struct Backdrop {
    /// Background color painted across the whole dashboard.
    pub bg: Color,
    /// Condition art shown in the weather panel.
    pub art: &'static str,
}

const CLEAR_ART: &str = r"
    \   /
     .-.
  - (   ) -
     `-'
    /   \
";

const CLOUDS_ART: &str = r"
      .--.
   .-(    ).
  (___.__)__)
";

const RAIN_ART: &str = r"
      .--.
   .-(    ).
  (___.__)__)
   ' ' ' '
  ' ' ' '
";

const SNOW_ART: &str = r"
      .--.
   .-(    ).
  (___.__)__)
   *  *  *
  *  *  *
";

const THUNDERSTORM_ART: &str = r"
      .--.
   .-(    ).
  (___.__)__)
    /_  /_
     /   /
";

const DEFAULT_ART: &str = r"
   ~~~~~~~
  ~~~~~~~~~
   ~~~~~~~
";

/// Backdrop for a condition; unmatched conditions get the default.
pub fn backdrop(condition: Condition) -> Backdrop {
    match condition {
        Condition::Clear => Backdrop {
            bg: Color::Rgb(240, 210, 120),
            art: CLEAR_ART,
        },
        Condition::Clouds => Backdrop {
            bg: Color::Rgb(176, 180, 188),
            art: CLOUDS_ART,
        },
        Condition::Rain => Backdrop {
            bg: Color::Rgb(130, 150, 170),
            art: RAIN_ART,
        },
        Condition::Snow => Backdrop {
            bg: Color::Rgb(230, 236, 244),
            art: SNOW_ART,
        },
        Condition::Thunderstorm => Backdrop {
            bg: Color::Rgb(44, 44, 60),
            art: THUNDERSTORM_ART,
        },
        Condition::Other => Backdrop {
            bg: Color::Rgb(200, 204, 208),
            art: DEFAULT_ART,
        },
    }
}

/// Text color over the backdrop. Thunderstorm is the only dark backdrop,
/// so it is the only condition that gets light text.
pub fn text_color(condition: Condition) -> Color {
    match condition {
        Condition::Thunderstorm => Color::White,
        _ => Color::Black,
    }
}

/// Lifestyle tip for a condition.
pub fn lifestyle_tip(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "Perfect day for outdoor activities! Don't forget your sunglasses.",
        Condition::Clouds => "A cozy day! Maybe enjoy a book with a warm drink.",
        Condition::Rain => "Don't forget your umbrella! Stay dry and wear waterproof shoes.",
        Condition::Snow => "Layer up! It's a great day for hot cocoa and a warm sweater.",
        Condition::Thunderstorm => "Stay indoors if possible! Avoid using electrical appliances.",
        Condition::Other => "Enjoy your day!",
    }
}

/// Emoji for a condition, empty for unmatched conditions.
pub fn condition_emoji(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "☀️",
        Condition::Clouds => "☁️",
        Condition::Rain => "🌧️",
        Condition::Snow => "❄️",
        Condition::Thunderstorm => "⛈️",
        Condition::Other => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [(&str, Condition); 5] = [
        ("clear", Condition::Clear),
        ("clouds", Condition::Clouds),
        ("rain", Condition::Rain),
        ("snow", Condition::Snow),
        ("thunderstorm", Condition::Thunderstorm),
    ];

    #[test]
    fn parse_is_case_insensitive() {
        for (raw, expected) in KNOWN {
            assert_eq!(Condition::parse(raw), expected);
            assert_eq!(Condition::parse(&raw.to_uppercase()), expected);
        }
        // Provider capitalization as seen on the wire
        assert_eq!(Condition::parse("Rain"), Condition::Rain);
    }

    #[test]
    fn unknown_conditions_fall_through() {
        for raw in ["Drizzle", "Mist", "Haze", "", "clearish"] {
            assert_eq!(Condition::parse(raw), Condition::Other);
        }
    }

    #[test]
    fn each_condition_has_its_own_backdrop() {
        let default_art = backdrop(Condition::Other).art;
        for (raw, _) in KNOWN {
            let b = backdrop(Condition::parse(raw));
            assert_ne!(b.art, default_art, "{raw} should not use the default art");
        }
        assert_eq!(backdrop(Condition::parse("Fog")).art, default_art);
    }

    #[test]
    fn only_thunderstorm_gets_light_text() {
        assert_eq!(text_color(Condition::Thunderstorm), Color::White);
        for condition in [
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Snow,
            Condition::Other,
        ] {
            assert_eq!(text_color(condition), Color::Black);
        }
    }

    #[test]
    fn tips_cover_known_conditions_with_fallback() {
        assert!(lifestyle_tip(Condition::Rain).contains("umbrella"));
        assert!(lifestyle_tip(Condition::Clear).contains("sunglasses"));
        assert!(lifestyle_tip(Condition::Snow).contains("cocoa"));
        assert_eq!(lifestyle_tip(Condition::parse("Mist")), "Enjoy your day!");
        assert_eq!(lifestyle_tip(Condition::Other), "Enjoy your day!");
    }

    #[test]
    fn emoji_is_empty_for_unknown() {
        for (raw, _) in KNOWN {
            assert!(!condition_emoji(Condition::parse(raw)).is_empty());
        }
        assert_eq!(condition_emoji(Condition::Other), "");
    }
}
