use serde::{Deserialize, Serialize};

pub const AUTO_COLOR_INTERVAL_MIN_SECS: u32 = 1;
pub const AUTO_COLOR_INTERVAL_MAX_SECS: u32 = 180;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Sepia,
    Midnight,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::Sepia, Theme::Midnight]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
            Theme::Midnight => "midnight",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Sepia => "Sepia",
            Theme::Midnight => "Midnight",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Indigo,
    Violet,
    Purple,
    Pink,
    Rose,
    Red,
    Orange,
    Amber,
    Green,
    Teal,
    Cyan,
}

impl AccentColor {
    pub fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Blue,
            AccentColor::Indigo,
            AccentColor::Violet,
            AccentColor::Purple,
            AccentColor::Pink,
            AccentColor::Rose,
            AccentColor::Red,
            AccentColor::Orange,
            AccentColor::Amber,
            AccentColor::Green,
            AccentColor::Teal,
            AccentColor::Cyan,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            AccentColor::Blue => "Blue",
            AccentColor::Indigo => "Indigo",
            AccentColor::Violet => "Violet",
            AccentColor::Purple => "Purple",
            AccentColor::Pink => "Pink",
            AccentColor::Rose => "Rose",
            AccentColor::Red => "Red",
            AccentColor::Orange => "Orange",
            AccentColor::Amber => "Amber",
            AccentColor::Green => "Green",
            AccentColor::Teal => "Teal",
            AccentColor::Cyan => "Cyan",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            AccentColor::Blue => "#3B82F6",
            AccentColor::Indigo => "#6366F1",
            AccentColor::Violet => "#8B5CF6",
            AccentColor::Purple => "#A855F7",
            AccentColor::Pink => "#EC4899",
            AccentColor::Rose => "#F43F5E",
            AccentColor::Red => "#EF4444",
            AccentColor::Orange => "#F97316",
            AccentColor::Amber => "#F59E0B",
            AccentColor::Green => "#22C55E",
            AccentColor::Teal => "#14B8A6",
            AccentColor::Cyan => "#06B6D4",
        }
    }

    /// Picks a colour other than `current`. `roll` is a uniform sample in
    /// `[0, 1)`; values outside that range are clamped.
    pub fn random_excluding(current: AccentColor, roll: f64) -> AccentColor {
        let candidates: Vec<AccentColor> = Self::all()
            .iter()
            .copied()
            .filter(|color| *color != current)
            .collect();
        let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
        let index = ((roll * candidates.len() as f64) as usize).min(candidates.len() - 1);
        candidates[index]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewScale {
    #[default]
    Normal,
    Compact,
}

impl ViewScale {
    pub fn factor(self) -> f64 {
        match self {
            ViewScale::Normal => 1.0,
            ViewScale::Compact => 0.75,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewScale::Normal => ViewScale::Compact,
            ViewScale::Compact => ViewScale::Normal,
        }
    }

    pub fn is_compact(self) -> bool {
        self == ViewScale::Compact
    }
}

pub fn clamp_auto_color_interval(secs: u32) -> u32 {
    secs.clamp(AUTO_COLOR_INTERVAL_MIN_SECS, AUTO_COLOR_INTERVAL_MAX_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_never_repeats_current() {
        for current in AccentColor::all() {
            for step in 0..=20 {
                let roll = step as f64 / 20.0;
                assert_ne!(AccentColor::random_excluding(*current, roll), *current);
            }
        }
    }

    #[test]
    fn random_color_tolerates_bad_rolls() {
        let picked = AccentColor::random_excluding(AccentColor::Blue, f64::NAN);
        assert_eq!(picked, AccentColor::Indigo);
        let picked = AccentColor::random_excluding(AccentColor::Blue, 7.5);
        assert_eq!(picked, AccentColor::Cyan);
    }

    #[test]
    fn interval_is_clamped() {
        assert_eq!(clamp_auto_color_interval(0), 1);
        assert_eq!(clamp_auto_color_interval(45), 45);
        assert_eq!(clamp_auto_color_interval(600), 180);
    }

    #[test]
    fn view_scale_toggles_between_two_factors() {
        assert_eq!(ViewScale::Normal.toggled(), ViewScale::Compact);
        assert_eq!(ViewScale::Compact.factor(), 0.75);
        assert_eq!(ViewScale::Compact.toggled().factor(), 1.0);
    }
}
