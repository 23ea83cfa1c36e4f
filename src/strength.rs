use egui::Color32;

use crate::generator::GeneratorConfig;

/// The three-tier rating shown under the password field. This is the fixed
/// length/category heuristic, not an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }

    /// Badge color for the strength indicator.
    pub fn badge_color(self) -> Color32 {
        match self {
            Strength::Weak => Color32::RED,
            Strength::Moderate => Color32::YELLOW,
            Strength::Strong => Color32::GREEN,
        }
    }
}

/// Rates a generated password against the flags that built it. Checked in
/// tier order so the higher tiers override: 12+ characters reaches Moderate,
/// and Strong additionally needs 16+ characters with uppercase, numbers, and
/// symbols all enabled. Partial category coverage never rates Strong.
pub fn classify(password: &str, config: &GeneratorConfig) -> Strength {
    let len = password.chars().count();

    let mut strength = Strength::Weak;
    if len >= 12 {
        strength = Strength::Moderate;
    }
    if len >= 16 && config.include_numbers && config.include_symbols && config.include_uppercase {
        strength = Strength::Strong;
    }
    strength
}
