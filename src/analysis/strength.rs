use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    VeryWeak,
    Insufficient,
}

impl CorrelationStrength {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CorrelationStrength::Strong => "Strong",
            CorrelationStrength::Moderate => "Moderate",
            CorrelationStrength::Weak => "Weak",
            CorrelationStrength::VeryWeak => "Very Weak / No Correlation",
            CorrelationStrength::Insufficient => "N/A (Insufficient Data)",
        }
    }

    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            CorrelationStrength::Strong => "Strong",
            CorrelationStrength::Moderate => "Moderate",
            CorrelationStrength::Weak => "Weak",
            CorrelationStrength::VeryWeak => "Very Weak",
            CorrelationStrength::Insufficient => "N/A",
        }
    }
}

/// Lower bound on `|r|` for each band, checked top to bottom. Anything below
/// the last bound is [`CorrelationStrength::VeryWeak`].
pub const STRENGTH_BANDS: [(f64, CorrelationStrength); 3] = [
    (0.7, CorrelationStrength::Strong),
    (0.4, CorrelationStrength::Moderate),
    (0.1, CorrelationStrength::Weak),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationDirection {
    Positive,
    Negative,
    None,
}

impl CorrelationDirection {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CorrelationDirection::Positive => "Positive",
            CorrelationDirection::Negative => "Negative",
            CorrelationDirection::None => "None",
        }
    }
}

/// Presentation tone replacing the dashboard's color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorrelationClass {
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl CorrelationClass {
    /// Card headline: `Strong Positive`, `Very Weak Negative`,
    /// `No Correlation` for an exact zero, `N/A` without data.
    #[must_use]
    pub fn headline(self) -> String {
        match (self.strength, self.direction) {
            (CorrelationStrength::Insufficient, _) => {
                CorrelationStrength::Insufficient.short_label().to_owned()
            }
            (_, CorrelationDirection::None) => "No Correlation".to_owned(),
            (strength, direction) => format!("{} {}", strength.short_label(), direction.label()),
        }
    }

    #[must_use]
    pub const fn tone(self) -> Tone {
        match (self.strength, self.direction) {
            (CorrelationStrength::Insufficient, _) => Tone::Muted,
            (_, CorrelationDirection::None) => Tone::Neutral,
            (_, CorrelationDirection::Positive) => Tone::Positive,
            (_, CorrelationDirection::Negative) => Tone::Negative,
        }
    }
}

#[must_use]
pub fn classify_strength(correlation: Option<f64>) -> CorrelationStrength {
    let Some(value) = correlation else {
        return CorrelationStrength::Insufficient;
    };
    let magnitude = value.abs();
    STRENGTH_BANDS
        .iter()
        .find(|(threshold, _)| magnitude >= *threshold)
        .map_or(CorrelationStrength::VeryWeak, |(_, strength)| *strength)
}

#[must_use]
pub const fn classify_direction(value: f64) -> CorrelationDirection {
    if value > 0.0 {
        CorrelationDirection::Positive
    } else if value < 0.0 {
        CorrelationDirection::Negative
    } else {
        CorrelationDirection::None
    }
}

#[must_use]
pub fn classify(correlation: Option<f64>) -> CorrelationClass {
    CorrelationClass {
        strength: classify_strength(correlation),
        direction: correlation.map_or(CorrelationDirection::None, classify_direction),
    }
}
