//! Condition/temperature to advisory mapping.
//!
//! Rules are evaluated top to bottom and the first match wins. Temperature
//! thresholds sit between the precipitation rules and the clear/cloud text
//! matches, so a hot clear day gets the heat advisory.

use crate::model::{CurrentConditions, Recommendation};

struct Rule {
    matches: fn(condition: &str, temperature_c: f64) -> bool,
    advice: Recommendation,
}

pub const RAIN: Recommendation = Recommendation {
    text: "Stay indoors! It's raining ☔️",
    icon: "☔️",
};
pub const SNOW: Recommendation = Recommendation {
    text: "Bundle up! Snow is falling ❄️",
    icon: "❄️",
};
pub const COLD: Recommendation = Recommendation {
    text: "Brrr! Wear something warm 🧣",
    icon: "🧣",
};
pub const HOT: Recommendation = Recommendation {
    text: "Stay hydrated! It’s super hot 🔥",
    icon: "🔥",
};
pub const CLEAR: Recommendation = Recommendation {
    text: "Enjoy the sunshine! 😎",
    icon: "😎",
};
pub const CLOUDY: Recommendation = Recommendation {
    text: "It’s a bit cloudy ☁️ but fine outside",
    icon: "☁️",
};
pub const FALLBACK: Recommendation = Recommendation {
    text: "Have a nice day! 🌈",
    icon: "🌈",
};

pub const COLD_BELOW_C: f64 = 10.0;
pub const HOT_ABOVE_C: f64 = 30.0;

const RULES: &[Rule] = &[
    Rule {
        matches: |c, _| c.contains("rain"),
        advice: RAIN,
    },
    Rule {
        matches: |c, _| c.contains("snow"),
        advice: SNOW,
    },
    Rule {
        matches: |_, t| t < COLD_BELOW_C,
        advice: COLD,
    },
    Rule {
        matches: |_, t| t > HOT_ABOVE_C,
        advice: HOT,
    },
    Rule {
        matches: |c, _| c.contains("clear"),
        advice: CLEAR,
    },
    Rule {
        matches: |c, _| c.contains("cloud"),
        advice: CLOUDY,
    },
];

/// Evaluate the rule table against a lower-cased condition label.
pub fn recommend_for(condition_main: &str, temperature_c: f64) -> Recommendation {
    let condition = condition_main.to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&condition, temperature_c))
        .map(|rule| rule.advice)
        .unwrap_or(FALLBACK)
}

/// Empty recommendation when nothing has been fetched.
pub fn recommend(current: Option<&CurrentConditions>) -> Recommendation {
    match current {
        Some(c) => recommend_for(&c.condition.main, c.temperature_c),
        None => Recommendation::default(),
    }
}
