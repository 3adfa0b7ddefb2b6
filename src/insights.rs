//! Achievement checks and daily recommendations derived from tracked stats.

#[derive(Debug, Clone)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub unlocked: bool,
}

impl Achievement {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            unlocked: false,
        }
    }
}

/// The stock achievement set, all locked.
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("10K Steps", "Walked 10,000 steps in a day"),
        Achievement::new("Hydration Master", "Drank 2L of water in a day"),
    ]
}

/// Unlock any achievements the day's stats have earned. Already-unlocked
/// achievements stay unlocked.
pub fn check_achievements(steps: u64, water_ml: u32, achievements: &mut [Achievement]) {
    if steps >= 10_000 {
        if let Some(a) = achievements.get_mut(0) {
            a.unlocked = true;
        }
    }

    if water_ml >= 2_000 {
        if let Some(a) = achievements.get_mut(1) {
            a.unlocked = true;
        }
    }
}

/// One-line nudge based on the day's stats, worst deficit first.
pub fn recommendation(steps: u64, water_ml: u32, mood: &str) -> &'static str {
    if steps < 5_000 {
        "Try to walk more today! Aim for at least 5,000 steps."
    } else if water_ml < 2_000 {
        "Don't forget to stay hydrated! Drink more water."
    } else if mood == "😞" || mood == "😢" {
        "How about some light exercise to boost your mood?"
    } else {
        "You're doing great! Keep up the good work."
    }
}
