// src/entity/plan.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlanCategory {
    #[default]
    Fitness,
    Health,
    #[serde(rename = "Lose Fat")]
    FatLoss,
}

impl PlanCategory {
    pub const ALL: [PlanCategory; 3] = [
        PlanCategory::Fitness,
        PlanCategory::Health,
        PlanCategory::FatLoss,
    ];
}

impl std::fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanCategory::Fitness => write!(f, "Fitness"),
            PlanCategory::Health => write!(f, "Health"),
            PlanCategory::FatLoss => write!(f, "Lose Fat"),
        }
    }
}

impl std::str::FromStr for PlanCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "fitness" => Ok(PlanCategory::Fitness),
            "health" => Ok(PlanCategory::Health),
            "lose fat" | "fat loss" | "fatloss" => Ok(PlanCategory::FatLoss),
            _ => Err(format!("Invalid plan category: {}", s)),
        }
    }
}

/// A shared exercise plan with its comment thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisePlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: PlanCategory,
    /// Duration in minutes
    pub duration: u32,
    pub difficulty: String,
    pub creator: String,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ExercisePlan {
    pub fn new(
        title: String,
        description: String,
        category: PlanCategory,
        duration: u32,
        difficulty: String,
        creator: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            category,
            duration,
            difficulty,
            creator,
            date_created: Utc::now(),
            likes: 0,
            comments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            content,
            date: Utc::now(),
        }
    }
}
