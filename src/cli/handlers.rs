use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::entity::{Comment, ExercisePlan, PlanCategory, WINDOW_DAYS};
use crate::error::{Result, TrainlogError};
use crate::health::{HealthSource, NotificationOptions, NotificationSource};
use crate::insights::{check_achievements, default_achievements, recommendation};
use crate::storage::PlanStore;

/// Find the data root by looking for an existing .trainlog/ directory,
/// falling back to the working directory.
fn find_data_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".trainlog").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

fn open_store() -> PlanStore {
    PlanStore::new(&find_data_root())
}

/// Resolve a full UUID or unique prefix against the shared plans.
fn resolve_plan<'a>(plans: &'a [ExercisePlan], id: &str) -> Result<&'a ExercisePlan> {
    let needle = id.to_lowercase();
    let mut matches = plans
        .iter()
        .filter(|p| p.id.to_string().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(plan), None) => Ok(plan),
        _ => Err(TrainlogError::PlanNotFound(id.to_string())),
    }
}

fn parse_day(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| TrainlogError::InvalidArgument(format!("bad date '{}', expected YYYY-MM-DD", s))),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn handle_add_plan(
    title: String,
    description: String,
    category: String,
    duration: u32,
    difficulty: String,
    creator: String,
    json: bool,
) -> Result<()> {
    let store = open_store();

    let category: PlanCategory = category.parse().unwrap_or_default();
    let plan = ExercisePlan::new(title, description, category, duration, difficulty, creator);

    store.add_plan(plan.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!(
            "Shared plan ({}) [{}] - {}",
            &plan.id.to_string()[..8],
            plan.category,
            plan.title
        );
    }

    Ok(())
}

pub fn handle_add_comment(plan_id: String, content: String, author: String, json: bool) -> Result<()> {
    let store = open_store();

    let plans = store.load_plans();
    let id = resolve_plan(&plans, &plan_id)?.id;

    let comment = Comment::new(author, content);
    store.add_comment(id, comment.clone());

    if json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!("Commented on plan ({})", &id.to_string()[..8]);
    }

    Ok(())
}

pub fn handle_list(what: Option<String>, category: Option<String>, json: bool) -> Result<()> {
    let store = open_store();

    match what.as_deref().unwrap_or("plans") {
        "plan" | "plans" => {
            let category = match category {
                Some(c) => Some(c.parse::<PlanCategory>().map_err(TrainlogError::InvalidArgument)?),
                None => None,
            };

            let plans: Vec<ExercisePlan> = store
                .load_plans()
                .into_iter()
                .filter(|p| category.map_or(true, |c| p.category == c))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
            } else if plans.is_empty() {
                println!("No plans shared yet.");
            } else {
                println!("Shared plans:\n");
                for p in &plans {
                    println!(
                        "  ({}) [{}] {} - {} min • {}",
                        &p.id.to_string()[..8],
                        p.category,
                        p.title,
                        p.duration,
                        p.difficulty
                    );
                    println!(
                        "      by {} • {} likes • {} comments",
                        p.creator,
                        p.likes,
                        p.comments.len()
                    );
                }
            }
        }
        "completion" | "completions" => {
            let completions = store.load_completions();
            if json {
                println!("{}", serde_json::to_string_pretty(&completions)?);
            } else {
                for c in &completions {
                    println!("  {} {}", c.date, if c.completed { "done" } else { "-" });
                }
            }
        }
        other => {
            eprintln!("Unknown list target '{}'. Try: plans, completions", other);
        }
    }

    Ok(())
}

pub fn handle_get(id: String, json: bool) -> Result<()> {
    let store = open_store();

    let plans = store.load_plans();
    let plan = resolve_plan(&plans, &id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        println!("{} [{}]", plan.title, plan.category);
        println!("  {}", plan.description);
        println!(
            "  {} min • {} • by {} • shared {}",
            plan.duration,
            plan.difficulty,
            plan.creator,
            plan.date_created.format("%Y-%m-%d")
        );
        println!("  {} likes", plan.likes);

        if plan.comments.is_empty() {
            println!("\n  No comments yet.");
        } else {
            println!("\n  Comments:");
            for c in &plan.comments {
                println!("    {} ({}): {}", c.author, c.date.format("%Y-%m-%d"), c.content);
            }
        }
    }

    Ok(())
}

pub fn handle_like(id: String) -> Result<()> {
    let store = open_store();

    let plans = store.load_plans();
    let resolved = resolve_plan(&plans, &id)?.id;

    store.like_plan(resolved);

    let likes = store
        .load_plans()
        .iter()
        .find(|p| p.id == resolved)
        .map(|p| p.likes)
        .unwrap_or(0);
    println!("Liked plan ({}) - {} likes", &resolved.to_string()[..8], likes);

    Ok(())
}

pub fn handle_mark(date: Option<String>) -> Result<()> {
    let store = open_store();
    let day = parse_day(date)?;

    store.toggle_completion(day);

    let done = store
        .load_completions()
        .iter()
        .find(|c| c.date == day)
        .map(|c| c.completed)
        .unwrap_or(false);
    println!("{} marked {}", day, if done { "done" } else { "not done" });

    Ok(())
}

pub fn handle_streak() -> Result<()> {
    let store = open_store();

    let mut completions = store.load_completions();
    completions.sort_by_key(|c| c.date);
    let start = completions.len().saturating_sub(WINDOW_DAYS as usize);
    let recent = &completions[start..];

    let done = recent.iter().filter(|c| c.completed).count();
    println!("Completed {} of the last {} days:\n", done, recent.len());

    for week in recent.chunks(7) {
        let row: Vec<&str> = week
            .iter()
            .map(|c| if c.completed { "■" } else { "·" })
            .collect();
        println!("  {}", row.join(" "));
    }

    if let (Some(first), Some(last)) = (recent.first(), recent.last()) {
        println!("\n  {} to {}", first.date, last.date);
    }

    Ok(())
}

pub fn handle_dashboard(
    health: &dyn HealthSource,
    notifications: &dyn NotificationSource,
    water_ml: u32,
    mood: String,
) -> Result<()> {
    let granted = notifications.request_permission(NotificationOptions::all());
    tracing::debug!(granted, "notification permission");

    let authorized = health.request_authorization();
    let steps = if authorized { health.fetch_today_steps() } else { 0 };

    if authorized {
        println!("Today's Steps: {}", steps);
    } else {
        println!("No health source connected. Set TRAINLOG_STEPS to link one.");
    }

    println!("\n{}", recommendation(steps, water_ml, &mood));

    let mut achievements = default_achievements();
    check_achievements(steps, water_ml, &mut achievements);

    println!("\nAchievements:");
    for a in &achievements {
        println!(
            "  [{}] {} - {}",
            if a.unlocked { "x" } else { " " },
            a.title,
            a.description
        );
    }

    Ok(())
}
