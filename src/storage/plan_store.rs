use std::path::Path;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::entity::{synthetic_window, Comment, DailyCompletion, ExercisePlan};
use crate::storage::SlotStore;

const PLANS_SLOT: &str = "sharedPlans";
const COMPLETIONS_SLOT: &str = "dailyCompletions";

/// Persistent store for shared plans and daily completion records.
///
/// The store itself holds no collection state: every operation reads the
/// owning slot, applies the change, and writes the whole collection back
/// before returning. Loads never fail — an absent or undecodable slot
/// degrades to the empty (plans) or synthetic (completions) default, and a
/// failed write is dropped with a warning, leaving memory ahead of disk
/// until the next successful save.
pub struct PlanStore {
    slots: SlotStore,
}

impl PlanStore {
    pub fn new(root: &Path) -> Self {
        Self {
            slots: SlotStore::new(root),
        }
    }

    /// All shared plans, in insertion order. Empty when the slot is absent
    /// or fails to decode.
    pub fn load_plans(&self) -> Vec<ExercisePlan> {
        let Some(bytes) = self.slots.read(PLANS_SLOT) else {
            return Vec::new();
        };

        match serde_json::from_slice(&bytes) {
            Ok(plans) => plans,
            Err(e) => {
                tracing::warn!(slot = PLANS_SLOT, error = %e, "discarding undecodable snapshot");
                Vec::new()
            }
        }
    }

    /// Replace the plans slot with the given collection.
    pub fn save_plans(&self, plans: &[ExercisePlan]) {
        self.save_slot(PLANS_SLOT, plans);
    }

    /// All completion records, oldest first. An absent or undecodable slot
    /// yields a freshly generated 49-day window (not written back).
    pub fn load_completions(&self) -> Vec<DailyCompletion> {
        if let Some(bytes) = self.slots.read(COMPLETIONS_SLOT) {
            match serde_json::from_slice(&bytes) {
                Ok(completions) => return completions,
                Err(e) => {
                    tracing::warn!(
                        slot = COMPLETIONS_SLOT,
                        error = %e,
                        "discarding undecodable snapshot"
                    );
                }
            }
        }

        synthetic_window(Local::now().date_naive(), &mut rand::thread_rng())
    }

    /// Replace the completions slot with the given collection.
    pub fn save_completions(&self, completions: &[DailyCompletion]) {
        self.save_slot(COMPLETIONS_SLOT, completions);
    }

    /// Append a plan and persist the collection.
    pub fn add_plan(&self, plan: ExercisePlan) {
        let mut plans = self.load_plans();
        plans.push(plan);
        self.save_plans(&plans);
    }

    /// Append a comment to the first plan with a matching id and persist.
    /// Unknown ids leave the collection unchanged.
    pub fn add_comment(&self, plan_id: Uuid, comment: Comment) {
        let mut plans = self.load_plans();
        match plans.iter_mut().find(|p| p.id == plan_id) {
            Some(plan) => plan.comments.push(comment),
            None => {
                tracing::warn!(%plan_id, "comment dropped, no such plan");
                return;
            }
        }
        self.save_plans(&plans);
    }

    /// Bump the like counter of the first plan with a matching id and
    /// persist. Unknown ids leave the collection unchanged.
    pub fn like_plan(&self, plan_id: Uuid) {
        let mut plans = self.load_plans();
        match plans.iter_mut().find(|p| p.id == plan_id) {
            Some(plan) => plan.likes += 1,
            None => {
                tracing::warn!(%plan_id, "like dropped, no such plan");
                return;
            }
        }
        self.save_plans(&plans);
    }

    /// Flip the completion flag for a calendar day and persist. Days with
    /// no record yet get a new one marked completed.
    pub fn toggle_completion(&self, day: NaiveDate) {
        let mut completions = self.load_completions();
        match completions.iter_mut().find(|c| c.date == day) {
            Some(record) => record.completed = !record.completed,
            None => completions.push(DailyCompletion::new(day, true)),
        }
        self.save_completions(&completions);
    }

    fn save_slot<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) {
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(slot = key, error = %e, "dropping unserializable snapshot");
                return;
            }
        };

        if let Err(e) = self.slots.write(key, &bytes) {
            tracing::warn!(slot = key, error = %e, "dropping failed slot write");
        }
    }
}
