mod plan_store;
mod slots;

pub use plan_store::PlanStore;
pub use slots::SlotStore;
