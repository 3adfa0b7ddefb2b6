mod completion;
mod plan;

pub use completion::{synthetic_window, DailyCompletion, WINDOW_DAYS};
pub use plan::{Comment, ExercisePlan, PlanCategory};
