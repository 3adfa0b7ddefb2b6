mod commands;
mod handlers;

pub use commands::{AddCommand, AddEntity, Cli, Commands};
pub use handlers::{
    handle_add_comment, handle_add_plan, handle_dashboard, handle_get, handle_like, handle_list,
    handle_mark, handle_streak,
};
