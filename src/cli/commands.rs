use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trainlog")]
#[command(version, about = "Local-first exercise plan sharing and daily habit tracking")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a plan or a comment
    Add(AddCommand),

    /// List shared plans or completion records
    List {
        /// What to list (plans, completions)
        #[arg(value_name = "WHAT")]
        what: Option<String>,

        /// Only show plans in this category (fitness, health, lose-fat)
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single plan with its comments
    Get {
        /// Plan id (full UUID or unique prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Like a plan
    Like {
        /// Plan id (full UUID or unique prefix)
        id: String,
    },

    /// Toggle a day's completion mark
    Mark {
        /// Day to toggle, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Render the recent completion grid
    Streak,

    /// Today's steps, recommendation, and achievements
    Dashboard {
        /// Water intake so far today, in ml
        #[arg(long, default_value_t = 0)]
        water: u32,

        /// Current mood emoji
        #[arg(long, default_value = "😊")]
        mood: String,
    },
}

#[derive(Args, Debug)]
pub struct AddCommand {
    #[command(subcommand)]
    pub entity: AddEntity,
}

#[derive(Subcommand, Debug)]
pub enum AddEntity {
    /// Share a new exercise plan
    Plan {
        /// Plan title
        title: String,

        /// What the plan involves
        #[arg(long, short = 'd')]
        description: String,

        /// Category (fitness, health, lose-fat)
        #[arg(long, default_value = "fitness")]
        category: String,

        /// Duration in minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,

        /// Difficulty (Beginner, Intermediate, Advanced)
        #[arg(long, default_value = "Beginner")]
        difficulty: String,

        /// Who is sharing the plan
        #[arg(long, default_value = "User")]
        creator: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Comment on an existing plan
    Comment {
        /// Plan id (full UUID or unique prefix)
        plan_id: String,

        /// Comment text
        content: String,

        /// Comment author
        #[arg(long, default_value = "User")]
        author: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
