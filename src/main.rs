use clap::Parser;
use tracing_subscriber::EnvFilter;

use trainlog::cli::{
    handle_add_comment, handle_add_plan, handle_dashboard, handle_get, handle_like, handle_list,
    handle_mark, handle_streak, AddEntity, Cli, Commands,
};
use trainlog::health::{EnvHealth, StubNotifications};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(add) => match add.entity {
            AddEntity::Plan {
                title,
                description,
                category,
                duration,
                difficulty,
                creator,
                json,
            } => handle_add_plan(title, description, category, duration, difficulty, creator, json),
            AddEntity::Comment {
                plan_id,
                content,
                author,
                json,
            } => handle_add_comment(plan_id, content, author, json),
        },
        Commands::List {
            what,
            category,
            json,
        } => handle_list(what, category, json),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::Like { id } => handle_like(id),
        Commands::Mark { date } => handle_mark(date),
        Commands::Streak => handle_streak(),
        Commands::Dashboard { water, mood } => {
            handle_dashboard(&EnvHealth, &StubNotifications, water, mood)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
