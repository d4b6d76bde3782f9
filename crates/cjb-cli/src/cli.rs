//! Command-line definitions for the `cjb` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::context::CliContext;
use crate::output::OutputFormat;

/// cjb - campus job board from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "cjb",
    version,
    about = "Browse and apply to campus jobs, post openings, moderate the board",
    long_about = "Terminal front-end for the campus job board.\n\n\
                  Students browse and apply to jobs, companies post jobs and review \
                  applicants, admins verify companies and approve postings.\n\
                  Run 'cjb login' first; the session is kept between invocations."
)]
pub struct Cli {
    /// Base URL of the job board API
    #[arg(long, global = true, env = "CJB_API_URL")]
    pub api_url: Option<String>,

    /// Directory holding the session file
    #[arg(long, global = true, env = "CJB_SESSION_DIR")]
    pub session_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(commands::auth::LoginArgs),

    /// Create an account (does not log in)
    Register(commands::auth::RegisterArgs),

    /// End the session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Open the dashboard for the logged-in role
    #[command(visible_alias = "d")]
    Dashboard,

    /// Browse and apply to approved jobs
    Jobs(commands::jobs::JobsArgs),

    /// Student views
    Student(commands::student::StudentArgs),

    /// Company views and actions
    Company(commands::company::CompanyArgs),

    /// Admin moderation
    Admin(commands::admin::AdminArgs),
}

/// Positional numeric id shared by several subcommands.
#[derive(Args, Debug, Clone, Copy)]
pub struct IdArg {
    /// Record id
    pub id: u64,
}

/// Run the parsed command.
pub async fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut ctx = match CliContext::new(&cli).await {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    match cli.command {
        Commands::Login(ref args) => commands::auth::login(&mut ctx, args).await,
        Commands::Register(ref args) => commands::auth::register(&ctx, args).await,
        Commands::Logout => commands::auth::logout(&mut ctx).await,
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Dashboard => commands::dashboard::run(&ctx).await,
        Commands::Jobs(ref args) => commands::jobs::run(&ctx, args).await,
        Commands::Student(ref args) => commands::student::run(&ctx, args).await,
        Commands::Company(ref args) => commands::company::run(&ctx, args).await,
        Commands::Admin(ref args) => commands::admin::run(&ctx, args).await,
    }
}

/// Process exit codes.
pub mod exit_codes {
    /// Command completed
    pub const SUCCESS: i32 = 0;
    /// The backend refused the action or the input was invalid
    pub const ACTION_FAILED: i32 = 1;
    /// Configuration or input error
    pub const CONFIG_ERROR: i32 = 2;
    /// Backend unreachable
    pub const NETWORK_ERROR: i32 = 3;
    /// Command needs a logged-in user
    pub const AUTH_REQUIRED: i32 = 5;
    /// Internal error
    pub const INTERNAL_ERROR: i32 = 99;
}
