use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::exit_codes;
use crate::commands::{finish, require_login};
use crate::context::CliContext;
use crate::views::StudentDashboard;

#[derive(Args, Debug)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: Option<StudentCommand>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum StudentCommand {
    /// List your applications (default)
    Applications,
}

pub async fn run(ctx: &CliContext, args: &StudentArgs) -> Result<i32> {
    match args.command.unwrap_or(StudentCommand::Applications) {
        StudentCommand::Applications => applications(ctx).await,
    }
}

pub(crate) async fn applications(ctx: &CliContext) -> Result<i32> {
    if let Some(code) = require_login(ctx) {
        return Ok(code);
    }

    let mut view = StudentDashboard::new(ctx.api());
    view.load().await;

    if view.banner().is_some() {
        return Ok(finish(ctx, view.banner()));
    }

    ctx.output.applications("My Applications", view.applications())?;
    Ok(exit_codes::SUCCESS)
}
