//! Public job list, job detail and applying.

use anyhow::Result;
use clap::{Args, Subcommand};

use cjb_models::JobId;

use crate::cli::{exit_codes, IdArg};
use crate::commands::{exit_code_for, finish, require_login};
use crate::context::CliContext;
use crate::output::OutputFormat;
use crate::views::JobsListView;

#[derive(Args, Debug)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: Option<JobsCommand>,
}

#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// List approved jobs (default)
    List,
    /// Show one job
    Show(IdArg),
    /// Apply to a job (students)
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Job id
    pub id: u64,

    /// Cover letter text
    #[arg(short, long, default_value = "")]
    pub cover_letter: String,
}

pub async fn run(ctx: &CliContext, args: &JobsArgs) -> Result<i32> {
    match &args.command {
        None | Some(JobsCommand::List) => list(ctx).await,
        Some(JobsCommand::Show(id)) => show(ctx, JobId(id.id)).await,
        Some(JobsCommand::Apply(apply_args)) => apply(ctx, apply_args).await,
    }
}

pub(crate) async fn list(ctx: &CliContext) -> Result<i32> {
    let mut view = JobsListView::new(ctx.api(), ctx.capabilities());
    view.load().await;

    if let Some(banner) = view.banner() {
        return Ok(finish(ctx, Some(&banner)));
    }

    ctx.output.jobs("Available Jobs", view.jobs())?;
    if view.shows_apply() && !view.jobs().is_empty() {
        ctx.output
            .line("\nApply with: cjb jobs apply <id> --cover-letter \"...\"")?;
    }
    Ok(exit_codes::SUCCESS)
}

async fn show(ctx: &CliContext, job_id: JobId) -> Result<i32> {
    match ctx.api().get_job(job_id).await {
        Ok(job) => {
            ctx.output.job(&job)?;
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("✗ {}", e.user_message("Failed to load job"));
            Ok(exit_code_for(&e))
        }
    }
}

async fn apply(ctx: &CliContext, args: &ApplyArgs) -> Result<i32> {
    if let Some(code) = require_login(ctx) {
        return Ok(code);
    }

    let view = JobsListView::new(ctx.api(), ctx.capabilities());
    if let Some(application) = view.apply(JobId(args.id), &args.cover_letter).await {
        if ctx.output.format() == OutputFormat::Json {
            ctx.output.json(&application)?;
        }
    }

    Ok(finish(ctx, view.banner().as_ref()))
}
