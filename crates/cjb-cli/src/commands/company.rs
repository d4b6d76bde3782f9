//! Company postings and applicant review.

use anyhow::Result;
use clap::{Args, Subcommand};

use cjb_models::{ApplicationId, JobType, NewJob, Status};

use crate::cli::{exit_codes, IdArg};
use crate::commands::{finish, require_login};
use crate::context::CliContext;
use crate::output::OutputFormat;
use crate::views::{CompanyDashboard, CompanyTab};

#[derive(Args, Debug)]
pub struct CompanyArgs {
    #[command(subcommand)]
    pub command: Option<CompanyCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CompanyCommand {
    /// List your job postings (default)
    Jobs,
    /// Post a new job for admin approval
    Post(PostJobArgs),
    /// List applications to your jobs
    Applications,
    /// Approve a pending application
    Approve(IdArg),
    /// Reject a pending application
    Reject(IdArg),
}

#[derive(Args, Debug)]
pub struct PostJobArgs {
    #[arg(long)]
    pub title: String,

    /// full_time, part_time, internship or contract
    #[arg(long = "type", default_value = "internship")]
    pub job_type: JobType,

    #[arg(long)]
    pub description: String,

    #[arg(long, default_value = "")]
    pub requirements: String,

    #[arg(long)]
    pub location: String,

    /// Application deadline (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,
}

impl PostJobArgs {
    pub fn to_new_job(&self) -> NewJob {
        NewJob::new(
            self.title.trim(),
            self.job_type.clone(),
            self.description.trim(),
            self.location.trim(),
        )
        .with_requirements(self.requirements.trim())
        .with_deadline(self.deadline.clone().filter(|d| !d.trim().is_empty()))
    }
}

pub async fn run(ctx: &CliContext, args: &CompanyArgs) -> Result<i32> {
    if let Some(code) = require_login(ctx) {
        return Ok(code);
    }

    match &args.command {
        None | Some(CompanyCommand::Jobs) => show_tab(ctx, CompanyTab::Jobs).await,
        Some(CompanyCommand::Applications) => show_tab(ctx, CompanyTab::Applications).await,
        Some(CompanyCommand::Post(post)) => post_job(ctx, post).await,
        Some(CompanyCommand::Approve(id)) => {
            decide(ctx, ApplicationId(id.id), Status::Approved).await
        }
        Some(CompanyCommand::Reject(id)) => {
            decide(ctx, ApplicationId(id.id), Status::Rejected).await
        }
    }
}

pub(crate) async fn show_tab(ctx: &CliContext, tab: CompanyTab) -> Result<i32> {
    let mut view = CompanyDashboard::new(ctx.api(), ctx.capabilities());

    if view.needs_verification() && ctx.output.format() == OutputFormat::Table {
        ctx.output.line(
            "Account verification required: an admin must verify your company \
             before you can post jobs.\n",
        )?;
    }

    view.select_tab(tab).await;
    if view.banner().is_some() {
        return Ok(finish(ctx, view.banner()));
    }

    match tab {
        CompanyTab::Jobs => ctx.output.jobs("My Job Postings", view.jobs())?,
        CompanyTab::Applications => ctx
            .output
            .applications("Applications Received", view.applications())?,
    }
    Ok(exit_codes::SUCCESS)
}

async fn post_job(ctx: &CliContext, args: &PostJobArgs) -> Result<i32> {
    let mut view = CompanyDashboard::new(ctx.api(), ctx.capabilities());

    if let Some(job) = view.post_job(&args.to_new_job()).await {
        match ctx.output.format() {
            OutputFormat::Json => ctx.output.json(&job)?,
            OutputFormat::Table => ctx.output.jobs("My Job Postings", view.jobs())?,
        }
    }

    Ok(finish(ctx, view.banner()))
}

async fn decide(ctx: &CliContext, application_id: ApplicationId, status: Status) -> Result<i32> {
    let mut view = CompanyDashboard::new(ctx.api(), ctx.capabilities());
    if ctx.capabilities().can_review_applications() {
        view.select_tab(CompanyTab::Applications).await;
    }

    if let Some(application) = view.update_application_status(application_id, status).await {
        if ctx.output.format() == OutputFormat::Json {
            ctx.output.json(&application)?;
        }
    }

    Ok(finish(ctx, view.banner()))
}
