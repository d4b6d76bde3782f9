//! Admin moderation: company verification, job approval, all applications.

use anyhow::Result;
use clap::{Args, Subcommand};

use cjb_models::{JobAction, JobId, UserId};

use crate::cli::{exit_codes, IdArg};
use crate::commands::{finish, require_login};
use crate::context::CliContext;
use crate::output::OutputFormat;
use crate::views::{AdminDashboard, AdminTab};

#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: Option<AdminCommand>,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Companies pending verification (default)
    Companies,
    /// Verify a company
    Verify(IdArg),
    /// Jobs pending approval
    Jobs,
    /// Approve a pending job
    Approve(IdArg),
    /// Reject a pending job
    Reject(IdArg),
    /// Every application on the board
    Applications,
}

pub async fn run(ctx: &CliContext, args: &AdminArgs) -> Result<i32> {
    if let Some(code) = require_login(ctx) {
        return Ok(code);
    }

    match &args.command {
        None | Some(AdminCommand::Companies) => show_tab(ctx, AdminTab::Companies).await,
        Some(AdminCommand::Jobs) => show_tab(ctx, AdminTab::Jobs).await,
        Some(AdminCommand::Applications) => show_tab(ctx, AdminTab::Applications).await,
        Some(AdminCommand::Verify(id)) => verify(ctx, UserId(id.id)).await,
        Some(AdminCommand::Approve(id)) => decide(ctx, JobId(id.id), JobAction::Approve).await,
        Some(AdminCommand::Reject(id)) => decide(ctx, JobId(id.id), JobAction::Reject).await,
    }
}

fn render(ctx: &CliContext, view: &AdminDashboard) -> Result<()> {
    match view.tab() {
        AdminTab::Companies => ctx
            .output
            .companies("Companies Pending Verification", view.companies()),
        AdminTab::Jobs => ctx.output.jobs("Jobs Pending Approval", view.pending_jobs()),
        AdminTab::Applications => ctx
            .output
            .applications("All Applications", view.applications()),
    }
}

pub(crate) async fn show_tab(ctx: &CliContext, tab: AdminTab) -> Result<i32> {
    let mut view = AdminDashboard::new(ctx.api(), ctx.capabilities());
    view.select_tab(tab).await;

    if view.banner().is_some() {
        return Ok(finish(ctx, view.banner()));
    }

    render(ctx, &view)?;
    Ok(exit_codes::SUCCESS)
}

async fn verify(ctx: &CliContext, company_id: UserId) -> Result<i32> {
    let mut view = AdminDashboard::new(ctx.api(), ctx.capabilities());

    if let Some(company) = view.verify_company(company_id).await {
        match ctx.output.format() {
            OutputFormat::Json => ctx.output.json(&company)?,
            OutputFormat::Table => render(ctx, &view)?,
        }
    }

    Ok(finish(ctx, view.banner()))
}

async fn decide(ctx: &CliContext, job_id: JobId, action: JobAction) -> Result<i32> {
    let mut view = AdminDashboard::new(ctx.api(), ctx.capabilities()).with_tab(AdminTab::Jobs);

    if let Some(job) = view.decide_job(job_id, action).await {
        match ctx.output.format() {
            OutputFormat::Json => ctx.output.json(&job)?,
            OutputFormat::Table => render(ctx, &view)?,
        }
    }

    Ok(finish(ctx, view.banner()))
}
