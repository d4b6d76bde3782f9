//! Route to the view for the resolved identity.

use anyhow::Result;
use tracing::debug;

use crate::commands::{admin, company, jobs, student};
use crate::context::CliContext;
use crate::output::OutputFormat;
use crate::views::{AdminTab, CompanyTab, Route};

pub async fn run(ctx: &CliContext) -> Result<i32> {
    let route = Route::for_identity(&ctx.capabilities());
    debug!(?route, "Routing dashboard");

    if ctx.output.format() == OutputFormat::Table {
        if let Some(user) = ctx.user() {
            ctx.output
                .line(&format!("Welcome, {}\n", user.display_name()))?;
        }
        ctx.output.line(&format!("[{}]\n", route.title()))?;
    }

    match route {
        Route::PublicJobs => jobs::list(ctx).await,
        Route::StudentDashboard => student::applications(ctx).await,
        Route::CompanyDashboard => company::show_tab(ctx, CompanyTab::default()).await,
        Route::AdminDashboard => admin::show_tab(ctx, AdminTab::default()).await,
    }
}
