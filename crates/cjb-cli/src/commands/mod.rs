//! Command handlers. Each returns the process exit code.

pub mod admin;
pub mod auth;
pub mod company;
pub mod dashboard;
pub mod jobs;
pub mod student;

use cjb_client::ClientError;

use crate::cli::exit_codes;
use crate::context::CliContext;
use crate::views::Banner;

/// Print the view's banner, if any, and map it to an exit code.
pub(crate) fn finish(ctx: &CliContext, banner: Option<&Banner>) -> i32 {
    match banner {
        Some(banner) => {
            ctx.output.banner(banner);
            if banner.is_error() {
                exit_codes::ACTION_FAILED
            } else {
                exit_codes::SUCCESS
            }
        }
        None => exit_codes::SUCCESS,
    }
}

/// Exit early unless someone is logged in.
pub(crate) fn require_login(ctx: &CliContext) -> Option<i32> {
    if ctx.auth.current_user().is_some() {
        return None;
    }
    eprintln!("Not logged in. Run 'cjb login' first.");
    Some(exit_codes::AUTH_REQUIRED)
}

pub(crate) fn exit_code_for(err: &ClientError) -> i32 {
    if err.is_network() {
        exit_codes::NETWORK_ERROR
    } else if err.is_auth_failure() {
        exit_codes::AUTH_REQUIRED
    } else {
        exit_codes::ACTION_FAILED
    }
}
