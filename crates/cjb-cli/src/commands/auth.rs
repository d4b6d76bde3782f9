//! login, register, logout and whoami.

use anyhow::Result;
use clap::Args;

use cjb_models::{RegisterProfile, RegisterRequest, Role};

use crate::cli::exit_codes;
use crate::context::CliContext;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long, env = "CJB_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub email: String,

    #[arg(short, long, env = "CJB_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// student, company or admin
    #[arg(short, long, default_value = "student")]
    pub role: Role,

    /// Full name (students)
    #[arg(long)]
    pub name: Option<String>,

    /// College (students)
    #[arg(long)]
    pub college: Option<String>,

    /// Graduation year (students)
    #[arg(long)]
    pub graduation_year: Option<String>,

    /// Company name (companies)
    #[arg(long)]
    pub company_name: Option<String>,

    /// Company description (companies)
    #[arg(long)]
    pub company_description: Option<String>,
}

impl RegisterArgs {
    /// Merge the role-specific fields into a registration request.
    pub fn to_request(&self) -> RegisterRequest {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let profile = match self.role {
            Role::Student => RegisterProfile::Student {
                name: text(&self.name),
                college: text(&self.college),
                graduation_year: text(&self.graduation_year),
            },
            Role::Company => RegisterProfile::Company {
                company_name: text(&self.company_name),
                company_description: text(&self.company_description),
            },
            Role::Admin => RegisterProfile::Admin,
        };

        RegisterRequest::new(self.email.trim(), self.password.clone(), profile)
    }
}

pub async fn login(ctx: &mut CliContext, args: &LoginArgs) -> Result<i32> {
    match ctx.auth.login(args.email.trim(), args.password.clone()).await {
        Ok(user) => {
            match ctx.output.format() {
                OutputFormat::Json => ctx.output.json(&user)?,
                OutputFormat::Table => {
                    ctx.output.line(&format!("Logged in as {} ({})", user.display_name(), user.role))?
                }
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(failure) => {
            eprintln!("✗ {}", failure);
            Ok(exit_codes::AUTH_REQUIRED)
        }
    }
}

pub async fn register(ctx: &CliContext, args: &RegisterArgs) -> Result<i32> {
    let request = args.to_request();

    match ctx.auth.register(&request).await {
        Ok(response) => {
            match ctx.output.format() {
                OutputFormat::Json => ctx.output.json(&response.user)?,
                OutputFormat::Table => {
                    ctx.output.line(&format!(
                        "Registered {} as {}. Log in with 'cjb login'.",
                        response.user.email, response.user.role
                    ))?;
                    if response.user.is_company() && !response.user.verified {
                        ctx.output
                            .line("An admin must verify the company before it can post jobs.")?;
                    }
                }
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(failure) => {
            eprintln!("✗ {}", failure);
            Ok(exit_codes::ACTION_FAILED)
        }
    }
}

pub async fn logout(ctx: &mut CliContext) -> Result<i32> {
    ctx.auth.logout().await;
    ctx.output.line("Logged out")?;
    Ok(exit_codes::SUCCESS)
}

pub fn whoami(ctx: &CliContext) -> Result<i32> {
    match ctx.user() {
        Some(user) => {
            ctx.output.user(user)?;
            Ok(exit_codes::SUCCESS)
        }
        None => {
            eprintln!("Not logged in");
            Ok(exit_codes::AUTH_REQUIRED)
        }
    }
}
