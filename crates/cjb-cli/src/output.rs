//! Terminal rendering of jobs, applications, users and banners.

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use cjb_models::timestamp::display_timestamp;
use cjb_models::{Application, Job, Status, User};

use crate::views::{Banner, BannerKind};

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing (default)
    #[default]
    Table,
    /// JSON for machine processing
    Json,
}

/// Writes command results to stdout and banners to stderr.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.line(&rendered)
    }

    pub fn line(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)?;
        Ok(())
    }

    pub fn header(&self, title: &str) -> Result<()> {
        self.line(&format!("{}\n{}", title, "=".repeat(title.chars().count())))
    }

    pub fn banner(&self, banner: &Banner) {
        let prefix = match banner.kind {
            BannerKind::Success => "✓",
            BannerKind::Error => "✗",
        };
        eprintln!("{} {}", prefix, banner.text);
    }

    /// Render `items` as JSON or through `render` as a table.
    fn list<T: Serialize>(
        &self,
        title: &str,
        empty: &str,
        items: &[T],
        render: impl Fn(&T, bool) -> String,
    ) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(items);
        }
        self.header(title)?;
        if items.is_empty() {
            return self.line(empty);
        }
        for item in items {
            self.line(&render(item, self.color))?;
        }
        Ok(())
    }

    pub fn jobs(&self, title: &str, jobs: &[Job]) -> Result<()> {
        self.list(title, "No jobs found.", jobs, render_job)
    }

    pub fn job(&self, job: &Job) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(job),
            OutputFormat::Table => self.line(&render_job_detail(job, self.color)),
        }
    }

    pub fn applications(&self, title: &str, applications: &[Application]) -> Result<()> {
        self.list(
            title,
            "No applications found.",
            applications,
            render_application,
        )
    }

    pub fn companies(&self, title: &str, companies: &[User]) -> Result<()> {
        self.list(title, "No companies pending verification.", companies, |c, _| {
            render_company(c)
        })
    }

    pub fn user(&self, user: &User) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.json(user),
            OutputFormat::Table => self.line(&render_user(user)),
        }
    }
}

/// Status badge: the raw status text in one of three colors.
pub fn badge(status: &Status, color: bool) -> String {
    if color {
        format!(
            "\x1b[{}m[{}]\x1b[0m",
            status.badge().ansi_color(),
            status.as_str()
        )
    } else {
        format!("[{}]", status.as_str())
    }
}

pub fn render_job(job: &Job, color: bool) -> String {
    let mut line = format!(
        "#{:<4} {} {} - {} | {} | {}",
        job.id.0,
        badge(&job.status, color),
        job.title,
        job.company_name,
        job.job_type.label(),
        job.location
    );
    if let Some(deadline) = job.deadline.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" | deadline {}", deadline));
    }
    line
}

pub fn render_job_detail(job: &Job, color: bool) -> String {
    let mut lines = vec![
        format!("{} {}", job.title, badge(&job.status, color)),
        format!("Company:     {}", job.company_name),
        format!("Type:        {}", job.job_type.label()),
        format!("Location:    {}", job.location),
    ];
    if let Some(deadline) = job.deadline.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Deadline:    {}", deadline));
    }
    if let Some(created) = &job.created_at {
        lines.push(format!("Posted:      {}", display_timestamp(created)));
    }
    lines.push(String::new());
    lines.push(job.description.clone());
    if let Some(requirements) = job.requirements.as_deref().filter(|r| !r.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Requirements: {}", requirements));
    }
    lines.join("\n")
}

pub fn render_application(application: &Application, color: bool) -> String {
    let title = application.job_title().unwrap_or("(job removed)");
    let mut line = format!(
        "#{:<4} {} {}",
        application.id.0,
        badge(&application.status, color),
        title
    );
    if let Some(job) = &application.job {
        line.push_str(&format!(" - {}", job.company_name));
    }
    if !application.student_name.is_empty() {
        line.push_str(&format!(" | {}", application.student_name));
    }
    if let Some(applied) = &application.applied_at {
        line.push_str(&format!(" | applied {}", display_timestamp(applied)));
    }
    let letter = application.cover_letter.trim();
    if !letter.is_empty() {
        line.push_str(&format!("\n      Cover letter: {}", letter));
    }
    line
}

pub fn render_company(company: &User) -> String {
    let mut line = format!(
        "#{:<4} {} <{}>",
        company.id.0,
        company.company_name.as_deref().unwrap_or("-"),
        company.email
    );
    if let Some(description) = company.company_description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" | {}", description));
    }
    line
}

pub fn render_user(user: &User) -> String {
    let mut lines = vec![
        format!("Welcome, {}", user.display_name()),
        format!("Email: {}", user.email),
        format!("Role:  {}", user.role),
    ];
    if let Some(college) = &user.college {
        lines.push(format!("College: {}", college));
    }
    if let Some(year) = &user.graduation_year {
        lines.push(format!("Graduation year: {}", year));
    }
    if user.is_company() {
        lines.push(format!(
            "Verified: {}",
            if user.verified { "yes" } else { "no" }
        ));
    }
    lines.join("\n")
}
