//! Detail panel rendering for users and organization jobs

use chrono::Utc;
use colored::Colorize;

use crate::admin::DetailPanel;
use crate::cli::OutputFormat;
use crate::client::models::{Job, OrganizationJobsResponse, User};
use crate::error::Result;
use crate::models::JobDisplay;
use crate::models::display::status_label;
use crate::output::Formattable;
use crate::output::formatters::{
    NONE, format_range, format_relative, format_timestamp_local, or_none,
};
use crate::output::json::format_json_record;

/// Print a user's panel: profile fields, then their jobs if loaded.
pub fn print_user_panel(panel: &DetailPanel<User>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", format_json_record(panel)?);
        return Ok(());
    }

    let user = &panel.entity;
    let status = if user.is_active {
        status_label(true).green()
    } else {
        status_label(false).red()
    };

    println!(
        "{} {}",
        or_none(Some(&user.full_name)).bold(),
        format!("#{}", user.id).dimmed()
    );
    println!("  Email:        {}", user.email);
    println!("  Organization: {}", or_none(user.organization_name.as_deref()));
    println!("  Status:       {}", status);
    println!("  Staff:        {}", if user.is_staff { "yes" } else { "no" });
    println!("  Credits:      {}", user.credit_balance.to_string().bold());
    println!(
        "  Last login:   {}",
        format_relative(user.last_login, Utc::now())
    );
    println!("  Joined:       {}", format_timestamp_local(user.created_at));

    if let Some(ref jobs) = panel.jobs {
        println!();
        print_jobs(jobs, format)?;
    }
    Ok(())
}

/// Print an organization jobs projection.
pub fn print_jobs(response: &OrganizationJobsResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", format_json_record(response)?);
        }
        OutputFormat::Table => {
            let rows: Vec<JobDisplay> = response.jobs.iter().map(JobDisplay::from).collect();
            rows.print(format)?;
        }
        OutputFormat::Pretty => print_jobs_pretty(response),
    }
    Ok(())
}

fn print_jobs_pretty(response: &OrganizationJobsResponse) {
    let org = &response.organization;
    println!(
        "{} {} {}",
        org.name.bold(),
        format!("#{}", org.id).dimmed(),
        or_none(org.domain.as_deref()).dimmed()
    );
    match org.admin {
        Some(ref admin) => println!("  Admin: {} <{}>", admin.full_name, admin.email),
        None => println!("  Admin: {}", NONE),
    }
    println!(
        "  {} jobs · {} candidates",
        response.total_jobs,
        response.total_candidates()
    );

    if response.jobs.is_empty() {
        println!("\n  No jobs posted.");
        return;
    }

    for job in &response.jobs {
        println!();
        print_job(job);
    }
}

fn print_job(job: &Job) {
    println!(
        "{} {} {} · {} · {}",
        "●".cyan(),
        job.title.bold(),
        format!("#{}", job.id).dimmed(),
        or_none(Some(&job.status)),
        or_none(Some(&job.visibility))
    );
    println!(
        "    Workspace: {}  Department: {}  Posted by: {}",
        or_none(Some(&job.workspace_name)),
        or_none(job.department_name.as_deref()),
        or_none(Some(&job.posted_by_name))
    );

    let mut placement = vec![or_none(Some(&job.location.join(", ")))];
    placement.extend(job.work_approach.clone());
    placement.extend(job.seniority.clone());
    println!("    {}", placement.join(" · "));

    let experience = job
        .experience_range
        .as_ref()
        .map(|r| format_range(r.min, r.max))
        .unwrap_or_else(|| NONE.to_string());
    let salary = match job.salary_range {
        Some(ref r) if r.is_confidential => "confidential".to_string(),
        Some(ref r) => {
            let range = format_range(r.min, r.max);
            match r.currency {
                Some(ref currency) if range != NONE => format!("{} {}", range, currency),
                _ => range,
            }
        }
        None => NONE.to_string(),
    };
    println!("    Experience: {}  Salary: {}", experience, salary);

    let stages = job.ordered_stages();
    if stages.is_empty() {
        println!("    Pipeline: {}", NONE);
    } else {
        let pipeline = stages
            .iter()
            .map(|s| format!("{} {}", s.name, s.candidate_count))
            .collect::<Vec<_>>()
            .join(" › ");
        println!(
            "    Pipeline: {} ({} candidates)",
            pipeline,
            job.total_candidates()
        );
    }
    println!(
        "    Created {}  Updated {}",
        format_timestamp_local(job.created_at),
        job.updated_at
            .map(format_timestamp_local)
            .unwrap_or_else(|| NONE.to_string())
    );
}
