use crate::infra::{parse_instant, sample_leads, InMemoryLeadStore};
use chrono::{Local, NaiveDateTime};
use clap::Args;
use leasing_ai::config::AppConfig;
use leasing_ai::error::AppError;
use leasing_ai::workflows::leads::{
    bulk_score, conversion_factors, plan, BulkScoreResult, ConversionReport, Lead, LeadServiceError,
    ScoringEngine,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct LeadFileArgs {
    /// JSON file holding a single lead or an array of leads
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Evaluate as of this instant (YYYY-MM-DD or ISO-8601). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<NaiveDateTime>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluate as of this instant (YYYY-MM-DD or ISO-8601). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<NaiveDateTime>,
    /// Skip the follow-up planning portion of the demo.
    #[arg(long)]
    pub(crate) skip_follow_up: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LeadBatch {
    Many(Vec<Lead>),
    One(Box<Lead>),
}

fn parse_leads(raw: &str) -> Result<Vec<Lead>, serde_json::Error> {
    Ok(match serde_json::from_str::<LeadBatch>(raw)? {
        LeadBatch::Many(leads) => leads,
        LeadBatch::One(lead) => vec![*lead],
    })
}

fn read_leads(path: &Path) -> Result<Vec<Lead>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_leads(&raw)?)
}

fn resolve_now(now: Option<NaiveDateTime>) -> NaiveDateTime {
    now.unwrap_or_else(|| Local::now().naive_local())
}

pub(crate) fn run_lead_scoring(args: LeadFileArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let leads = read_leads(&args.input)?;
    let now = resolve_now(args.now);

    let engine = ScoringEngine::new(config.scoring);
    let batch = bulk_score(&engine, &leads, now);
    render_scores(&batch, leads.len(), now);
    Ok(())
}

pub(crate) fn run_follow_up_plan(args: LeadFileArgs) -> Result<(), AppError> {
    let leads = read_leads(&args.input)?;
    let now = resolve_now(args.now);

    println!("Follow-up plan as of {}", now.format("%Y-%m-%d %H:%M"));
    render_follow_ups(&leads, now);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        now,
        skip_follow_up,
    } = args;
    let config = AppConfig::load()?;
    let now = resolve_now(now);
    let leads = sample_leads();

    println!("Lead intelligence demo");
    let engine = ScoringEngine::new(config.scoring);
    let batch = bulk_score(&engine, &leads, now);
    render_scores(&batch, leads.len(), now);

    if !skip_follow_up {
        println!("\nRecommended follow-ups");
        render_follow_ups(&leads, now);
    }

    let store = InMemoryLeadStore::seeded(&leads);
    let report = conversion_factors(&store).map_err(LeadServiceError::from)?;
    render_conversion_report(&report);
    Ok(())
}

fn render_scores(batch: &BulkScoreResult, submitted: usize, now: NaiveDateTime) {
    println!(
        "Scored {} of {} leads as of {}",
        batch.scores.len(),
        submitted,
        now.format("%Y-%m-%d %H:%M")
    );
    println!(
        "- priorities: {} high | {} medium | {} low",
        batch.high_priority_count, batch.medium_priority_count, batch.low_priority_count
    );
    for result in &batch.scores {
        println!(
            "  - {} [{:?}] score {}: {}",
            result.lead_id.0, result.priority, result.score, result.recommended_action
        );
        println!(
            "    urgency {:.1} | engagement {:.1} | completeness {:.1} | demand {:.1}",
            result.factors.urgency,
            result.factors.engagement,
            result.factors.completeness,
            result.factors.demand
        );
    }
}

fn render_follow_ups(leads: &[Lead], now: NaiveDateTime) {
    for lead in leads {
        match plan(lead, now) {
            Ok(result) => {
                println!(
                    "  - {} ({}): {:?}, respond {}",
                    result.lead_id.0,
                    lead.name,
                    result.urgency_level,
                    result.response_window.to_lowercase()
                );
                println!("    method: {}", result.recommended_method);
                println!("    windows: {}", result.best_call_times.join(" | "));
            }
            Err(err) => println!("  - {} ({}): skipped, {}", lead.id.0, lead.name, err),
        }
    }
}

fn render_conversion_report(report: &ConversionReport) {
    println!(
        "\nConversion snapshot: {} leads | {:.1}% converted",
        report.total_leads, report.conversion_rate
    );
    for (status, count) in &report.by_status {
        println!("  - {status}: {count}");
    }
    println!("By unit type:");
    for (unit_type, count) in &report.by_unit_type {
        println!("  - {unit_type}: {count}");
    }
}
