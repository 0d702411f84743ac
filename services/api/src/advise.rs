use chrono::NaiveDate;
use clap::Args;
use milreg::config::AppConfig;
use milreg::error::AppError;
use milreg::records::{import, AdvisoryService, BatchAdviceView, BatchEntry, CatalogView};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AdviseArgs {
    /// Person records: a JSON object or array, or a CSV export with field-name headers
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Reference date for the checks (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the batch result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Print the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn configured_service() -> Result<AdvisoryService, AppError> {
    let config = AppConfig::load()?;
    Ok(AdvisoryService::new(config.advisor.catalog()?))
}

pub(crate) fn run_advise(args: AdviseArgs) -> Result<(), AppError> {
    let AdviseArgs { input, today, json } = args;

    let service = configured_service()?;
    let submissions = import::from_path(&input)?;
    let today = today.unwrap_or_else(AdvisoryService::today);
    let view = service.advise_batch(&submissions, today);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &view).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_batch(&mut out, &view)?;
    }
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let view = configured_service()?.catalog_view();

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &view).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_catalog(&mut out, &view)?;
    }
    Ok(())
}

fn person_label(person: &str) -> &str {
    if person.is_empty() {
        "(без імені)"
    } else {
        person
    }
}

pub(crate) fn render_batch<W: Write>(out: &mut W, view: &BatchAdviceView) -> io::Result<()> {
    writeln!(
        out,
        "Рекомендації на {} (каталог {})",
        view.evaluated_on.format("%d.%m.%Y"),
        view.revision
    )?;

    for (index, entry) in view.results.iter().enumerate() {
        writeln!(out)?;
        match entry {
            BatchEntry::Advised {
                person,
                recommendations,
            } => {
                writeln!(out, "{}. {}", index + 1, person_label(person))?;
                for recommendation in recommendations {
                    writeln!(out, "   - {recommendation}")?;
                }
            }
            BatchEntry::Rejected { person, error } => {
                writeln!(out, "{}. {}", index + 1, person_label(person))?;
                writeln!(out, "   ! {error}")?;
            }
        }
    }

    let rejected = view
        .results
        .iter()
        .filter(|entry| entry.is_rejected())
        .count();
    if rejected > 0 {
        writeln!(out, "\n{rejected} of {} records rejected", view.results.len())?;
    }
    Ok(())
}

pub(crate) fn render_catalog<W: Write>(out: &mut W, view: &CatalogView) -> io::Result<()> {
    writeln!(out, "Catalog revision {}", view.revision)?;
    for rule in &view.rules {
        writeln!(out, "{:>3}. {}", rule.position, rule.id)?;
    }
    Ok(())
}
