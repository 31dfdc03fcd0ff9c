use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use time::{Date, OffsetDateTime, macros::format_description};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use salesboard::core::db::{ProspectRepository, ReportRepository};
use salesboard::core::forms::{ProspectForm, ReportForm, parse_count};
use salesboard::guideline;
use salesboard::outreach::{
    DEFAULT_AGENCY, DEFAULT_MODEL, GeminiClient, OutreachOutcome, request_outreach,
};
use salesboard::{LocalStorage, MemoryStorage, ProspectStatus, SqliteStorage, Workspace};

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "Track prospects, daily reports and due follow-ups")]
struct Cli {
    /// Path to the store file
    #[arg(long, env = "SALESBOARD_STORE", default_value = "salesboard.db", global = true)]
    store: PathBuf,

    /// Keep all data in memory for this run
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's counters and the prospects due for a follow-up
    Dashboard {
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// Manage prospects
    #[command(subcommand)]
    Prospects(ProspectCommand),
    /// Submit and review daily reports
    #[command(subcommand)]
    Reports(ReportCommand),
    /// Draft an outreach message for a prospect
    Outreach(OutreachArgs),
    /// Print the salesperson guideline
    Guideline {
        /// Show only this section (1-4)
        #[arg(long)]
        section: Option<usize>,

        /// Agency named in the sales script
        #[arg(long, default_value = DEFAULT_AGENCY)]
        agency: String,
    },
}

#[derive(Subcommand)]
enum ProspectCommand {
    List,
    Add(ProspectFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: ProspectFields,
    },
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct ProspectFields {
    #[arg(long)]
    business_name: Option<String>,
    #[arg(long)]
    contact_person: Option<String>,
    #[arg(long)]
    contact_info: Option<String>,
    /// Prospecting, Contacted, Qualified, Pitched, Closed or Cold
    #[arg(long)]
    status: Option<ProspectStatus>,
    /// Date of the most recent outreach (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    last_contact: Option<Date>,
    #[arg(long)]
    notes: Option<String>,
}

impl ProspectFields {
    fn apply(self, form: &mut ProspectForm) {
        if let Some(v) = self.business_name {
            form.set_business_name(v);
        }
        if let Some(v) = self.contact_person {
            form.set_contact_person(v);
        }
        if let Some(v) = self.contact_info {
            form.set_contact_info(v);
        }
        if let Some(v) = self.status {
            form.set_status(v);
        }
        if let Some(v) = self.last_contact {
            form.set_last_contact_date(v);
        }
        if let Some(v) = self.notes {
            form.set_notes(v);
        }
    }
}

#[derive(Subcommand)]
enum ReportCommand {
    List {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    Add(ReportFields),
}

#[derive(Args)]
struct ReportFields {
    /// Day the report covers (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<Date>,
    #[arg(long, default_value = "0")]
    contacted: String,
    #[arg(long, default_value = "0")]
    follow_ups: String,
    #[arg(long, default_value = "0")]
    positive: String,
    #[arg(long, default_value = "0")]
    calls: String,
    #[arg(long, default_value = "0")]
    closed: String,
    #[arg(long, default_value = "")]
    challenges: String,
    #[arg(long, default_value = "")]
    plan: String,
}

#[derive(Args)]
struct OutreachArgs {
    /// Prospect id
    id: String,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Agency the message is written for
    #[arg(long, default_value = DEFAULT_AGENCY)]
    agency: String,
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "salesboard=debug"
    } else {
        "salesboard=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    // The guideline is static text; don't open the store for it.
    let command = match args.command {
        Command::Guideline { section, agency } => return print_guideline(&agency, section),
        command => command,
    };

    let today = OffsetDateTime::now_utc().date();

    if args.ephemeral {
        let mut workspace = Workspace::load(MemoryStorage::new(), today).await;
        run(&mut workspace, command, today).await
    } else {
        let storage = SqliteStorage::open(&args.store).await?;
        let mut workspace = Workspace::load(storage, today).await;
        let result = run(&mut workspace, command, today).await;
        workspace.into_storage().close().await?;
        result
    }
}

async fn run<S: LocalStorage>(
    workspace: &mut Workspace<S>,
    command: Command,
    today: Date,
) -> anyhow::Result<()> {
    match command {
        Command::Dashboard { today: as_of } => {
            print_dashboard(workspace, as_of.unwrap_or(today));
        }
        Command::Prospects(ProspectCommand::List) => {
            let prospects = workspace.get_prospects();
            if prospects.is_empty() {
                println!("No prospects yet.");
            }
            for p in prospects {
                println!(
                    "{:<38} {:<24} {:<18} {:<12} {}",
                    p.id,
                    p.business_name,
                    p.contact_info,
                    p.status,
                    p.last_contact_date
                );
            }
        }
        Command::Prospects(ProspectCommand::Add(fields)) => {
            let mut form = ProspectForm::new(today);
            fields.apply(&mut form);
            let prospect = workspace.add_prospect(form.validate()?).await;
            println!("Added prospect {} ({})", prospect.business_name, prospect.id);
        }
        Command::Prospects(ProspectCommand::Edit { id, fields }) => {
            let Some(existing) = workspace.get_prospect_by_id(&id) else {
                anyhow::bail!("No prospect with id {}", id);
            };
            let mut form = ProspectForm::from_prospect(existing);
            fields.apply(&mut form);
            let prospect = workspace.update_prospect(&id, form.validate()?).await?;
            println!("Updated prospect {} ({})", prospect.business_name, prospect.id);
        }
        Command::Prospects(ProspectCommand::Delete { id, yes }) => {
            if !yes {
                println!("Pass --yes to delete prospect {}", id);
            } else if workspace.delete_prospect(&id).await {
                println!("Deleted prospect {}", id);
            } else {
                println!("No prospect with id {}", id);
            }
        }
        Command::Reports(ReportCommand::List { limit }) => {
            let reports = workspace.get_recent_reports(limit);
            if reports.is_empty() {
                println!("No reports submitted yet.");
            }
            for r in reports {
                println!(
                    "{}  contacted {}  follow-ups {}  positive {}  calls {}  closed {}",
                    r.date,
                    r.contacted,
                    r.follow_ups,
                    r.positive,
                    r.calls,
                    r.closed
                );
                if !r.challenges.is_empty() {
                    println!("    challenges: {}", r.challenges);
                }
                if !r.plan.is_empty() {
                    println!("    plan: {}", r.plan);
                }
            }
        }
        Command::Reports(ReportCommand::Add(fields)) => {
            let mut form = ReportForm::new(today);
            if let Some(date) = fields.date {
                form.set_date(date);
            }
            form.set_contacted(parse_count(&fields.contacted))
                .set_follow_ups(parse_count(&fields.follow_ups))
                .set_positive(parse_count(&fields.positive))
                .set_calls(parse_count(&fields.calls))
                .set_closed(parse_count(&fields.closed))
                .set_challenges(fields.challenges)
                .set_plan(fields.plan);
            let report = workspace.add_report(form.submit()).await;
            println!("Report for {} submitted", report.date);
        }
        Command::Outreach(outreach) => {
            let Some(prospect) = workspace.get_prospect_by_id(&outreach.id) else {
                anyhow::bail!("No prospect with id {}", outreach.id);
            };
            let client = GeminiClient::new(outreach.api_key, outreach.model, outreach.agency)?;
            match request_outreach(&client, prospect).await {
                OutreachOutcome::Generated { message } => println!("{}", message),
                OutreachOutcome::Failed { reason } => eprintln!("{}", reason),
            }
        }
        Command::Guideline { section, agency } => print_guideline(&agency, section)?,
    }
    Ok(())
}

fn print_dashboard<S: LocalStorage>(workspace: &Workspace<S>, today: Date) {
    let dashboard = workspace.dashboard(today.midnight().assume_utc());

    println!("=== Daily Dashboard ({}) ===", today);
    println!("Prospects contacted today: {}", dashboard.contacted_today);
    println!("Follow-ups due today:      {}", dashboard.follow_ups_due.len());
    println!("Deals closed this month:   {}", dashboard.closed_this_month);
    println!("Total active prospects:    {}", dashboard.total_active);
    println!();

    if dashboard.follow_ups_due.is_empty() {
        println!("No follow-ups due today. Great job!");
        return;
    }
    println!("Prospects to follow up with today:");
    for due in &dashboard.follow_ups_due {
        println!(
            "  {:<24} {:<24} {}",
            due.prospect.business_name,
            due.prospect.contact_info,
            due.reason()
        );
    }
}

fn print_guideline(agency: &str, section: Option<usize>) -> anyhow::Result<()> {
    let Some(text) = guideline::render(agency, section) else {
        anyhow::bail!(
            "No guideline section {}, expected 1-{}",
            section.unwrap_or_default(),
            guideline::SECTIONS.len()
        );
    };
    print!("{}", text);
    Ok(())
}
