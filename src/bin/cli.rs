//! FleetEase CLI
//!
//! Operator command line over the same page controllers as the panel:
//! - Sign in and inspect the session
//! - Manage locations and support tickets
//! - Switch the storefront theme
//! - Browse the public catalog and price a rental

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use fleetease::access::{visible_menu, SiteMode};
use fleetease::auth::{AuthService, AuthState};
use fleetease::client::{FleetApi, HttpTransport};
use fleetease::config::{generate_default_config, Config};
use fleetease::models::{FuelType, TicketCategory, TicketPriority, Transmission};
use fleetease::notify::Notifier;
use fleetease::panel::{DashboardPage, LocationsPage, SupportPage, ThemeStorePage};
use fleetease::quote::{DayRounding, Quote};
use fleetease::session::FileStore;
use fleetease::storefront::CatalogPage;

#[derive(Parser)]
#[command(name = "fleetease-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command line for FleetEase vehicle-rental operators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in as an operator
    Login {
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user and company
    Whoami,

    /// Panel menu visible to the signed-in role
    Menu {
        /// Host the panel is served from; `panel.` hosts have no /admin prefix
        #[arg(long, default_value = "localhost")]
        host: String,
    },

    /// Pickup and drop-off locations
    Locations {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Support tickets
    Tickets {
        #[command(subcommand)]
        action: TicketAction,
    },

    /// Storefront themes
    Themes {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Public vehicle catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Price a rental of a public vehicle
    Quote {
        vehicle_id: String,
        /// Pickup (RFC 3339 or YYYY-MM-DD)
        pickup: String,
        /// Return (RFC 3339 or YYYY-MM-DD)
        #[arg(value_name = "RETURN")]
        return_date: String,
        /// Bill any started day, as the panel form does
        #[arg(long)]
        ceil: bool,
    },

    /// Dashboard figures
    Stats,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum LocationAction {
    List,
    Add {
        name: String,
        city: String,
        #[command(flatten)]
        fields: LocationFields,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[command(flatten)]
        fields: LocationFields,
    },
    Remove {
        id: String,
    },
}

#[derive(clap::Args)]
pub struct LocationFields {
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    hours: Option<String>,
    #[arg(long)]
    pickup: Option<bool>,
    #[arg(long)]
    dropoff: Option<bool>,
    #[arg(long)]
    active: Option<bool>,
}

#[derive(Subcommand)]
pub enum TicketAction {
    List,
    Show {
        id: String,
    },
    Open {
        subject: String,
        message: String,
        #[arg(long, default_value = "general")]
        category: TicketCategory,
        #[arg(long, default_value = "medium")]
        priority: TicketPriority,
    },
    Reply {
        id: String,
        message: String,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    List,
    Settings,
    Activate { id: String },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        segment: Option<String>,
        #[arg(long)]
        transmission: Option<Transmission>,
        #[arg(long)]
        fuel: Option<FuelType>,
        #[arg(long)]
        min_rate: Option<f64>,
        #[arg(long)]
        max_rate: Option<f64>,
    },
    Show {
        id: String,
    },
}

/// Notices go to stderr so stdout stays machine-readable
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

type Api = FleetApi<HttpTransport>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_tracing(&config.logging.level);

    let transport = HttpTransport::new(&config.api.base_url, config.api.timeout())
        .context("Failed to build HTTP client")?;
    let api = FleetApi::new(transport);
    let mut auth = AuthService::operator(FileStore::new(&config.session.file));
    let notify = StderrNotifier;

    match cli.command {
        Commands::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password()?,
            };
            let user = auth.login(&api, &email, &password).await?;
            println!("Signed in as {} ({})", user.full_name, user.role.label());
        }

        Commands::Logout => {
            auth.logout(&api);
            println!("Signed out");
        }

        Commands::Whoami => {
            signed_in(&mut auth, &api).await?;
            if let AuthState::Authenticated { user, company } = auth.state() {
                println!("{} <{}>", user.full_name, user.email);
                println!("Role: {}", user.role.label());
                if let Some(company) = company {
                    println!("Company: {} ({})", company.name, company.code);
                }
            }
        }

        Commands::Menu { host } => {
            signed_in(&mut auth, &api).await?;
            let role = auth.state().role().context("No role in session")?;
            let items: Vec<_> = visible_menu(role, SiteMode::from_host(&host))
                .into_iter()
                .map(|(item, path)| MenuRow {
                    label: item.label,
                    path,
                })
                .collect();
            emit(cli.format, &items, &["Label", "Path"], |row| {
                vec![row.label.to_string(), row.path.clone()]
            })?;
        }

        Commands::Locations { action } => {
            signed_in(&mut auth, &api).await?;
            run_locations(action, &api, &notify, cli.format).await?;
        }

        Commands::Tickets { action } => {
            signed_in(&mut auth, &api).await?;
            run_tickets(action, &api, &notify, cli.format).await?;
        }

        Commands::Themes { action } => {
            signed_in(&mut auth, &api).await?;
            run_themes(action, &api, &notify, cli.format).await?;
        }

        Commands::Catalog { action } => {
            run_catalog(action, &api, &notify, cli.format).await?;
        }

        Commands::Quote {
            vehicle_id,
            pickup,
            return_date,
            ceil,
        } => {
            let start = parse_date(&pickup)?;
            let end = parse_date(&return_date)?;
            if end <= start {
                bail!("Return must be after pickup");
            }
            let vehicle = api.public_vehicle(&vehicle_id).await?;
            let rounding = if ceil {
                DayRounding::Ceil
            } else {
                DayRounding::Floor
            };
            let quote = Quote::new(start, end, vehicle.daily_rate, rounding);
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
                _ => {
                    println!("{}", vehicle.display_name());
                    println!(
                        "{} day(s) x {:.2} = {:.2}",
                        quote.days, quote.daily_rate, quote.total
                    );
                }
            }
        }

        Commands::Stats => {
            signed_in(&mut auth, &api).await?;
            let mut page = DashboardPage::default();
            succeed(page.load(&api, &notify).await)?;
            let rows: Vec<_> = page.cards().to_vec();
            emit(cli.format, &rows, &["Metric", "Value"], |(title, value)| {
                vec![title.to_string(), value.clone()]
            })?;
            println!();
            println!("Revenue: {:.2}", page.stats.total_revenue);
            println!("Fleet utilization: {:.0}%", page.stats.utilization_percent());
        }

        Commands::Config { output } => write_config(output.as_ref())?,
    }

    Ok(())
}

#[derive(Serialize)]
struct MenuRow {
    label: &'static str,
    path: String,
}

async fn signed_in(auth: &mut AuthService<FileStore>, api: &Api) -> anyhow::Result<()> {
    if auth.restore(api).await.is_authenticated() {
        Ok(())
    } else {
        bail!("Not signed in; run `fleetease-cli login <email>` first")
    }
}

/// Controllers already reported the failure through the notifier
fn succeed(ok: bool) -> anyhow::Result<()> {
    if ok {
        Ok(())
    } else {
        std::process::exit(1)
    }
}

async fn run_locations(
    action: LocationAction,
    api: &Api,
    notify: &StderrNotifier,
    format: Format,
) -> anyhow::Result<()> {
    let mut page = LocationsPage::default();

    match action {
        LocationAction::List => {
            succeed(page.load(api, notify).await)?;
            emit(
                format,
                &page.locations,
                &["ID", "Name", "City", "Pickup", "Drop-off", "Active"],
                |l| {
                    vec![
                        l.id.clone(),
                        l.name.clone(),
                        l.city.clone(),
                        yes_no(l.is_pickup),
                        yes_no(l.is_dropoff),
                        yes_no(l.is_active),
                    ]
                },
            )?;
        }
        LocationAction::Add { name, city, fields } => {
            page.open_create();
            page.form.name = name;
            page.form.city = city;
            fields.apply(&mut page.form);
            succeed(page.submit(api, notify).await)?;
        }
        LocationAction::Update {
            id,
            name,
            city,
            fields,
        } => {
            succeed(page.load(api, notify).await)?;
            let location = page
                .locations
                .iter()
                .find(|l| l.id == id)
                .cloned()
                .with_context(|| format!("No location with id {}", id))?;
            page.open_edit(&location);
            if let Some(name) = name {
                page.form.name = name;
            }
            if let Some(city) = city {
                page.form.city = city;
            }
            fields.apply(&mut page.form);
            succeed(page.submit(api, notify).await)?;
        }
        LocationAction::Remove { id } => {
            succeed(page.delete(api, notify, &id).await)?;
        }
    }
    Ok(())
}

impl LocationFields {
    fn apply(self, form: &mut fleetease::models::LocationForm) {
        if let Some(address) = self.address {
            form.address = address;
        }
        if let Some(phone) = self.phone {
            form.phone = phone;
        }
        if let Some(hours) = self.hours {
            form.working_hours = hours;
        }
        if let Some(pickup) = self.pickup {
            form.is_pickup = pickup;
        }
        if let Some(dropoff) = self.dropoff {
            form.is_dropoff = dropoff;
        }
        if let Some(active) = self.active {
            form.is_active = active;
        }
    }
}

async fn run_tickets(
    action: TicketAction,
    api: &Api,
    notify: &StderrNotifier,
    format: Format,
) -> anyhow::Result<()> {
    let mut page = SupportPage::default();

    match action {
        TicketAction::List => {
            succeed(page.load(api, notify).await)?;
            emit(
                format,
                &page.tickets,
                &["ID", "Number", "Subject", "Status", "Priority", "Messages"],
                |t| {
                    vec![
                        t.id.clone(),
                        t.ticket_number.clone(),
                        t.subject.clone(),
                        t.status.label().to_string(),
                        t.priority.label().to_string(),
                        t.message_count().to_string(),
                    ]
                },
            )?;
        }
        TicketAction::Show { id } => {
            succeed(page.open(api, notify, &id).await)?;
            let Some(ticket) = page.selected else {
                return Ok(());
            };
            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&ticket)?);
                return Ok(());
            }
            println!("{} {}", ticket.ticket_number, ticket.subject);
            println!(
                "{} | {} | {}",
                ticket.status.label(),
                ticket.priority.label(),
                ticket.category.label()
            );
            for message in &ticket.messages {
                println!();
                let when = message
                    .created_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                let who = message.sender_name.as_deref().unwrap_or(match message.sender_type {
                    fleetease::models::SenderType::Support => "Support",
                    _ => "You",
                });
                println!("[{}] {}", when, who);
                println!("{}", message.message);
            }
        }
        TicketAction::Open {
            subject,
            message,
            category,
            priority,
        } => {
            page.new_ticket.subject = subject;
            page.new_ticket.message = message;
            page.new_ticket.category = category;
            page.new_ticket.priority = priority;
            succeed(page.create(api, notify).await)?;
        }
        TicketAction::Reply { id, message } => {
            succeed(page.open(api, notify, &id).await)?;
            page.reply = message;
            succeed(page.send_reply(api, notify).await)?;
        }
    }
    Ok(())
}

async fn run_themes(
    action: ThemeAction,
    api: &Api,
    notify: &StderrNotifier,
    format: Format,
) -> anyhow::Result<()> {
    let mut page = ThemeStorePage::default();
    succeed(page.load(api, notify).await)?;

    match action {
        ThemeAction::List => {
            let active = page.settings.active_theme_id.clone();
            emit(format, &page.themes, &["ID", "Name", "Style", "Active"], |t| {
                vec![
                    t.id.clone(),
                    t.name.clone(),
                    t.style.clone(),
                    yes_no(t.id == active),
                ]
            })?;
        }
        ThemeAction::Settings => {
            println!("{}", serde_json::to_string_pretty(&page.settings)?);
        }
        ThemeAction::Activate { id } => {
            if !page.themes.iter().any(|t| t.id == id) {
                bail!("Unknown theme {}", id);
            }
            succeed(page.activate(api, notify, &id).await)?;
        }
    }
    Ok(())
}

async fn run_catalog(
    action: CatalogAction,
    api: &Api,
    notify: &StderrNotifier,
    format: Format,
) -> anyhow::Result<()> {
    match action {
        CatalogAction::List {
            search,
            segment,
            transmission,
            fuel,
            min_rate,
            max_rate,
        } => {
            let mut page = CatalogPage::default();
            succeed(page.load(api, notify).await)?;
            page.filters.search = search.unwrap_or_default();
            page.filters.segment = segment;
            page.filters.transmission = transmission;
            page.filters.fuel_type = fuel;
            if let Some(min) = min_rate {
                page.filters.min_rate = min;
            }
            if let Some(max) = max_rate {
                page.filters.max_rate = max;
            }
            let vehicles: Vec<_> = page.filtered().into_iter().cloned().collect();
            emit(
                format,
                &vehicles,
                &["ID", "Vehicle", "Segment", "Transmission", "Fuel", "Daily rate"],
                |v| {
                    vec![
                        v.id.clone(),
                        v.display_name(),
                        v.segment.clone(),
                        v.transmission.label().to_string(),
                        v.fuel_type.label().to_string(),
                        format!("{:.2}", v.daily_rate),
                    ]
                },
            )?;
        }
        CatalogAction::Show { id } => {
            let vehicle = api.public_vehicle(&id).await?;
            if format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&vehicle)?);
            } else {
                println!("{} ({})", vehicle.display_name(), vehicle.plate);
                println!(
                    "{} | {} | {} | {} seats",
                    vehicle.segment,
                    vehicle.transmission.label(),
                    vehicle.fuel_type.label(),
                    vehicle.seat_count
                );
                println!("Daily rate: {:.2}", vehicle.daily_rate);
            }
        }
    }
    Ok(())
}

/// Print rows as an aligned table, CSV, or the items themselves as JSON
fn emit<T: Serialize>(
    format: Format,
    items: &[T],
    headers: &[&str],
    row: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(headers)?;
            for item in items {
                writer.write_record(row(item))?;
            }
            writer.flush()?;
        }
        Format::Table => {
            if items.is_empty() {
                println!("Nothing to show");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = items.iter().map(&row).collect();
            let widths: Vec<usize> = headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    rows.iter()
                        .map(|r| r.get(i).map_or(0, |c| c.chars().count()))
                        .max()
                        .unwrap_or(0)
                        .max(h.len())
                })
                .collect();

            let line = |cells: Vec<String>| {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| format!("{:<width$}", c, width = *w))
                    .collect::<Vec<_>>()
                    .join("  ")
            };
            println!("{}", line(headers.iter().map(|h| h.to_string()).collect()));
            println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len()));
            for r in rows {
                println!("{}", line(r));
            }
        }
    }
    Ok(())
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn parse_date(s: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {:?}; use YYYY-MM-DD or RFC 3339", s))?;
    day.and_hms_opt(10, 0, 0)
        .map(|t| t.and_utc())
        .context("Invalid time of day")
}

fn read_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    // Only warnings by default; command output owns the terminal
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if level == "info" { "warn" } else { level };
        EnvFilter::new(format!("fleetease={}", level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
