use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use skywatch_core::{Config, DisplayFields, IpLocator, Session, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Current weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city name or ZIP code.
    Show {
        /// City name or ZIP code; the configured default city when omitted.
        query: Option<String>,
    },

    /// Show current weather for the device's position.
    Here,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { query } => show(query).await,
            Command::Here => here().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(key.trim().to_string());
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn show(query: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let raw = query.unwrap_or_else(|| config.default_city.clone());

    let mut session = new_session(&config)?;
    session.search(&raw).await;
    report(&session)
}

async fn here() -> Result<()> {
    let config = Config::load()?;

    let mut session = new_session(&config)?;
    session.locate().await;
    report(&session)
}

fn new_session(config: &Config) -> Result<Session> {
    let provider = provider_from_config(config)?;
    Ok(Session::new(Box::new(provider), Box::new(IpLocator::new())))
}

/// Print the rendered snapshot, or fail with the banner text.
fn report(session: &Session) -> Result<()> {
    if session.ui().result().is_displayed() {
        if let Some(snapshot) = session.snapshot() {
            let fields = DisplayFields::from_snapshot(snapshot);
            println!("{}", fields.place);
            println!("{}", fields.condition);
            println!("Temperature: {}", fields.temperature);
            println!("Feels like:  {}", fields.feels_like);
            println!("Humidity:    {}", fields.humidity);
            println!("Wind:        {}", fields.wind);
            println!("Icon:        {}", fields.icon_url);
            return Ok(());
        }
    }

    match session.ui().error_message() {
        Some(message) => bail!("{message}"),
        None => bail!("Failed to fetch weather data. Please try again."),
    }
}
