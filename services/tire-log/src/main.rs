//! Tire Log CLI
//!
//! Command-line access to the fleet backend's session endpoints and to the
//! measurement validation rules.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tire_form::{Clock, SystemClock};
use tire_log::io::{HttpClient, ReqwestHttpClient};
use tire_log::{check_measurement_file, load_config, AuthClient, AuthCredentials, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tire-log")]
#[command(about = "Tire maintenance measurements for the fleet dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config file and environment)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and print the session payload
    Login {
        #[arg(short, long)]
        username: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Print the current session, optionally logging in first
    Session {
        #[command(flatten)]
        login: OptionalLogin,
    },

    /// End the session, optionally logging in first
    Logout {
        #[command(flatten)]
        login: OptionalLogin,
    },

    /// Validate a measurement record stored as JSON
    CheckMeasurement {
        /// Path to the record
        #[arg(short, long)]
        file: PathBuf,

        /// Last known odometer reading (overrides config file)
        #[arg(long)]
        initial_odometer: Option<f64>,

        /// Tire registration date, YYYY-MM-DD (overrides config file)
        #[arg(long)]
        registration_date: Option<String>,
    },
}

#[derive(clap::Args)]
struct OptionalLogin {
    /// Log in as this user before the request
    #[arg(short, long)]
    username: Option<String>,

    #[arg(short, long, requires = "username")]
    password: Option<String>,
}

fn credentials(username: String, password: Option<String>) -> std::io::Result<AuthCredentials> {
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password(format!("Password for {}: ", username))?,
    };
    Ok(AuthCredentials::new(username, password))
}

async fn login_if_requested(
    client: &AuthClient,
    login: OptionalLogin,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(username) = login.username {
        let payload = client
            .login(&credentials(username, login.password)?)
            .await?;
        tracing::debug!("Login payload: {}", payload);
    }
    Ok(())
}

/// Auth subcommands need an absolute URL; checked before any HTTP setup
fn auth_client(config: &Config) -> tire_log::Result<AuthClient> {
    config.require_base_url()?;
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new()?);
    Ok(AuthClient::new(&config.api, http))
}

fn print_json(value: &serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.apply_env();
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    match args.command {
        Command::Login { username, password } => {
            let client = auth_client(&config)?;
            tracing::info!("Logging in to {:?}", client.base_url());
            let payload = client.login(&credentials(username, password)?).await?;
            print_json(&payload)?;
        }
        Command::Session { login } => {
            let client = auth_client(&config)?;
            login_if_requested(&client, login).await?;
            let payload = client.check_session().await?;
            print_json(&payload)?;
        }
        Command::Logout { login } => {
            let client = auth_client(&config)?;
            login_if_requested(&client, login).await?;
            let payload = client.logout().await?;
            tracing::info!("Logged out");
            print_json(&payload)?;
        }
        Command::CheckMeasurement {
            file,
            initial_odometer,
            registration_date,
        } => {
            let mut defaults = config.measurement.clone();
            if let Some(initial_odometer) = initial_odometer {
                defaults.odometer_reading = initial_odometer;
            }
            if let Some(registration_date) = registration_date {
                defaults.tire_registration_date = registration_date;
            }

            let check = check_measurement_file(&file, &defaults, SystemClock.today())?;
            for violation in &check.violations {
                println!("{}: {}", violation.field(), violation);
            }
            let record = check.into_result()?;
            tracing::info!("Measurement record {:?} is valid", file);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
