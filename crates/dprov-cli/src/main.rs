use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dprov_cli::cli::Cli;
use dprov_cli::client::DirectusClient;
use dprov_cli::config::Settings;
use dprov_cli::output::{print_error, print_report, print_success};
use dprov_cli::reconcile::Provisioner;

#[tokio::main]
async fn main() {
    // Load .env if present; environment variables feed the clap `env`
    // attributes, so this must happen before parsing.
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: failed to load .env file: {e}");
        }
    }

    init_tracing();

    let cli = Cli::parse();
    let settings = match Settings::resolve(cli.url, cli.email, cli.password, cli.environment) {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Configuration error: {e}"));
            std::process::exit(2);
        }
    };

    if let Err(e) = run(settings).await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(settings: Settings) -> Result<()> {
    let client = DirectusClient::new(&settings.url);

    // Authentication is the only fatal step: no session, no run.
    let session = client.login(&settings.email, &settings.password).await?;
    print_success("Authenticated");

    let report = Provisioner::new(&client).run(&session).await;
    print_report(&report, client.base_url());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
