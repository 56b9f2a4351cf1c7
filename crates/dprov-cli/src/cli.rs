use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "dprov")]
#[command(about = "Provision the articles content schema on a Directus backend")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (e.g. http://localhost:8055)
    #[arg(long, env = "DIRECTUS_URL")]
    pub url: Option<String>,

    /// Admin account email
    #[arg(long, env = "DIRECTUS_ADMIN_EMAIL")]
    pub email: Option<String>,

    /// Admin account password
    #[arg(long, env = "DIRECTUS_ADMIN_PASSWORD")]
    pub password: Option<String>,

    /// Deployment environment; development-only defaults apply nowhere else
    #[arg(long, env = "DPROV_ENV", default_value = "development")]
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}
