use clap::Parser;
use smarteats_core::domain::common::{
    DatabaseConfig, DefaultIdentity, IdentityConfig, ModelConfig, SmartEatsConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "smarteats-api", about = "Personalized meal recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://127.0.0.1:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "smart_eats")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = "http://localhost:11434")]
    pub ollama_base_url: String,

    #[arg(long, env = "OLLAMA_MODEL", default_value = "gemma3:4b")]
    pub ollama_model: String,

    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = 60)]
    pub ollama_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct IdentityArgs {
    /// Serve requests without a user id under a shared guest identity
    /// instead of rejecting them.
    #[arg(long, env = "ALLOW_GUEST", default_value_t = true)]
    pub allow_guest: bool,

    #[arg(long, env = "GUEST_DISPLAY_NAME", default_value = "Guest")]
    pub guest_display_name: String,
}

impl From<Args> for SmartEatsConfig {
    fn from(args: Args) -> Self {
        SmartEatsConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            model: ModelConfig {
                base_url: args.model.ollama_base_url,
                model: args.model.ollama_model,
                timeout_secs: args.model.ollama_timeout_secs,
            },
            identity: IdentityConfig {
                default_identity: if args.identity.allow_guest {
                    DefaultIdentity::Guest {
                        display_name: args.identity.guest_display_name,
                    }
                } else {
                    DefaultIdentity::RequireUser
                },
            },
        }
    }
}
