use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "cafe-service")]
pub struct Args {
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "password")]
    pub db_password: String,

    #[arg(long, env = "DB_NAME", default_value = "cafe_db")]
    pub db_name: String,

    /// Takes precedence over the individual DB_* settings when present.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "DB_POOL_SIZE", default_value = "10")]
    pub pool_size: u32,

    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value = "30")]
    pub acquire_timeout_secs: u64,
}

impl Args {
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_name
            ),
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
