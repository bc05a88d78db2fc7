use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        // DATABASE_URL wins; otherwise compose a PostgreSQL URL from the
        // individual DB_* variables; otherwise fall back to a local file.
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            match (
                env::var("DB_HOST"),
                env::var("DB_NAME"),
                env::var("DB_USER"),
                env::var("DB_PASSWORD"),
            ) {
                (Ok(host), Ok(name), Ok(user), Ok(password)) => {
                    format!(
                        "postgres://{}:{}@{}/{}",
                        urlencoding::encode(&user),
                        urlencoding::encode(&password),
                        host,
                        name
                    )
                }
                _ => "sqlite://bookstock.db?mode=rwc".to_string(),
            }
        });

        Self { database_url }
    }
}
