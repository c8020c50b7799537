use std::env;

/// Application id used when APP_ID is not provided.
pub const DEFAULT_APP_ID: &str = "default";

pub struct Config {
    pub database_url: String,
    pub frontend_origin: String,
    pub app_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok(); // Load .env file

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let frontend_origin = env::var("FRONTEND_ORIGIN").expect("FRONTEND_ORIGIN must be set");

        // Single-tenant deployment: one application id, used as the first
        // segment of every status row key.
        let app_id = env::var("APP_ID").unwrap_or_else(|_| DEFAULT_APP_ID.to_string());

        Config {
            database_url,
            frontend_origin,
            app_id,
        }
    }
}
