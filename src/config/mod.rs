use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Interpreter for the external AI script, e.g. "python3".
    pub ai_command: String,
    /// Unset means pattern matching only.
    pub ai_script: Option<PathBuf>,
    pub ai_timeout: Duration,
}

impl AppConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok(); // Load .env file if present
        Ok(Self {
            port: match env::var("PORT") {
                Ok(v) => v.parse()?,
                Err(_) => 3000,
            },
            ai_command: env::var("AI_CHAT_COMMAND").unwrap_or_else(|_| "python3".to_string()),
            ai_script: env::var("AI_CHAT_SCRIPT").ok().map(PathBuf::from),
            ai_timeout: Duration::from_secs(match env::var("AI_CHAT_TIMEOUT_SECS") {
                Ok(v) => v.parse()?,
                Err(_) => 10,
            }),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            ai_command: "python3".to_string(),
            ai_script: None,
            ai_timeout: Duration::from_secs(10),
        }
    }
}
