pub const DEFAULT_CONFIG_PATH: &str = "config/.assistant/config.toml"; // relative to $HOME
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../templates/assistant.template.toml");

pub const DEFAULT_GREETING: &str = "Hello, I am a bot. How can I help you?";
pub const FALLBACK_ERROR: &str = "Sorry, I couldn't generate a response. Please try again.";

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_HTTP_PORT: u16 = 8501;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;
