use serde::Deserialize;

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "https://aifitnessapp.vercel.app",
    "http://localhost:5173",
    "http://localhost:3000",
];

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    /// Length of the free trial for accounts created without an explicit value.
    pub trial_days: i32,
    /// Identity used when a request carries neither a token nor a `userId`.
    pub default_user_id: i32,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "aifit".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "aifit-users".into()),
            ttl_minutes: env_parse("JWT_TTL_MINUTES").unwrap_or(60),
            refresh_ttl_minutes: env_parse("JWT_REFRESH_TTL_MINUTES").unwrap_or(60 * 24 * 14),
        };
        let cors_origins = std::env::var("CORS_ORIGINS")
            .ok()
            .map(|v| parse_origins(&v))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect());
        Ok(Self {
            database_url,
            jwt,
            trial_days: env_parse("TRIAL_DAYS").unwrap_or(3),
            default_user_id: env_parse("DEFAULT_USER_ID").unwrap_or(1),
            cors_origins,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
