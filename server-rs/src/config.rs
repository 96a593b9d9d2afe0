use std::env;

use chrono::FixedOffset;

use crate::format::DisplayLocale;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub app_env: String,
    pub cors_origins: Vec<String>,
    pub db: DbConfig,
    pub redis: RedisConfig,
    pub rankings: RankingsConfig,
    pub display: DisplayConfig,
    pub errors: ErrorConfig,
}

#[derive(Clone, Debug)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub pool_min: u32,
    pub pool_max: u32,
}

#[derive(Clone, Debug)]
pub struct RedisConfig {
    /// `None` disables the rankings cache.
    pub url: Option<String>,
    pub key_prefix: String,
}

#[derive(Clone, Debug)]
pub struct RankingsConfig {
    pub default_limit: u32,
    pub max_limit: u32,
    pub cache_seconds: u64,
}

#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub default_locale: DisplayLocale,
    /// Club timezone as a fixed offset. `None` means the server's local time.
    pub utc_offset: Option<FixedOffset>,
}

#[derive(Clone, Debug)]
pub struct ErrorConfig {
    /// Forward raw store error messages to clients.
    pub expose_store_messages: bool,
}

struct Lookup<F>(F);

impl<F: Fn(&str) -> Option<String>> Lookup<F> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn or_parse<T: std::str::FromStr>(&self, key: &str, default: T) -> T {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let env = Lookup(lookup);

        let app_env = env.or("APP_ENV", "development");
        let is_production = app_env == "production";

        let redis_url = env.get("REDIS_URL").or_else(|| env.get("KV_URL")).or_else(|| {
            env.get("REDIS_HOST").map(|host| {
                let port: u16 = env.or_parse("REDIS_PORT", 6379);
                let db: u8 = env.or_parse("REDIS_DB", 0);
                match env.get("REDIS_PASSWORD") {
                    Some(pw) => format!("redis://:{pw}@{host}:{port}/{db}"),
                    None => format!("redis://{host}:{port}/{db}"),
                }
            })
        });

        let default_locale = DisplayLocale::for_tag(&env.or("DISPLAY_LOCALE", "es-ES"))
            .unwrap_or_default();

        let rankings_max = env.or_parse("RANKINGS_MAX_LIMIT", 100u32).max(1);

        Self {
            port: env.or_parse("PORT", 3000),
            cors_origins: env
                .or("CORS_ORIGINS", "http://localhost:3000")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            db: DbConfig {
                url: env.get("DATABASE_URL").or_else(|| env.get("POSTGRES_URL")),
                host: env.or("DB_HOST", "localhost"),
                port: env.or_parse("DB_PORT", 5432),
                database: env.or("DB_NAME", "padel_club"),
                user: env.or("DB_USER", "postgres"),
                password: env.or("DB_PASSWORD", ""),
                pool_min: env.or_parse("DB_POOL_MIN", 1),
                pool_max: env.or_parse("DB_POOL_MAX", 10),
            },
            redis: RedisConfig {
                url: redis_url,
                key_prefix: env.or("REDIS_KEY_PREFIX", "padel:"),
            },
            rankings: RankingsConfig {
                default_limit: env.or_parse("RANKINGS_DEFAULT_LIMIT", 20u32).clamp(1, rankings_max),
                max_limit: rankings_max,
                cache_seconds: env.or_parse("RANKINGS_CACHE_SECONDS", 30),
            },
            display: DisplayConfig {
                default_locale,
                utc_offset: env.get("CLUB_UTC_OFFSET").and_then(|v| parse_utc_offset(&v)),
            },
            errors: ErrorConfig {
                expose_store_messages: env
                    .get("ERRORS_EXPOSE_STORE_MESSAGES")
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(!is_production),
            },
            app_env,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.db.url {
            return url.clone();
        }
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db.user, self.db.password, self.db.host, self.db.port, self.db.database
        )
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parses `Z`, `UTC`, `+HH:MM`, `-HH:MM` or `+HHMM`.
fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
