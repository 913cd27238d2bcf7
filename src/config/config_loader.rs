use anyhow::{Context, Result};

use super::config_model::{Stripe, Supabase, WebhookListenerConfig, WebhookServer};

const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_BODY_LIMIT_MB: u64 = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn load_webhook_listener() -> Result<WebhookListenerConfig> {
    dotenvy::dotenv().ok();

    let webhook_server = WebhookServer {
        port: optional_env("SERVER_PORT")?.unwrap_or(DEFAULT_SERVER_PORT),
        body_limit: optional_env("SERVER_BODY_LIMIT")?.unwrap_or(DEFAULT_BODY_LIMIT_MB),
        timeout: optional_env("SERVER_TIMEOUT")?.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    let stripe = Stripe {
        secret_key: required_env("STRIPE_SECRET_KEY")?,
        webhook_secret: required_env("STRIPE_WEBHOOK_SECRET")?,
    };

    Ok(WebhookListenerConfig {
        webhook_server,
        stripe,
    })
}

pub fn load_supabase() -> Result<Supabase> {
    dotenvy::dotenv().ok();

    Ok(Supabase {
        url: required_env("SUPABASE_URL")?,
        service_role_key: required_env("SUPABASE_SERVICE_ROLE_KEY")?,
    })
}

fn required_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} is not set"))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => {
            let parsed = raw.parse().with_context(|| format!("{key} is invalid"))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
