#[derive(Debug, Clone)]
pub struct WebhookListenerConfig {
    pub webhook_server: WebhookServer,
    pub stripe: Stripe,
}

#[derive(Debug, Clone)]
pub struct WebhookServer {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Stripe {
    pub secret_key: String,
    pub webhook_secret: String,
}

#[derive(Debug, Clone)]
pub struct Supabase {
    pub url: String,
    pub service_role_key: String,
}
