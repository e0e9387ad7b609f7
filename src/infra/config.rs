use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use env_helpers::get_env_default;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub redis_url: String,
    /// Directory holding the pre-built dashboard shell served on the
    /// catch-all route.
    pub static_dir: String,
    /// Minimum spacing between collection initiations.
    pub rate_limit_cooldown: Duration,
    /// Artificial gateway round-trip before a collection is accepted.
    pub gateway_latency: Duration,
    /// Delay before the simulated settlement webhook fires.
    pub webhook_delay: Duration,
    /// Interval between entitlement re-evaluations.
    pub entitlement_poll: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let redis_url: String = get_env_default("REDIS_URL", "redis://127.0.0.1:6379".to_string());
        let static_dir: String = get_env_default("STATIC_DIR", "./dist".to_string());

        let rate_limit_cooldown_secs: u64 = get_env_default("RATE_LIMIT_COOLDOWN_SECS", 5);
        let gateway_latency_ms: u64 = get_env_default("GATEWAY_LATENCY_MS", 1_500);
        let webhook_delay_ms: u64 = get_env_default("WEBHOOK_DELAY_MS", 2_000);
        let entitlement_poll_secs: u64 = get_env_default("ENTITLEMENT_POLL_SECS", 15);

        Self {
            bind_addr,
            cors_origin,
            redis_url,
            static_dir,
            rate_limit_cooldown: Duration::from_secs(rate_limit_cooldown_secs),
            gateway_latency: Duration::from_millis(gateway_latency_ms),
            webhook_delay: Duration::from_millis(webhook_delay_ms),
            entitlement_poll: Duration::from_secs(entitlement_poll_secs),
        }
    }
}
