use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are sanitized for logs and console output; the full
/// #[source] chain may contain connection strings, so log with Display (%e)
/// rather than Debug (?e).
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Redis connection failed. Check REDIS_URL and credentials.")]
    RedisConnection(#[source] redis::RedisError),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),
}
