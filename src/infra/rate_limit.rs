use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::app_error::{AppError, AppResult};

/// Cool-down limiter guarding collection initiation against rapid repeats.
///
/// Holds its own "last allowed request" marker instead of a process-global
/// static, so multi-tenant deployments can hold one limiter per account.
pub struct CooldownLimiter {
    cooldown: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl CooldownLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_request: Mutex::new(None),
        }
    }

    /// Reject if a prior request was allowed within the cool-down window;
    /// on allow, record the current instant as the new marker.
    pub fn check_and_record(&self) -> AppResult<()> {
        self.check_and_record_at(Instant::now())
    }

    fn check_and_record_at(&self, now: Instant) -> AppResult<()> {
        let mut last = self.last_request.lock().unwrap();
        if let Some(prev) = *last
            && now.duration_since(prev) < self.cooldown
        {
            return Err(AppError::RateLimited);
        }
        *last = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_is_allowed() {
        let limiter = CooldownLimiter::new(Duration::from_secs(5));
        assert!(limiter.check_and_record().is_ok());
    }

    #[test]
    fn test_second_request_within_window_is_rejected() {
        let limiter = CooldownLimiter::new(Duration::from_secs(5));
        let start = Instant::now();
        limiter.check_and_record_at(start).unwrap();

        let err = limiter
            .check_and_record_at(start + Duration::from_secs(2))
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
    }

    #[test]
    fn test_request_after_window_is_allowed() {
        let limiter = CooldownLimiter::new(Duration::from_secs(5));
        let start = Instant::now();
        limiter.check_and_record_at(start).unwrap();

        assert!(
            limiter
                .check_and_record_at(start + Duration::from_secs(6))
                .is_ok()
        );
    }

    #[test]
    fn test_rejected_request_does_not_reset_marker() {
        let limiter = CooldownLimiter::new(Duration::from_secs(5));
        let start = Instant::now();
        limiter.check_and_record_at(start).unwrap();

        // A rejected probe at t+4 must not extend the cool-down.
        let _ = limiter.check_and_record_at(start + Duration::from_secs(4));
        assert!(
            limiter
                .check_and_record_at(start + Duration::from_secs(6))
                .is_ok()
        );
    }
}
