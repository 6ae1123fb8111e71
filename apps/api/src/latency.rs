use std::time::Duration;

// Baseline delays (ms) of each simulated backend call.
pub const LOGIN_MS: u64 = 1000;
pub const REGISTER_MS: u64 = 1200;
pub const FORGOT_PASSWORD_MS: u64 = 1500;
pub const VERIFY_CODE_MS: u64 = 1000;
pub const RESET_PASSWORD_MS: u64 = 1500;
pub const DASHBOARD_MS: u64 = 800;
pub const REQUESTS_MS: u64 = 600;
pub const SUBMIT_REQUEST_MS: u64 = 800;
pub const TIMETABLES_MS: u64 = 700;
pub const SUBJECTS_MS: u64 = 500;
pub const TEACHERS_MS: u64 = 400;
pub const EXAMS_MS: u64 = 300;
pub const GENERATE_MS: u64 = 3000;
pub const CLASH_CHECK_MS: u64 = 200;
pub const EXPORT_MS: u64 = 2000;
pub const DELETE_TIMETABLE_MS: u64 = 500;
pub const PROFILE_UPDATE_MS: u64 = 1000;
pub const PASSWORD_CHANGE_MS: u64 = 1500;

/// Simulated network latency. Every call sleeps for its baseline delay
/// multiplied by `scale`; a scale of 0.0 returns immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    scale: f64,
}

impl Latency {
    pub fn new(scale: f64) -> Self {
        Self {
            scale: if scale.is_finite() { scale.max(0.0) } else { 0.0 },
        }
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self { scale: 0.0 }
    }

    /// Saturates at `Duration::MAX` instead of overflowing.
    pub fn scaled(&self, base_ms: u64) -> Duration {
        Duration::try_from_secs_f64(base_ms as f64 * self.scale / 1000.0)
            .unwrap_or(Duration::MAX)
    }

    pub async fn simulate(&self, base_ms: u64) {
        let delay = self.scaled(base_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_scale_disables_delay() {
        assert!(Latency::none().scaled(GENERATE_MS).is_zero());
    }

    #[test]
    fn test_scale_multiplies_baseline() {
        assert_eq!(Latency::new(0.5).scaled(LOGIN_MS), Duration::from_millis(500));
    }

    #[test]
    fn test_negative_scale_clamped() {
        assert!(Latency::new(-3.0).scaled(LOGIN_MS).is_zero());
    }

    #[test]
    fn test_huge_scale_saturates() {
        assert_eq!(Latency::new(1e300).scaled(LOGIN_MS), Duration::MAX);
        assert_eq!(Latency::new(f64::MAX).scaled(GENERATE_MS), Duration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_sleeps_scaled_duration() {
        let start = tokio::time::Instant::now();
        Latency::new(1.0).simulate(CLASH_CHECK_MS).await;
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
