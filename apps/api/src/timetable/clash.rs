//! Clash checking.
//!
//! `ClashChecker` is the seam a real overlap detector would plug into. The
//! only backend today is `RandomClashChecker`, which flags a clash for a
//! fixed share of probes and never looks at any timetable.
//!
//! `AppState` holds an `Arc<dyn ClashChecker>`.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The slot a client wants to place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClashProbe {
    pub day: String,
    pub time: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClashCheckRequest {
    pub slot: ClashProbe,
    /// Timetable the slot would be added to. Not consulted by the random backend.
    #[serde(default)]
    pub timetable_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClashType {
    TeacherConflict,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClashReport {
    pub has_clash: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clash_type: Option<ClashType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ClashReport {
    pub fn clear() -> Self {
        Self {
            has_clash: false,
            clash_type: None,
            message: None,
        }
    }

    pub fn teacher_conflict() -> Self {
        Self {
            has_clash: true,
            clash_type: Some(ClashType::TeacherConflict),
            message: Some("Teacher has another class at this time".to_string()),
        }
    }
}

#[async_trait]
pub trait ClashChecker: Send + Sync {
    async fn check(&self, probe: &ClashProbe) -> Result<ClashReport, AppError>;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

/// Reports a teacher conflict whenever a uniform draw in `[0, 1)` exceeds
/// `threshold`. With the default threshold of 0.8 that is one probe in five.
pub struct RandomClashChecker {
    threshold: f64,
    rng: Mutex<StdRng>,
}

impl RandomClashChecker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible sequence of verdicts for a given seed.
    #[cfg(test)]
    pub fn seeded(threshold: f64, seed: u64) -> Self {
        Self {
            threshold,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw(&self) -> Result<f64, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("clash RNG lock poisoned: {e}")))?;
        Ok(rng.random::<f64>())
    }
}

#[async_trait]
impl ClashChecker for RandomClashChecker {
    async fn check(&self, probe: &ClashProbe) -> Result<ClashReport, AppError> {
        let report = if self.draw()? > self.threshold {
            ClashReport::teacher_conflict()
        } else {
            ClashReport::clear()
        };
        tracing::debug!(
            "clash check {} {} -> {}",
            probe.day,
            probe.time,
            report.has_clash
        );
        Ok(report)
    }

    fn backend(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> ClashProbe {
        ClashProbe {
            day: "Monday".into(),
            time: "09:00 - 10:00".into(),
            subject: Some("Data Structures".into()),
            teacher: Some("Prof. Neha Verma".into()),
            room: Some("Room-1".into()),
        }
    }

    #[tokio::test]
    async fn test_threshold_one_never_clashes() {
        let checker = RandomClashChecker::seeded(1.0, 7);
        for _ in 0..200 {
            assert_eq!(checker.check(&probe()).await.unwrap(), ClashReport::clear());
        }
    }

    #[tokio::test]
    async fn test_clash_report_shape() {
        let report = ClashReport::teacher_conflict();
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["has_clash"], true);
        assert_eq!(v["clash_type"], "teacher_conflict");
        assert_eq!(v["message"], "Teacher has another class at this time");

        let clear = serde_json::to_value(ClashReport::clear()).unwrap();
        assert!(clear.get("clash_type").is_none());
    }

    #[tokio::test]
    async fn test_same_seed_same_verdicts() {
        let a = RandomClashChecker::seeded(0.8, 42);
        let b = RandomClashChecker::seeded(0.8, 42);
        for _ in 0..50 {
            assert_eq!(
                a.check(&probe()).await.unwrap(),
                b.check(&probe()).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_default_threshold_flags_about_one_in_five() {
        let checker = RandomClashChecker::seeded(0.8, 2024);
        let mut clashes = 0;
        for _ in 0..2000 {
            if checker.check(&probe()).await.unwrap().has_clash {
                clashes += 1;
            }
        }
        let rate = clashes as f64 / 2000.0;
        assert!((0.15..0.25).contains(&rate), "rate was {rate}");
    }

    #[tokio::test]
    async fn test_poisoned_rng_is_internal_error() {
        let checker = std::sync::Arc::new(RandomClashChecker::seeded(0.8, 1));
        let poisoner = checker.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.rng.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        let err = checker.check(&probe()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(RandomClashChecker::new(0.8).backend(), "random");
    }
}
