//! Wellness scoring and trade-readiness assessment.
//!
//! Sleep and exercise inputs are banded into three levels each, combined
//! into a health factor, and looked up in a readiness matrix that drives
//! the alert level and trading guidance attached to every scan.

use serde::{Deserialize, Serialize};

/// Banded wellness level for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WellnessBand {
    Poor,
    Moderate,
    Good,
}

impl WellnessBand {
    /// Numeric weight used when combining bands into the health factor.
    pub fn weight(&self) -> f64 {
        match self {
            WellnessBand::Poor => 0.2,
            WellnessBand::Moderate => 0.5,
            WellnessBand::Good => 1.0,
        }
    }

    /// Human-readable label for notes and reports.
    pub fn label(&self) -> &'static str {
        match self {
            WellnessBand::Poor => "Poor",
            WellnessBand::Moderate => "Moderate",
            WellnessBand::Good => "Good",
        }
    }
}

/// Bands sleep duration: seven or more hours is Good, five to seven is
/// Moderate, anything less is Poor.
pub fn score_sleep(hours: f64) -> WellnessBand {
    if hours >= 7.0 {
        WellnessBand::Good
    } else if hours >= 5.0 {
        WellnessBand::Moderate
    } else {
        WellnessBand::Poor
    }
}

/// Bands exercise minutes: ninety or more is Good, sixty to ninety is
/// Moderate, anything less is Poor.
pub fn score_exercise(minutes: i64) -> WellnessBand {
    if minutes >= 90 {
        WellnessBand::Good
    } else if minutes >= 60 {
        WellnessBand::Moderate
    } else {
        WellnessBand::Poor
    }
}

/// Combined health factor: the average of both band weights, bounded
/// to [0.2, 1.0].
pub fn health_factor(sleep: WellnessBand, exercise: WellnessBand) -> f64 {
    ((sleep.weight() + exercise.weight()) / 2.0).clamp(0.2, 1.0)
}

/// Trade-readiness alert level derived from the sleep/exercise combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessAlert {
    Optimal,
    Caution,
    ModerateRisk,
    ElevatedRisk,
    HighRisk,
}

impl ReadinessAlert {
    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessAlert::Optimal => "Optimal",
            ReadinessAlert::Caution => "Caution",
            ReadinessAlert::ModerateRisk => "Moderate Risk",
            ReadinessAlert::ElevatedRisk => "Elevated Risk",
            ReadinessAlert::HighRisk => "High Risk",
        }
    }

    /// Trading guidance attached to reports at this alert level.
    pub fn guidance(&self) -> &'static str {
        match self {
            ReadinessAlert::Optimal => "Conditions are favorable; trade normally within risk rules",
            ReadinessAlert::Caution => "Conditions are decent; reduce position size slightly",
            ReadinessAlert::ModerateRisk => "Conditions are mixed; reduce trade frequency and size",
            ReadinessAlert::ElevatedRisk => {
                "Conditions are imbalanced; limit trades, be defensive"
            }
            ReadinessAlert::HighRisk => {
                "Avoid trading; risk of errors and emotional decisions is high"
            }
        }
    }
}

/// Looks up the readiness matrix for a sleep/exercise combination,
/// returning the alert level and a short description of the state.
pub fn assess_readiness(
    sleep: WellnessBand,
    exercise: WellnessBand,
) -> (ReadinessAlert, &'static str) {
    use WellnessBand::{Good, Moderate, Poor};

    match (sleep, exercise) {
        (Poor, Poor) => (
            ReadinessAlert::HighRisk,
            "Judgment impaired, stress high, discipline weak; avoid trading",
        ),
        (Poor, Moderate) => (
            ReadinessAlert::HighRisk,
            "Some physical balance, but fatigue dominates; high chance of costly mistakes",
        ),
        (Poor, Good) => (
            ReadinessAlert::ElevatedRisk,
            "Good fitness helps, but poor rest still limits focus",
        ),
        (Moderate, Poor) => (
            ReadinessAlert::HighRisk,
            "Partial rest plus inactivity makes for sluggish, reactive trading",
        ),
        (Moderate, Moderate) => (
            ReadinessAlert::ModerateRisk,
            "Fair balance, but not peak performance; trade smaller size",
        ),
        (Moderate, Good) => (
            ReadinessAlert::Caution,
            "Reasonable discipline, but not optimal endurance",
        ),
        (Good, Poor) => (
            ReadinessAlert::ModerateRisk,
            "Rested mind, but low fitness means shorter stamina in volatile sessions",
        ),
        (Good, Moderate) => (
            ReadinessAlert::Caution,
            "Balanced state, can trade cautiously with discipline",
        ),
        (Good, Good) => (
            ReadinessAlert::Optimal,
            "Peak focus, strong discipline, reduced stress; ideal trading state",
        ),
    }
}

/// Builds the one-line readiness note stored with each scan, combining
/// the alert, its description, both band labels and the risk scale.
pub fn readiness_note(sleep: WellnessBand, exercise: WellnessBand) -> String {
    let factor = health_factor(sleep, exercise);
    let (alert, description) = assess_readiness(sleep, exercise);
    format!(
        "{} | {} (sleep={} Sleep, exercise={} Exercise, risk scale x{:.2})",
        alert.label(),
        description,
        sleep.label(),
        exercise.label(),
        factor
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_sleep_bands() {
        assert_eq!(score_sleep(8.0), WellnessBand::Good);
        assert_eq!(score_sleep(7.0), WellnessBand::Good);
        assert_eq!(score_sleep(6.99), WellnessBand::Moderate);
        assert_eq!(score_sleep(5.0), WellnessBand::Moderate);
        assert_eq!(score_sleep(4.99), WellnessBand::Poor);
        assert_eq!(score_sleep(0.0), WellnessBand::Poor);
    }

    #[test]
    fn test_score_exercise_bands() {
        assert_eq!(score_exercise(120), WellnessBand::Good);
        assert_eq!(score_exercise(90), WellnessBand::Good);
        assert_eq!(score_exercise(89), WellnessBand::Moderate);
        assert_eq!(score_exercise(60), WellnessBand::Moderate);
        assert_eq!(score_exercise(59), WellnessBand::Poor);
        assert_eq!(score_exercise(0), WellnessBand::Poor);
    }

    #[test]
    fn test_band_weights() {
        assert_eq!(WellnessBand::Poor.weight(), 0.2);
        assert_eq!(WellnessBand::Moderate.weight(), 0.5);
        assert_eq!(WellnessBand::Good.weight(), 1.0);
    }

    #[test]
    fn test_health_factor_extremes() {
        assert_eq!(health_factor(WellnessBand::Good, WellnessBand::Good), 1.0);
        assert_eq!(health_factor(WellnessBand::Poor, WellnessBand::Poor), 0.2);
    }

    #[test]
    fn test_health_factor_mixed() {
        let factor = health_factor(WellnessBand::Good, WellnessBand::Poor);
        assert!((factor - 0.6).abs() < 1e-9);

        let factor = health_factor(WellnessBand::Moderate, WellnessBand::Poor);
        assert!((factor - 0.35).abs() < 1e-9);

        assert_eq!(
            health_factor(WellnessBand::Moderate, WellnessBand::Moderate),
            0.5
        );
    }

    #[test]
    fn test_readiness_matrix_all_combinations() {
        use ReadinessAlert::*;
        use WellnessBand::{Good, Moderate, Poor};

        assert_eq!(assess_readiness(Poor, Poor).0, HighRisk);
        assert_eq!(assess_readiness(Poor, Moderate).0, HighRisk);
        assert_eq!(assess_readiness(Poor, Good).0, ElevatedRisk);
        assert_eq!(assess_readiness(Moderate, Poor).0, HighRisk);
        assert_eq!(assess_readiness(Moderate, Moderate).0, ModerateRisk);
        assert_eq!(assess_readiness(Moderate, Good).0, Caution);
        assert_eq!(assess_readiness(Good, Poor).0, ModerateRisk);
        assert_eq!(assess_readiness(Good, Moderate).0, Caution);
        assert_eq!(assess_readiness(Good, Good).0, Optimal);
    }

    #[test]
    fn test_alert_labels() {
        assert_eq!(ReadinessAlert::Optimal.label(), "Optimal");
        assert_eq!(ReadinessAlert::ModerateRisk.label(), "Moderate Risk");
        assert_eq!(ReadinessAlert::HighRisk.label(), "High Risk");
    }

    #[test]
    fn test_readiness_note_format() {
        let note = readiness_note(WellnessBand::Good, WellnessBand::Poor);

        assert!(note.starts_with("Moderate Risk | "));
        assert!(note.contains("sleep=Good Sleep"));
        assert!(note.contains("exercise=Poor Exercise"));
        assert!(note.contains("risk scale x0.60"));
    }
}
