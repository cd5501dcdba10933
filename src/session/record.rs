//! Session result record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    CaptureSummary, HoldMetrics, LineMetrics, PathMatchScore, ReactionMetrics, RepetitionQuality,
    RepetitionScore, TappingMetrics, TremorLikelihood,
};
use crate::error::Result;

/// Outcome of one assessment session
///
/// Every section is optional; a session may contain any subset of tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Caller-visible identifier (`r_<unix millis>` by default)
    pub id: String,
    /// When the session started
    pub recorded_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<CaptureSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<PathMatchScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetition: Option<RepetitionQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<RepetitionScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tapping: Option<TappingMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold: Option<HoldMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<ReactionMetrics>,
}

impl Default for SessionResult {
    fn default() -> Self {
        Self::new_at(Utc::now())
    }
}

impl SessionResult {
    /// Start an empty session now
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session at a fixed time
    pub fn new_at(recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("r_{}", recorded_at.timestamp_millis()),
            recorded_at,
            capture: None,
            trace: None,
            line: None,
            repetition: None,
            targets: None,
            tapping: None,
            hold: None,
            reaction: None,
        }
    }

    /// Replace the identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_capture(mut self, capture: CaptureSummary) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn with_trace(mut self, trace: PathMatchScore) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn with_line(mut self, line: LineMetrics) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_repetition(mut self, repetition: RepetitionQuality) -> Self {
        self.repetition = Some(repetition);
        self
    }

    pub fn with_targets(mut self, targets: RepetitionScore) -> Self {
        self.targets = Some(targets);
        self
    }

    pub fn with_tapping(mut self, tapping: TappingMetrics) -> Self {
        self.tapping = Some(tapping);
        self
    }

    pub fn with_hold(mut self, hold: HoldMetrics) -> Self {
        self.hold = Some(hold);
        self
    }

    pub fn with_reaction(mut self, reaction: ReactionMetrics) -> Self {
        self.reaction = Some(reaction);
        self
    }

    /// Whether no assessment has been merged yet
    pub fn is_empty(&self) -> bool {
        self.completed_tests().is_empty()
    }

    /// Names of the assessments present in this session
    pub fn completed_tests(&self) -> Vec<&'static str> {
        [
            ("capture", self.capture.is_some()),
            ("trace", self.trace.is_some()),
            ("line", self.line.is_some()),
            ("repetition", self.repetition.is_some()),
            ("targets", self.targets.is_some()),
            ("tapping", self.tapping.is_some()),
            ("hold", self.hold.is_some()),
            ("reaction", self.reaction.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    /// Overall tremor verdict
    ///
    /// A motion capture decides when present; otherwise the spiral trace
    /// severity does. The order is fixed, so a trace merged after a capture
    /// does not overwrite the capture's verdict.
    pub fn tremor_likelihood(&self) -> TremorLikelihood {
        if let Some(capture) = &self.capture {
            return if capture.tremor_detected {
                TremorLikelihood::Likely
            } else {
                TremorLikelihood::NotClear
            };
        }
        self.trace
            .as_ref()
            .map_or(TremorLikelihood::NotClear, |t| t.severity.tremor_likelihood())
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(c) = &self.capture {
            parts.push(format!(
                "Capture: {:.2} Hz, amplitude {:.3}",
                c.dominant_frequency, c.avg_amplitude
            ));
        }
        if let Some(t) = &self.trace {
            parts.push(format!(
                "Trace: accuracy {}%, severity {} ({})",
                t.accuracy_percent(),
                t.severity,
                t.severity_score
            ));
        }
        if let Some(l) = &self.line {
            parts.push(format!(
                "Line: deviation {:.2} px, smooth {:.3}",
                l.mean_deviation, l.smoothness
            ));
        }
        if let Some(r) = &self.repetition {
            parts.push(format!(
                "Repetition: avg {:.1}%, decay {:.1}%",
                r.avg_quality * 100.0,
                r.decay * 100.0
            ));
        }
        if let Some(t) = &self.targets {
            parts.push(format!(
                "Targets: {} traced, {} missed, avg {:.1}%",
                t.traced_count, t.missed_count, t.avg_accuracy
            ));
        }
        if let Some(t) = &self.tapping {
            parts.push(format!(
                "Tapping: {:.2} t/s, irregularity {:.3}, decay {}",
                t.taps_per_sec, t.interval_std, t.decay
            ));
        }
        if let Some(h) = &self.hold {
            parts.push(format!(
                "Hold: drift {:.2} px, {:.2} Hz, stability {}",
                h.mean_drift, h.dominant_frequency, h.stability
            ));
        }
        if let Some(r) = &self.reaction {
            parts.push(format!(
                "Target: {:.0} ms mean, {}% misses, {} hits",
                r.mean_reaction_ms, r.miss_rate_percent, r.hits
            ));
        }
        if parts.is_empty() {
            return "No assessments recorded".to_string();
        }
        format!("{}. Tremor: {}", parts.join("; "), self.tremor_likelihood())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    ///
    /// Non-finite metrics are written as `null` and read back as NaN.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
