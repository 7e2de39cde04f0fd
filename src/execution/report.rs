use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, LinkedList};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::results::result::{ProfilingResult, ResultType};
use crate::store::entities::ExecutionId;

const MAX_DISPLAYED_RESULTS_PER_TYPE: usize = 10;

/// Wall clock phase timings of one execution, in milliseconds since epoch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseMetrics {
    pub duration_collection: LinkedList<(String, u128, u128)>,
}

impl PhaseMetrics {
    pub fn from_phases(phases: &LinkedList<(&str, SystemTime, Duration)>) -> Self {
        let duration_collection = phases
            .iter()
            .map(|(name, start, duration)| {
                let started_ms = start
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis();
                (name.to_string(), started_ms, duration.as_millis())
            })
            .collect();
        Self {
            duration_collection,
        }
    }

    pub fn total_duration_ms(&self) -> u128 {
        self.duration_collection
            .iter()
            .map(|(_, _, duration)| duration)
            .sum()
    }

    /// Chrome tracing event stream for chrome://tracing and compatible viewers
    pub fn to_chrome_tracing(&self) -> Result<String, serde_json::Error> {
        let mut events = Vec::new();
        for (name, start, duration) in &self.duration_collection {
            events.push(json!({
                "name": name,
                "cat": "PERF",
                "pid": "1",
                "ph": "B",
                "ts": start * 1000,
            }));
            events.push(json!({
                "name": name,
                "cat": "PERF",
                "pid": "1",
                "ph": "E",
                "ts": start * 1000 + duration * 1000,
            }));
        }
        serde_json::to_string(&events)
    }
}

/// Everything one finished run produced, for callers that want more than ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub execution_id: ExecutionId,
    pub algorithm_file_name: String,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub result_files: Vec<String>,
    pub results: Vec<ProfilingResult>,
    pub phase_metrics: PhaseMetrics,
}

impl ExecutionReport {
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.begin
    }

    /// Number of results per result type
    pub fn result_counts(&self) -> BTreeMap<ResultType, usize> {
        let mut counts = BTreeMap::new();
        for result in &self.results {
            *counts.entry(result.result_type()).or_insert(0) += 1;
        }
        counts
    }

    pub fn to_json(&self, exclude_results: bool) -> Result<String, serde_json::Error> {
        if exclude_results {
            let mut report = self.clone();
            report.results = Vec::new();
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}

impl Display for ExecutionReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let report = self;

        // Header (no vertical borders to allow longer file names)
        writeln!(f, "\n{}", "━".repeat(80))?;
        writeln!(
            f,
            " {:<56} Took: {:>8} ms ",
            "Algorithm Execution Report",
            report.duration().num_milliseconds()
        )?;
        writeln!(f, "{}", "━".repeat(80))?;
        writeln!(f, " {} (execution {})", report.algorithm_file_name, report.execution_id)?;
        writeln!(
            f,
            " {} .. {}",
            report.begin.to_rfc3339(),
            report.end.to_rfc3339()
        )?;
        writeln!(f, "{}", "━".repeat(80))?;

        writeln!(f)?;
        writeln!(f, " {:<60} {:>8}", "Results", report.results.len())?;
        writeln!(f, "{}", "━".repeat(80))?;

        let mut grouped: BTreeMap<ResultType, Vec<&ProfilingResult>> = BTreeMap::new();
        for result in &report.results {
            grouped.entry(result.result_type()).or_default().push(result);
        }
        for (result_type, results) in &grouped {
            writeln!(f, " {:<60} {:>8}", result_type.name(), results.len())?;
            for result in results.iter().take(MAX_DISPLAYED_RESULTS_PER_TYPE) {
                writeln!(f, "   {}", result)?;
            }
            if results.len() > MAX_DISPLAYED_RESULTS_PER_TYPE {
                writeln!(
                    f,
                    "   ... and {} more",
                    results.len() - MAX_DISPLAYED_RESULTS_PER_TYPE
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, " {:<60} {:>8}", "Result Files", report.result_files.len())?;
        writeln!(f, "{}", "━".repeat(80))?;
        for file_name in &report.result_files {
            writeln!(f, " {}", file_name)?;
        }

        writeln!(f)?;
        writeln!(f, " Phases")?;
        writeln!(f, "{}", "━".repeat(80))?;
        for (name, _, duration) in &report.phase_metrics.duration_collection {
            writeln!(f, " {:<60} {:>5} ms", name, duration)?;
        }
        writeln!(f, "{}", "━".repeat(80))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::column::{ColumnCombination, ColumnIdentifier, ColumnPermutation};
    use crate::results::result::{
        InclusionDependency, UniqueColumnCombination,
    };
    use chrono::TimeZone;

    fn sample_report() -> ExecutionReport {
        let begin = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 3).unwrap();

        let mut phases = LinkedList::new();
        phases.push_back(("build_configuration".to_string(), 1_714_644_000_000u128, 2u128));
        phases.push_back(("run_algorithm".to_string(), 1_714_644_000_002u128, 2_950u128));

        ExecutionReport {
            execution_id: ExecutionId(3),
            algorithm_file_name: "profiler.jar".to_string(),
            begin,
            end,
            result_files: vec!["profiler_1714644000000_uccs".to_string()],
            results: vec![
                UniqueColumnCombination::new(ColumnCombination::new(vec![
                    ColumnIdentifier::new("t", "id"),
                ]))
                .into(),
                InclusionDependency::new(
                    ColumnPermutation::new(vec![ColumnIdentifier::new("orders", "customer_id")]),
                    ColumnPermutation::new(vec![ColumnIdentifier::new("customers", "id")]),
                )
                .into(),
            ],
            phase_metrics: PhaseMetrics {
                duration_collection: phases,
            },
        }
    }

    #[test]
    fn test_duration() {
        let report = sample_report();
        assert_eq!(report.duration(), chrono::Duration::seconds(3));
    }

    #[test]
    fn test_result_counts() {
        let report = sample_report();
        let counts = report.result_counts();
        assert_eq!(counts.get(&ResultType::Ucc), Some(&1));
        assert_eq!(counts.get(&ResultType::Ind), Some(&1));
        assert_eq!(counts.get(&ResultType::Fd), None);
    }

    #[test]
    fn test_display_contains_sections() {
        let rendered = sample_report().to_string();
        assert!(rendered.contains("Algorithm Execution Report"));
        assert!(rendered.contains("profiler.jar"));
        assert!(rendered.contains("Unique Column Combination"));
        assert!(rendered.contains("[t.id]"));
        assert!(rendered.contains("profiler_1714644000000_uccs"));
        assert!(rendered.contains("run_algorithm"));
    }

    #[test]
    fn test_display_caps_listed_results() {
        let mut report = sample_report();
        report.results = (0..25)
            .map(|n| {
                UniqueColumnCombination::new(ColumnCombination::new(vec![
                    ColumnIdentifier::new("t", format!("c{}", n)),
                ]))
                .into()
            })
            .collect();

        let rendered = report.to_string();
        assert!(rendered.contains("... and 15 more"));
    }

    #[test]
    fn test_to_json_can_exclude_results() {
        let report = sample_report();

        let full = report.to_json(false).unwrap();
        assert!(full.contains("customer_id"));

        let trimmed = report.to_json(true).unwrap();
        assert!(!trimmed.contains("customer_id"));
        assert!(trimmed.contains("profiler.jar"));
    }

    #[test]
    fn test_phase_metrics_conversion_and_total() {
        let mut phases: LinkedList<(&str, SystemTime, Duration)> = LinkedList::new();
        let start = UNIX_EPOCH + Duration::from_millis(5_000);
        phases.push_back(("create_execution", start, Duration::from_millis(7)));
        phases.push_back(("finish_execution", start, Duration::from_millis(3)));

        let metrics = PhaseMetrics::from_phases(&phases);
        assert_eq!(metrics.duration_collection.len(), 2);
        assert_eq!(
            metrics.duration_collection.front(),
            Some(&("create_execution".to_string(), 5_000u128, 7u128))
        );
        assert_eq!(metrics.total_duration_ms(), 10);
    }

    #[test]
    fn test_chrome_tracing_emits_begin_end_pairs() {
        let report = sample_report();
        let trace = report.phase_metrics.to_chrome_tracing().unwrap();
        let events: serde_json::Value = serde_json::from_str(&trace).unwrap();
        let events = events.as_array().unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0]["ph"], "B");
        assert_eq!(events[1]["ph"], "E");
        assert_eq!(events[0]["name"], "build_configuration");
    }
}
