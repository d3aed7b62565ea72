//! Rendering of a search outcome as text lines or a JSON document.

use std::io::Write;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::solver::{SolverResult, SolverStatus};
use crate::state::{Crossing, Move, State};

/// Wall-clock timer started once at process start
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Progress line printed when the search first dequeues a node at `depth`
pub fn progress_line(depth: u32, elapsed: Duration) -> String {
    format!("[depth = {}] {:.2}s", depth, elapsed.as_secs_f64())
}

/// Write the text report: expansions, the solution or its absence, then the
/// elapsed time read from `timer` at the very end.
pub fn write_text<W: Write>(out: &mut W, result: &SolverResult<Move>, timer: &Timer) -> Result<()> {
    writeln!(out, "{} expansions", result.expansions)?;

    match &result.solution {
        Some(steps) => {
            writeln!(out, "solution ({} steps):", steps.len())?;
            for step in steps {
                writeln!(out, "{}", step)?;
            }
        }
        None => writeln!(out, "no solution")?,
    }

    writeln!(out, "elapsed time: {:.2}s", timer.elapsed().as_secs_f64())?;
    Ok(())
}

/// JSON output for a search outcome
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub solved: bool,
    pub status: SolverStatus,
    pub expansions: usize,
    pub max_depth: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<StepOutput>>,
    pub elapsed_ms: u64,
}

/// One crossing of the solution
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutput {
    pub guards: i32,
    pub prisoners: i32,
    pub direction: Crossing,
    pub result: State,
    pub description: String,
}

impl From<&Move> for StepOutput {
    fn from(step: &Move) -> Self {
        Self {
            guards: step.guards,
            prisoners: step.prisoners,
            direction: step.crossing,
            result: step.result,
            description: step.to_string(),
        }
    }
}

pub fn format_result(result: &SolverResult<Move>, elapsed: Duration) -> SearchReport {
    SearchReport {
        solved: result.is_solved(),
        status: result.status,
        expansions: result.expansions,
        max_depth: result.max_depth,
        steps: result.solution.as_ref().map(Vec::len),
        solution: result
            .solution
            .as_ref()
            .map(|steps| steps.iter().map(StepOutput::from).collect()),
        elapsed_ms: elapsed.as_millis() as u64,
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &SearchReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{breadth_first_tree_search, SolverConfig};

    fn render_text(result: &SolverResult<Move>) -> Vec<String> {
        let mut buffer = Vec::new();
        write_text(&mut buffer, result, &Timer::start()).unwrap();
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(
            progress_line(3, Duration::from_millis(1250)),
            "[depth = 3] 1.25s"
        );
    }

    #[test]
    fn test_text_report_for_solution() {
        let result = breadth_first_tree_search(State::initial(), &SolverConfig::default(), |_| {});
        let lines = render_text(&result);

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "10963 expansions");
        assert_eq!(lines[1], "solution (11 steps):");
        assert_eq!(
            lines[2],
            "take 0 guards and 2 prisoners from the original shore to the new shore. < State (3, 1, 0) >"
        );
        assert_eq!(
            lines[12],
            "take 0 guards and 2 prisoners from the original shore to the new shore. < State (0, 0, 0) >"
        );
        assert!(lines[13].starts_with("elapsed time: "));
        assert!(lines[13].ends_with('s'));
    }

    #[test]
    fn test_text_report_without_solution() {
        let result = breadth_first_tree_search(State::new(3, 3, 5), &SolverConfig::default(), |_| {});
        let lines = render_text(&result);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1 expansions");
        assert_eq!(lines[1], "no solution");
        assert!(lines[2].starts_with("elapsed time: "));
    }

    #[test]
    fn test_json_report_shape() {
        let result = breadth_first_tree_search(State::initial(), &SolverConfig::default(), |_| {});
        let report = format_result(&result, Duration::from_millis(42));

        let mut buffer = Vec::new();
        write_json(&mut buffer, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["solved"], true);
        assert_eq!(value["status"], "solved");
        assert_eq!(value["expansions"], 10963);
        assert_eq!(value["maxDepth"], 11);
        assert_eq!(value["steps"], 11);
        assert_eq!(value["elapsedMs"], 42);

        let first = &value["solution"][0];
        assert_eq!(first["guards"], 0);
        assert_eq!(first["prisoners"], 2);
        assert_eq!(first["direction"], "outbound");
        assert_eq!(first["result"]["boat"], 0);
        assert_eq!(value["solution"][1]["direction"], "return");
    }

    #[test]
    fn test_json_report_omits_missing_solution() {
        let result = breadth_first_tree_search(State::new(3, 3, 5), &SolverConfig::default(), |_| {});
        let report = format_result(&result, Duration::ZERO);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["solved"], false);
        assert_eq!(value["status"], "exhausted");
        assert!(value.get("solution").is_none());
        assert!(value.get("steps").is_none());
    }
}
