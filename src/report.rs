//! Human-readable run report.
//!
//! The report is a pure function of the instance, the configuration and
//! the search outcome in [`TabuResult`]; two identical runs render
//! byte-identical text. Wall-clock time varies between runs, so
//! [`TabuResult::elapsed`] is left out and only logged by the CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::instance::Instance;
use crate::solution::Solution;
use crate::tabu::{TabuConfig, TabuResult};

const RULE: &str = "****************************************************";
const TITLE: &str = "**** SET PARTITIONING SOLVER USING TABU SEARCH *****";
const INDENT: &str = "     ";
const FIELD: &str = "        ";
const SUBSET_ROW: &str = "             ";

/// Report over a finished run.
///
/// # Examples
///
/// ```
/// use spp_tabu::instance::Instance;
/// use spp_tabu::report::RunReport;
/// use spp_tabu::tabu::{TabuConfig, TabuRunner};
///
/// let instance = Instance::new(1, vec![(2, vec![1])]).unwrap();
/// let config = TabuConfig::default();
/// let result = TabuRunner::run(&instance, &config).unwrap();
/// let text = RunReport::new(&instance, &config, &result).to_string();
/// assert!(text.contains("FEASIBLE SOLUTION FOUND!"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    instance: &'a Instance,
    config: &'a TabuConfig,
    result: &'a TabuResult,
}

impl<'a> RunReport<'a> {
    pub fn new(instance: &'a Instance, config: &'a TabuConfig, result: &'a TabuResult) -> Self {
        Self {
            instance,
            config,
            result,
        }
    }

    /// Writes the report to `w`.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{self}")?;
        w.flush()
    }

    /// Creates (or truncates) `path` and writes the report into it.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    fn solution(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        verdict: &str,
        solution: &Solution,
    ) -> fmt::Result {
        if solution.is_feasible() {
            writeln!(f, "FEASIBLE {verdict}SOLUTION FOUND!")?;
        } else {
            writeln!(f, "NO FEASIBLE {verdict}SOLUTION FOUND!")?;
        }
        writeln!(f)?;

        writeln!(f, "{label} solution:")?;
        writeln!(f, "{FIELD}Value: {}", solution.weight())?;
        writeln!(f, "{FIELD}Objective: {}", solution.evaluate())?;
        if !solution.is_feasible() {
            writeln!(
                f,
                "{FIELD}Infeasible elements: {} ({} uncovered)",
                solution.infeasibility_count(),
                solution.uncovered_elements().count()
            )?;
        }
        writeln!(f, "{FIELD}Elements: {}", join(solution.covered_elements()))?;
        writeln!(f, "{FIELD}Subsets:")?;
        for s in solution.selected_subsets() {
            writeln!(
                f,
                "{SUBSET_ROW}Number {s} (Value = {}): {}",
                self.instance.weight(s),
                join(self.instance.elements(s).iter().copied())
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "RESULTS:")?;
        writeln!(f)?;

        writeln!(f, "Params:")?;
        writeln!(f, "{INDENT}Tabu list size: {}", self.config.tabu_capacity)?;
        writeln!(f, "{INDENT}Iteration limit: {}", self.config.iteration_limit)?;
        writeln!(f, "{INDENT}Time limit: {} seconds", self.config.time_limit.as_secs())?;
        writeln!(f, "{INDENT}Random seed: {}", self.config.seed)?;
        writeln!(f)?;

        writeln!(f, "Number of iterations: {}", self.result.iterations)?;
        writeln!(f)?;

        writeln!(f, "Instance:")?;
        writeln!(f, "{INDENT}Number of elements: {}", self.instance.element_count())?;
        writeln!(f, "{INDENT}Number of subsets: {}", self.instance.subset_count())?;
        writeln!(f)?;

        self.solution(f, "Initial", "INITIAL ", &self.result.initial)?;
        self.solution(f, "Final", "", &self.result.best)
    }
}

fn join(items: impl Iterator<Item = usize>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}
