//! Timed runs per main chain backing and the report printed for them.

use core::fmt;
use std::time::{Duration, Instant};

use crate::error::ReportError;
use crate::MainChain;

/// Outcome of sorting one input with one main chain backing.
#[derive(Debug, Clone)]
pub struct Run<T> {
    pub backing: &'static str,
    pub sorted: Vec<T>,
    pub elapsed: Duration,
    pub comparisons: usize,
}

/// Sorts `v` with the main chain stored in `C` and returns how many times
/// elements were compared.
pub fn count_comparisons<C: MainChain, T: Ord>(v: &mut [T]) -> usize {
    let mut comparisons = 0;
    crate::sort_by_in::<C, T, _>(v, |a, b| {
        comparisons += 1;
        a.cmp(b)
    });
    comparisons
}

/// Sorts a copy of `input` with the main chain stored in `C`, timing the sort.
pub fn timed_run<C: MainChain, T: Ord + Clone>(input: &[T]) -> Run<T> {
    let mut sorted = input.to_vec();

    let start = Instant::now();
    let comparisons = count_comparisons::<C, T>(&mut sorted);
    let elapsed = start.elapsed();

    log::debug!(
        "{} run: {} elements, {comparisons} comparisons, {elapsed:?}",
        C::NAME,
        input.len()
    );

    Run {
        backing: C::NAME,
        sorted,
        elapsed,
        comparisons,
    }
}

/// Before and after view of an input, with one timing line per run.
///
/// ```text
/// Before: 5 3 8 1
/// After: 1 3 5 8
/// Time to process a range of 4 elements with Vec : 1.042 us
/// Time to process a range of 4 elements with VecDeque : 1.209 us
/// ```
#[derive(Debug)]
pub struct Report<'a, T> {
    input: &'a [T],
    runs: Vec<Run<T>>,
    show_sequences: bool,
    show_comparisons: bool,
}

impl<'a, T: Ord> Report<'a, T> {
    /// Checks that every run sorted `input` and that all runs agree.
    pub fn new(input: &'a [T], runs: Vec<Run<T>>) -> Result<Self, ReportError> {
        let first = runs.first().ok_or(ReportError::NoRuns)?;

        for run in &runs {
            if !run.sorted.windows(2).all(|w| w[0] <= w[1]) {
                return Err(ReportError::Unsorted {
                    backing: run.backing,
                });
            }
            if run.sorted != first.sorted {
                return Err(ReportError::Mismatch {
                    left: first.backing,
                    right: run.backing,
                });
            }
        }

        Ok(Self {
            input,
            runs,
            show_sequences: true,
            show_comparisons: false,
        })
    }

    pub fn with_sequences(mut self, show: bool) -> Self {
        self.show_sequences = show;
        self
    }

    pub fn with_comparisons(mut self, show: bool) -> Self {
        self.show_comparisons = show;
        self
    }

    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    pub fn sorted(&self) -> &[T] {
        // `new` refuses an empty list of runs.
        &self.runs[0].sorted
    }
}

fn write_sequence<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    v: &[T],
) -> fmt::Result {
    write!(f, "{label}:")?;
    for x in v {
        write!(f, " {x}")?;
    }
    writeln!(f)
}

impl<T: Ord + fmt::Display> fmt::Display for Report<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_sequences {
            write_sequence(f, "Before", self.input)?;
            write_sequence(f, "After", self.sorted())?;
        }

        let len = self.input.len();
        for run in &self.runs {
            let micros = run.elapsed.as_secs_f64() * 1e6;
            writeln!(
                f,
                "Time to process a range of {len} elements with {} : {micros:.3} us",
                run.backing
            )?;
        }

        if self.show_comparisons {
            for run in &self.runs {
                writeln!(f, "Comparisons with {} : {}", run.backing, run.comparisons)?;
            }
        }

        Ok(())
    }
}
