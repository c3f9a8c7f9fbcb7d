use std::time::Duration;

use mergeinsertion::error::ReportError;
use mergeinsertion::report::{count_comparisons, timed_run, Report, Run};
use mergeinsertion::{DequeChain, VecChain};

fn run(backing: &'static str, sorted: Vec<u32>) -> Run<u32> {
    Run {
        backing,
        sorted,
        elapsed: Duration::from_micros(12),
        comparisons: 5,
    }
}

#[test]
fn timed_runs_sort_a_copy() {
    let input = [9, 1, 8, 2, 7, 3, 6, 4, 5];

    let vec_run = timed_run::<VecChain, u32>(&input);
    let deque_run = timed_run::<DequeChain, u32>(&input);

    assert_eq!(vec_run.backing, "Vec");
    assert_eq!(deque_run.backing, "VecDeque");
    assert_eq!(vec_run.sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(deque_run.sorted, vec_run.sorted);
    assert_eq!(vec_run.comparisons, deque_run.comparisons);
    assert!(vec_run.comparisons <= 19);
    assert_eq!(input, [9, 1, 8, 2, 7, 3, 6, 4, 5]);
}

#[test]
fn counts_pairing_comparison() {
    let mut v = [2, 1];
    assert_eq!(count_comparisons::<VecChain, _>(&mut v), 1);
    assert_eq!(v, [1, 2]);
}

#[test]
fn report_layout() {
    let input = [5, 3, 8, 1];
    let runs = vec![run("Vec", vec![1, 3, 5, 8]), run("VecDeque", vec![1, 3, 5, 8])];
    let report = Report::new(&input, runs).unwrap();

    assert_eq!(report.sorted(), [1, 3, 5, 8]);
    assert_eq!(
        report.to_string(),
        "Before: 5 3 8 1\n\
         After: 1 3 5 8\n\
         Time to process a range of 4 elements with Vec : 12.000 us\n\
         Time to process a range of 4 elements with VecDeque : 12.000 us\n"
    );
}

#[test]
fn report_options() {
    let input = [2, 1];
    let report = Report::new(&input, vec![run("Vec", vec![1, 2])])
        .unwrap()
        .with_sequences(false)
        .with_comparisons(true);

    assert_eq!(
        report.to_string(),
        "Time to process a range of 2 elements with Vec : 12.000 us\n\
         Comparisons with Vec : 5\n"
    );
}

#[test]
fn report_rejects_bad_runs() {
    let input = [2, 1, 3];

    assert_eq!(
        Report::new(&input, Vec::new()).unwrap_err(),
        ReportError::NoRuns
    );
    assert_eq!(
        Report::new(&input, vec![run("Vec", vec![2, 1, 3])]).unwrap_err(),
        ReportError::Unsorted { backing: "Vec" }
    );
    assert_eq!(
        Report::new(&input, vec![run("Vec", vec![1, 2, 3]), run("VecDeque", vec![1, 2, 2])])
            .unwrap_err(),
        ReportError::Mismatch {
            left: "Vec",
            right: "VecDeque"
        }
    );
}
