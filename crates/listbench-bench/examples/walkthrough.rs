//! Walk through the suite by hand, without Criterion.
//!
//! Demonstrates: build suite → get → remove on a copy → append → one
//! hand-timed batch per operation, printing list sizes.

use listbench_bench::run_batch;
use listbench_core::{BenchmarkSuite, Operation};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== listbench walkthrough ===\n");

    let mut suite = BenchmarkSuite::new();
    println!("array:  {:?}", suite.array());
    println!("linked: {:?}", suite.linked());
    println!("probe:  {}\n", suite.probe());

    println!("get_array()          -> {:?}", suite.get_array());
    println!(
        "remove_linked_head() -> {:?} (linked len still {})",
        suite.remove_linked_head(),
        suite.linked().len()
    );
    for _ in 0..3 {
        suite.append_array();
    }
    println!("append_array() x3    -> array len {}\n", suite.array().len());

    println!("One batch of 10,000 per operation, fresh suite each:");
    for op in Operation::ALL {
        let mut suite = BenchmarkSuite::new();
        let elapsed = run_batch(&mut suite, 10_000, |s| s.invoke(op));
        println!(
            "  {:<20} {:>10.3} ms  (array len {:>6}, linked len {:>6})",
            op.id(),
            elapsed.as_secs_f64() * 1_000.0,
            suite.array().len(),
            suite.linked().len(),
        );
    }
}
