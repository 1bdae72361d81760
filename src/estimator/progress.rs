//! Plain-text progress of the network training.
use colored::Colorize;

use std::time::Duration;

use crate::Task;

const WIDTH: usize = 10;


#[inline(always)]
pub(crate) fn print_start(node: &str, task: Task) {
    println!(
        "{:>WIDTH$} training of node: {} [{}]",
        "Start".bold().green(),
        node.bold(),
        task,
    );
}


#[inline(always)]
pub(crate) fn print_finish(node: &str, elapsed: Duration, test_loss: Option<f64>) {
    let secs = elapsed.as_secs_f64();
    println!(
        "{:>WIDTH$} training of node: {} in {secs:.3} seconds",
        "Finished".bold().cyan(),
        node.bold(),
    );

    let error = match test_loss {
        Some(loss) => format!("{loss:.6}"),
        None => "n/a (empty test split)".into(),
    };
    println!("{:>WIDTH$} {}", "Test error:".bold().yellow(), error);
}
