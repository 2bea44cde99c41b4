//! Bounded stack demo
//!
//! Pushes, pops and peeks a `BoundedStack`, logging each step.

use clap::Parser;
use slotdb::stack::{BoundedStack, DEFAULT_STACK_CAPACITY};
use tracing_subscriber::{fmt, EnvFilter};

/// Bounded stack demo
#[derive(Parser, Debug)]
#[command(name = "stack-demo")]
#[command(about = "Walk through push / pop / top on a bounded stack")]
#[command(version)]
struct Args {
    /// Stack capacity
    #[arg(short, long, default_value_t = DEFAULT_STACK_CAPACITY)]
    capacity: usize,

    /// Values pushed in the first bulk push
    #[arg(default_values_t = [13, 1, 114, 58], allow_hyphen_values = true)]
    values: Vec<i32>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,slotdb=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    let mut stack = BoundedStack::with_capacity(args.capacity);

    let pushed = stack.push_multiple(args.values.iter().copied());
    tracing::info!("pushed {} of {} values", pushed, args.values.len());
    report_top(&stack);
    tracing::info!("stack: [{}]", stack);

    let _ = stack.pop();
    report_top(&stack);

    let _ = stack.push(1415);
    let _ = stack.push(48);
    report_top(&stack);
    tracing::info!("stack: [{}]", stack);

    let _ = stack.pop();
    report_top(&stack);
}

fn report_top(stack: &BoundedStack) {
    match stack.top() {
        Ok(value) => tracing::info!("the top of the stack is: {}", value),
        Err(e) => tracing::info!("no top: {}", e),
    }
}
