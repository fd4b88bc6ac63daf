//! Counter Widget
//!
//! Drives the counter from the terminal. Type `+` to press Increment, `-` to
//! press Decrement and `q` to quit. An optional first argument names a JSON
//! file with view labels.
//!
//! Run with: cargo run --example counter_widget [labels.json]

use std::io::{self, BufRead, Write};
use stillwater::effect::Effect;
use tally::core::Action;
use tally::{CounterWidget, RenderError, Renderer, View, ViewConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment that prints every view to stdout.
#[derive(Clone)]
struct Terminal;

impl Renderer for Terminal {
    fn present(&self, view: &View) -> Result<(), RenderError> {
        let mut out = io::stdout().lock();
        writeln!(out, "\n{view}").map_err(|e| RenderError::PresentFailed(e.to_string()))
    }
}

fn load_config() -> Result<ViewConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(ViewConfig::from_json(&std::fs::read_to_string(path)?)?),
        None => Ok(ViewConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let env = Terminal;
    let mut widget: CounterWidget<Terminal> = CounterWidget::new(load_config()?);
    env.present(&widget.view())?;

    for line in io::stdin().lock().lines() {
        let action = match line?.trim() {
            "+" => Action::Increment,
            "-" => Action::Decrement,
            "q" => break,
            other => {
                eprintln!("unknown input '{other}', expected +, - or q");
                continue;
            }
        };
        widget.dispatch(action).run(&env).await?;
    }

    println!(
        "\n{} presses, {} rejected",
        widget.history().transitions().len(),
        widget.history().rejected_count()
    );
    Ok(())
}
