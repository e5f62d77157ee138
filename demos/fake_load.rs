//! Example faking some workloads behind a series of load bars.
//!
//! Run with `RUST_LOG=loadbar=debug` to see the load bar transitions on stderr.

use color_eyre::Result;
use indicatif::HumanDuration;
use loadbar::{BracketStyle, LoadBar, LoadBarBuilder, LoadBarConfig, StyleFlags};
use rand::Rng;
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("Welcome.\nHere's the default load bar.");
    fake_load(LoadBar::new(LoadBarConfig::default())?)?;

    let builder = LoadBarBuilder::new().add_style(StyleFlags::PERCENTAGE);
    println!("This load bar also displays the progress percentage.");
    fake_load(builder.clone().build()?)?;

    let builder = builder
        .add_style(StyleFlags::ALL)
        .clear_when_finished(true);
    println!("This load bar has all styles applied, and clears when it is finished.");
    fake_load(builder.build()?)?;

    let builder = LoadBarBuilder::new()
        .styles(StyleFlags::BAR | StyleFlags::PERCENTAGE)
        .bar_width(80)
        .bar_material('-');
    println!("This bar has a custom width and material.");
    fake_load(builder.build()?)?;

    let builder = LoadBarBuilder::new()
        .bar_material('|')
        .bar_width(50)
        .bracket_style(BracketStyle::Angle)
        .clear_when_finished(true)
        .start_value(100.0)
        .finish_value(300.0)
        .current_value(125.0)
        .styles(StyleFlags::ALL);
    println!("This bar is all sorts of customized.");
    fake_load(builder.build()?)?;

    Ok(())
}

fn fake_load(mut bar: LoadBar) -> Result<()> {
    let mut rng = rand::rng();
    let started = Instant::now();

    while !bar.is_finished() {
        bar.inc(1.0)?;
        thread::sleep(Duration::from_millis(rng.random_range(10..100)));
    }

    println!("Done loading in {}!", HumanDuration(started.elapsed()));
    Ok(())
}
