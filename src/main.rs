use std::thread;

use anyhow::Context;
use lifeset::{Renderer, Viewport, WorldState};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod console;
mod options;

use console::{ConsoleCommand, ConsoleRender};
use options::{Args, BOUNDS};

/// Bounds from the command line, prompting for any that were left out
fn resolve_viewport(args: &Args) -> anyhow::Result<Viewport> {
    let mut bounds = [0; 4];
    for ((slot, given), name) in bounds.iter_mut().zip(args.bounds()?).zip(BOUNDS) {
        *slot = match given {
            Some(value) => value,
            None => console::prompt(name)?,
        };
    }
    let [x1, y1, x2, y2] = bounds;
    Ok(Viewport::new(x1, y1, x2, y2)?)
}

fn initial_world(args: &Args, viewport: &Viewport) -> anyhow::Result<WorldState> {
    if let Some(file_name) = args.input_file() {
        let world = args
            .codec()?
            .read_file(&file_name)
            .with_context(|| format!("failed to read {file_name}"))?;
        info!(file = %file_name, alive = world.len(), "loaded world");
        return Ok(world);
    }

    let fill = args.fill_mode()?;
    let world = fill.create_alive(viewport);
    info!(?fill, alive = world.len(), "generated world");
    Ok(world)
}

fn status(generation: usize, state: &WorldState) -> String {
    format!("generation {generation} (alive {})", state.len())
}

fn replay(args: &Args, states: &[WorldState], viewport: &Viewport) -> anyhow::Result<()> {
    let renderer = Renderer::new(args.glyphs()?);
    let sleep = args.sleep()?;

    if !args.console() {
        for (generation, state) in states.iter().enumerate() {
            println!("{}", status(generation, state));
            print!("{}", renderer.render(state, viewport));
            if let Some(time) = sleep {
                thread::sleep(time);
            }
        }
        return Ok(());
    }

    let mut console = ConsoleRender::new()?;
    for (generation, state) in states.iter().enumerate() {
        while let Some(cmd) = console.poll_events()? {
            if let ConsoleCommand::Exit = cmd {
                debug!(generation, "replay interrupted");
                return Ok(());
            }
        }
        let mut line = status(generation, state);
        if generation + 1 == states.len() {
            line.push_str(" - press q to quit");
        }
        console.render(&renderer.render(state, viewport), &line)?;
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    console.wait_for_exit()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lifeset=info")),
        )
        .init();

    let Some(args) = Args::from_env()? else {
        return Ok(());
    };

    let viewport = resolve_viewport(&args)?;
    let world = initial_world(&args, &viewport)?;
    let generations = match args.generations()? {
        Some(count) => count,
        None => console::prompt("generations")?,
    };

    let engine = args.engine();
    info!(?engine, generations, "evolving");
    let states = engine.evolve(&world, generations)?;

    replay(&args, &states, &viewport)?;

    if let (Some(file_name), Some(last)) = (args.output_file(), states.last()) {
        args.codec()?
            .write_file(&file_name, last)
            .with_context(|| format!("failed to write {file_name}"))?;
        info!(file = %file_name, alive = last.len(), "saved last generation");
    }

    Ok(())
}
