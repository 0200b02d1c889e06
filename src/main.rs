use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{Context, Result, anyhow, bail};
use crossbeam_channel::{bounded, unbounded};
use gesture_remote::{
    config::Config,
    dispatch::LoggingSink,
    pipeline::{TraceDetector, load_trace, start_recognizer},
    types::Command,
};

const CONFIG_PATH: &str = "gesture-remote.toml";

struct Args {
    trace: PathBuf,
    config: Option<PathBuf>,
    fps: Option<f32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        print_usage();
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None if Path::new(CONFIG_PATH).exists() => Config::load_or_default(CONFIG_PATH),
        None => Config::default(),
    };
    let frames = load_trace(&args.trace)?;
    let frame_interval = args.fps.map(|fps| Duration::from_secs_f32(1.0 / fps));

    let (frame_tx, frame_rx) = bounded(1);
    let (command_tx, command_rx) = unbounded::<Command>();
    let recognizer = start_recognizer(
        TraceDetector,
        frame_rx,
        LoggingSink::new(command_tx),
        &config,
    );

    // Stand-in for the media player: print whatever reaches it.
    let executor = thread::spawn(move || {
        let mut count = 0usize;
        for command in command_rx {
            count += 1;
            println!(
                "{count:>4}  {:<16} {:<14} {}",
                command.label(),
                command.gesture_name(),
                command.description()
            );
        }
        count
    });

    for frame in frames {
        // The recognizer hangs up after an exit gesture.
        if frame_tx.send(frame).is_err() {
            break;
        }
        if let Some(interval) = frame_interval {
            thread::sleep(interval);
        }
    }
    drop(frame_tx);
    recognizer.join();

    let dispatched = executor
        .join()
        .map_err(|_| anyhow!("executor thread panicked"))?;
    println!("{dispatched} command(s) dispatched");

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut trace = None;
    let mut config = None;
    let mut fps = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--fps" => {
                let value = args.next().context("--fps needs a value")?;
                let value: f32 = value
                    .parse()
                    .with_context(|| format!("invalid --fps value {value:?}"))?;
                if !(value > 0.0) {
                    bail!("--fps must be positive");
                }
                fps = Some(value);
            }
            other if other.starts_with('-') => bail!("unknown option {other}"),
            other => {
                if trace.is_some() {
                    bail!("only one trace file can be replayed at a time");
                }
                trace = Some(PathBuf::from(other));
            }
        }
    }

    Ok(trace.map(|trace| Args { trace, config, fps }))
}

fn print_usage() {
    println!("usage: gesture-remote <trace.jsonl> [--config <file.toml>] [--fps <rate>]");
    println!();
    println!("Replays recorded hand landmarks (one JSON line per frame: null or 21 [x, y] pairs)");
    println!("and prints the commands the gesture recognizer dispatches.");
    println!();
    println!("gestures:");
    for command in Command::ALL {
        println!(
            "  {:<16} {:<16} {}",
            command.gesture_name(),
            command.label(),
            command.description()
        );
    }
}
