//! Headless orrery driver: builds a scene, scripts a drag and logs the
//! composed frames.

use std::path::PathBuf;

use orrery::gpu::{submit_frame, RecordingBackend, ShaderProgram};
use orrery::input::InputSender;
use orrery::options::Options;
use orrery::scene::{BodyTable, SceneState};
use orrery::OrreryError;

const USAGE: &str =
    "Usage: orrery [--options <file.toml>] [--table <bodies.toml>] [--set section.field=value]... [--ticks N] [--dt SECONDS]";

/// Drawable size the headless run pretends to have.
const VIEWPORT: (u32, u32) = (1280, 720);

struct Args {
    options: Option<PathBuf>,
    table: Option<PathBuf>,
    overrides: Vec<String>,
    ticks: u32,
    dt: f32,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Self {
            options: None,
            table: None,
            overrides: Vec::new(),
            ticks: 240,
            dt: 1.0 / 60.0,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            let mut value = || iter.next().ok_or_else(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--options" => args.options = Some(PathBuf::from(value()?)),
                "--table" => args.table = Some(PathBuf::from(value()?)),
                "--set" => args.overrides.push(value()?),
                "--ticks" => {
                    args.ticks = value()?
                        .parse()
                        .map_err(|e| format!("--ticks: {e}"))?;
                }
                "--dt" => {
                    args.dt = value()?.parse().map_err(|e| format!("--dt: {e}"))?;
                }
                other => return Err(format!("unknown argument {other}")),
            }
        }
        Ok(args)
    }
}

/// A short left-to-right drag across the middle of the viewport, spread
/// over the first ticks of the run.
fn script_drag(tick: u32, input: &InputSender) {
    let (cx, cy) = (VIEWPORT.0 as f32 / 2.0, VIEWPORT.1 as f32 / 2.0);
    let _ = match tick {
        10 => input.pointer_down(cx, cy),
        11..=40 => input.pointer_move(cx + (tick - 10) as f32 * 8.0, cy - (tick - 10) as f32 * 2.0),
        41 => input.pointer_up(),
        _ => true,
    };
}

fn run(args: &Args) -> Result<(), OrreryError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    for spec in &args.overrides {
        options = options.apply_override(spec)?;
        log::debug!("override {spec}");
    }
    let table = match &args.table {
        Some(path) => BodyTable::load(path)?,
        None => BodyTable::solar_system(),
    };

    let (mut state, input) = SceneState::new(&options, &table, VIEWPORT.0, VIEWPORT.1)?;
    let mut program = ShaderProgram::new(RecordingBackend::body_program());

    for tick in 0..args.ticks {
        script_drag(tick, &input);
        let frame = state.tick_at(tick as f32 * args.dt);

        program.backend_mut().clear();
        submit_frame(&mut program, state.scene(), &frame);

        if tick % 60 == 0 {
            log::info!(
                "tick {tick}: t={:.2}s camera {:?}, {} draws",
                frame.time,
                frame.camera_position.to_array(),
                program.backend().draws().count()
            );
            log::debug!("view {:?}", frame.view.to_cols_array_2d());
            for (body, transform) in state.scene().bodies().iter().zip(&frame.bodies) {
                log::debug!(
                    "{:>8} at {:?} model {:?}",
                    body.name(),
                    transform.position.to_array(),
                    transform.model.to_cols_array()
                );
            }
        }
    }

    log::info!(
        "finished {} ticks, camera heading {:.5} pitch {:.5}",
        args.ticks,
        state.camera().state().heading,
        state.camera().state().pitch
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
