use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use fastrand::Rng;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Stdout, stdout};
use std::time::{Duration, Instant};

use sayyes::cli::Cli;
use sayyes::effects::{Effect, proposal::Proposal};
use sayyes::error::{Error, Result as SessionResult};

const FIXED_DT: f32 = 1.0 / 60.0;

fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path).map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }

    builder.init();

    if cli.verbose > 0 && cli.log_file.is_none() {
        warn!("-v needs --log-file; logging stays at warn while the screen is in use");
    }
    Ok(())
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(key_event) = event else {
        return false;
    };
    key_event.code == KeyCode::Char('q')
        || key_event.code == KeyCode::Esc
        || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(event::KeyModifiers::CONTROL))
}

fn frame_loop<E: Effect>(stdout: &mut BufWriter<Stdout>, effect: &mut E) -> SessionResult<()> {
    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;

    loop {
        if event::poll(Duration::from_millis(1))? {
            let event = event::read()?;
            if is_quit(&event) {
                break;
            }
            match event {
                Event::Resize(cols, rows) => {
                    // The drawing surface keeps its startup size; only presentation is clipped.
                    effect.resize(cols as usize, rows as usize);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                other => effect.handle_event(&other),
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        accumulator += frame_time;
        if accumulator > FIXED_DT * 3.0 {
            accumulator = FIXED_DT * 3.0;
        }

        while accumulator >= FIXED_DT {
            effect.update(FIXED_DT);
            accumulator -= FIXED_DT;
        }

        effect.render(stdout)?;
    }

    Ok(())
}

fn run_effect<E: Effect>(rng: Rng) -> SessionResult<()> {
    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All), EnableMouseCapture)?;

    let result = terminal::size().map_err(Error::from).and_then(|(cols, rows)| {
        let mut effect = E::new(cols as usize, rows as usize, rng);
        frame_loop(&mut stdout, &mut effect)
    });

    execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture)?;
    terminal::disable_raw_mode()?;

    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if let Some(color) = cli.bg_color {
        sayyes::set_bg_color(color);
    }

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("starting with seed {}", seed);

    run_effect::<Proposal>(Rng::with_seed(seed)).context("terminal session failed")
}
