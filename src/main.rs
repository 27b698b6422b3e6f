//! Terminal demo runner (default binary).
//!
//! Interactive mode draws with crossterm and reads the keyboard (arrows or
//! `hjkl` move, up/`x` rotates, space drops, `q`/`Esc` quits). With
//! `--autopilot` the pieces are steered automatically instead. `--headless`
//! always uses the autopilot and prints the board after every stored piece.

mod autopilot;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::{info, warn};

use tetris3d::core::{BoardDimensions, Game, GameConfig};
use tetris3d::input::{handle_key_event, should_quit};
use tetris3d::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris3d::types::{BOARD_DEPTH, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS, WAIT_TIME_MS};

use autopilot::Autopilot;

/// Largest board side accepted on the command line
const MAX_BOARD_SIDE: i64 = 1024;

#[derive(Parser, Debug)]
#[command(name = "tetris3d", about = "3D Tetris board demo")]
struct Args {
    /// RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Board width in blocks
    #[arg(
        long,
        default_value_t = BOARD_WIDTH as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_BOARD_SIDE)
    )]
    width: u16,

    /// Board height in blocks
    #[arg(
        long,
        default_value_t = BOARD_HEIGHT as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_BOARD_SIDE)
    )]
    height: u16,

    /// Milliseconds a piece rests before falling one row
    #[arg(long, default_value_t = WAIT_TIME_MS)]
    wait_ms: u32,

    /// Stop after this many stored pieces (0 = until game over)
    #[arg(long, default_value_t = 0)]
    pieces: u32,

    /// Let the autopilot steer pieces in interactive mode
    #[arg(long)]
    autopilot: bool,

    /// Run without a terminal UI and print the board after each stored piece
    #[arg(long)]
    headless: bool,

    /// With --headless, print JSON lines instead of ASCII boards
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            dimensions: BoardDimensions::new(
                usize::from(self.width),
                usize::from(self.height),
                BOARD_DEPTH,
            ),
            seed: self.seed,
            wait_time_ms: self.wait_ms,
        }
    }

    fn reached_limit(&self, game: &Game) -> bool {
        self.pieces != 0 && game.pieces_placed() >= self.pieces
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut game = Game::new(args.config())?;
    info!("starting game with seed {}", game.seed());

    if args.headless {
        return run_headless(&args, &mut game);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&args, &mut game, &mut term);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e}");
    }
    result
}

fn run_headless(args: &Args, game: &mut Game) -> Result<()> {
    let mut pilot = Autopilot::new(args.seed);

    while !game.is_over() && !args.reached_limit(game) {
        if let Some(action) = pilot.next_action(game) {
            game.apply_action(action)?;
        }
        if game.tick(TICK_MS)?.is_some() {
            print_snapshot(args, game)?;
        }
    }

    info!(
        "finished: {} pieces, {} lines",
        game.pieces_placed(),
        game.lines_cleared()
    );
    Ok(())
}

fn print_snapshot(args: &Args, game: &Game) -> Result<()> {
    let snap = game.snapshot();
    if args.json {
        println!("{}", serde_json::to_string(&snap)?);
    } else {
        println!(
            "pieces {} lines {}{}",
            snap.pieces_placed,
            snap.lines_cleared,
            if snap.game_over { " GAME OVER" } else { "" }
        );
        print!("{}", snap.to_text());
        println!();
    }
    Ok(())
}

fn run(args: &Args, game: &mut Game, term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();
    let mut pilot = args.autopilot.then(|| Autopilot::new(args.seed));
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if pilot.is_none() && !args.reached_limit(game) {
                        if let Some(action) = handle_key_event(key) {
                            game.apply_action(action)?;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if game.is_over() || args.reached_limit(game) {
                continue;
            }
            if let Some(action) = pilot.as_mut().and_then(|p| p.next_action(game)) {
                game.apply_action(action)?;
            }
            game.tick(TICK_MS)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_flags_map_onto_config() {
        let args = Args::try_parse_from(["tetris3d", "--width", "10", "--height", "20"]).unwrap();
        let config = args.config();
        assert_eq!(config.dimensions, BoardDimensions::new(10, 20, BOARD_DEPTH));
    }

    #[test]
    fn board_size_flags_are_bounded() {
        assert!(Args::try_parse_from(["tetris3d", "--width", "40000"]).is_err());
        assert!(Args::try_parse_from(["tetris3d", "--height", "0"]).is_err());
        assert!(Args::try_parse_from(["tetris3d", "--width", "1024"]).is_ok());
    }

    #[test]
    fn defaults_match_the_standard_board() {
        let args = Args::try_parse_from(["tetris3d"]).unwrap();
        assert_eq!(args.config().dimensions, BoardDimensions::default());
    }
}
