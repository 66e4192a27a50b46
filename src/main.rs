//! Whack-a-Zombie entry point
//!
//! Runs the game headless: the demo autoplayer supplies input, frames and
//! sounds go to the log. A windowed front end plugs into the same
//! `InputSource`/`Renderer`/`AudioPlayer` traits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use whack_a_zombie::audio::AudioManager;
use whack_a_zombie::platform::{AutoPlayer, ManualClock, SystemClock};
use whack_a_zombie::renderer::LogRenderer;
use whack_a_zombie::sim::{GameController, SeededRandom};
use whack_a_zombie::{GameLoop, Settings, Tuning};

/// Headless Whack-a-Zombie driven by the demo player
#[derive(Debug, Parser)]
#[command(name = "whack-a-zombie", version)]
struct Options {
    /// Game balance overrides (JSON)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Player preferences (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Spawn RNG seed, random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// How long to run, in seconds
    #[arg(long, default_value_t = 60)]
    seconds: u64,
    /// Pace frames against the wall clock instead of simulating
    #[arg(long)]
    realtime: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::parse();

    let tuning = match &opts.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };
    let settings = opts
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    let rng = match opts.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    let seed = rng.seed();
    log::info!("Whack-a-Zombie starting (seed {})", seed);

    let mut controller = GameController::new(tuning, rng);
    controller.set_show_hitboxes(settings.show_hitboxes);

    let input = AutoPlayer::from_settings(seed ^ 0x5eed, &settings);
    let audio = AudioManager::from_settings(&settings);
    let renderer = LogRenderer::new(settings.hud_interval_ms);
    let frame_ms = settings.frame_duration_ms();
    let duration_ms = opts.seconds.saturating_mul(1000);

    if opts.realtime {
        let clock = SystemClock::new();
        let mut game = GameLoop::new(controller, input, audio, renderer, 0);
        game.run_realtime(&clock, frame_ms, Some(duration_ms));
    } else {
        let mut clock = ManualClock::new(0);
        let mut game = GameLoop::new(controller, input, audio, renderer, 0);
        game.run_simulated(&mut clock, frame_ms, duration_ms);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_parse() {
        let opts =
            Options::try_parse_from(["whack-a-zombie", "--seed", "42", "--seconds", "5", "--realtime"])
                .unwrap();
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.seconds, 5);
        assert!(opts.realtime);
        assert!(opts.tuning.is_none());

        let opts = Options::try_parse_from(["whack-a-zombie", "--tuning", "balance.json"]).unwrap();
        assert_eq!(opts.tuning, Some(PathBuf::from("balance.json")));
        assert_eq!(opts.seconds, 60);
        assert!(!opts.realtime);
    }

    #[test]
    fn test_options_errors() {
        assert!(Options::try_parse_from(["whack-a-zombie", "--seed"]).is_err());
        assert!(Options::try_parse_from(["whack-a-zombie", "--seed", "abc"]).is_err());
        assert!(Options::try_parse_from(["whack-a-zombie", "--bogus"]).is_err());
    }

    #[test]
    fn test_options_definition() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }
}
