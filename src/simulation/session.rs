use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::config::Config;
use crate::simulation::Grid;

/// User commands applied at the start of a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Randomize,
    Clear,
    TogglePause,
}

/// Everything the simulation loop mutates: the grid, the pause flag and the RNG.
pub struct Session {
    grid: Grid,
    paused: bool,
    tick_rate: Duration,
    generation: u64,
    rng: StdRng,
}

impl Session {
    /// Create a running session with a randomized grid
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        let mut session = Self {
            grid: Grid::new(config.rows(), config.columns()),
            paused: false,
            tick_rate: Duration::from_secs_f64(1.0 / f64::from(config.frame_rate.max(1))),
            generation: 0,
            rng,
        };
        session.grid.randomize(&mut session.rng);
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Target interval between ticks
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Generations advanced since startup
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Randomize => {
                self.grid.randomize(&mut self.rng);
                log::info!("Grid randomized ({} live cells)", self.grid.live_count());
            }
            Command::Clear => {
                self.grid.clear();
                log::info!("Grid cleared");
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
        }
    }

    /// Advance one generation unless paused. Returns whether the grid changed generation.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.grid.step();
        self.generation += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        let config = Config {
            window_width: 200,
            window_height: 150,
            ..Config::default()
        };
        Session::with_rng(&config, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_session_starts_randomized_and_running() {
        let session = session(7);
        assert_eq!(session.grid().rows(), 15);
        assert_eq!(session.grid().columns(), 20);
        assert!(session.grid().live_count() > 0);
        assert!(!session.is_paused());
        assert_eq!(session.tick_rate(), Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn test_tick_advances_generation() {
        let mut session = session(1);
        assert!(session.tick());
        assert!(session.tick());
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_paused_grid_is_frozen() {
        let mut session = session(3);
        session.apply(Command::TogglePause);
        assert!(session.is_paused());

        let frozen = session.grid().cells().to_vec();
        for _ in 0..25 {
            assert!(!session.tick());
        }
        assert_eq!(session.grid().cells(), frozen.as_slice());
        assert_eq!(session.generation(), 0);

        session.apply(Command::TogglePause);
        assert!(!session.is_paused());
        assert!(session.tick());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_randomize_then_clear_is_empty() {
        for seed in 0..4 {
            let mut session = session(seed);
            session.apply(Command::Randomize);
            session.apply(Command::Clear);
            assert_eq!(session.grid().live_count(), 0);
        }
    }

    #[test]
    fn test_cleared_grid_stays_empty() {
        let mut session = session(11);
        session.apply(Command::Clear);
        for _ in 0..3 {
            session.tick();
        }
        assert_eq!(session.grid().live_count(), 0);
    }

    #[test]
    fn test_commands_apply_while_paused() {
        let mut session = session(5);
        session.apply(Command::TogglePause);
        session.apply(Command::Clear);
        assert_eq!(session.grid().live_count(), 0);
        session.apply(Command::Randomize);
        assert!(session.grid().live_count() > 0);
        assert!(session.is_paused());
    }
}
