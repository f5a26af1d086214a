mod app;
mod clock;
mod config;
mod error;
mod gpu;
mod simulation;

use winit::event_loop::EventLoop;

use crate::app::App;
use crate::config::Config;
use crate::error::Error;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    app.into_result()
}
