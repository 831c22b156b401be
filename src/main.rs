mod app;
mod camera;
mod config;
mod error;
mod gpu;
mod input;
mod mesh;
mod scheduler;
mod simulation;

use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new();
    event_loop.run_app(&mut app)?;

    log::info!("Simulation stopped");
    Ok(())
}
