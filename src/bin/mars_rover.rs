//! Runs the default scenario: 10x10 grid, obstacles at (2, 2) and (3, 5), rover at
//! (0, 0) facing North. The command string is the first argument (default `MMRMLM`).

use mars_rover::{Controller, RoverConfig};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set and parseable, otherwise `warn`.
fn log_filter(spec: Option<&str>) -> EnvFilter {
    spec.and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let commands = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "MMRMLM".to_string());

    let rover = RoverConfig::default().build()?;
    let mut controller = Controller::new(rover);
    controller.add_commands(&commands);

    let report = controller.execute();
    if let Some(err) = report.halted_by {
        println!("{err}");
    }

    println!("{}", controller.rover().final_position());
    println!("{}", controller.rover().status_report());
    Ok(())
}
