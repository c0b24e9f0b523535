//! Full-screen viewer for the influenza prediction dashboard.
//!
//! Opens a single window whose only content is a native web view showing the
//! remote dashboard, kept inside the host's safe area.

use fluview::{
    app::Shell,
    cli::Cli,
    probe::{PROBE_TIMEOUT, probe_blocking},
};
use std::process::ExitCode;
use tracing::{Level, error, info};

fn main() -> ExitCode {
    let args: Cli = argh::from_env();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let shell = Shell::new(args.to_config());
    info!("Content source: {}", shell.viewer().source());

    if args.check {
        match probe_blocking(shell.viewer().source(), PROBE_TIMEOUT) {
            Ok(outcome) if !outcome.is_reachable() => {
                info!("Dashboard unreachable; mounting anyway")
            }
            Ok(_) => {}
            Err(e) => error!("Probe could not run: {}", e),
        }
    }

    if args.dry_run {
        return match shell.dry_run() {
            Ok(layout) => {
                info!("Container: {:?}", layout.container);
                info!("Viewer:    {:?}", layout.viewer);
                info!("Insets:    {:?}", layout.insets);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Layout failed: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
