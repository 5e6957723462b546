//! Guessing game server runner (default binary).
//!
//! Wires the socket-stack capability, listener, startup keypress gate, and
//! the single-client session, then maps fatal setup errors to the process
//! exit code. Exit codes: 0 normal, 1 address-resolution failure, 2 no
//! bindable address, 3 accept failure.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tcp_guess::core::SimpleRng;
use tcp_guess::input::wait_for_keypress;
use tcp_guess::netstack::{HostNetStack, NetStack};
use tcp_guess::server::{create_listener, serve, ServerConfig, SetupError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut netstack = HostNetStack::default();
    if let Err(e) = netstack.acquire() {
        error!(error = %e, "socket stack unavailable");
        return ExitCode::FAILURE;
    }

    let code = match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal setup error");
            ExitCode::from(e.exit_code())
        }
    };

    netstack.release();
    code
}

fn run() -> Result<(), SetupError> {
    let config = ServerConfig::default();
    let listener = create_listener(config.port)?;

    info!("server running; press any key to start accepting");
    if let Err(e) = wait_for_keypress() {
        // No controlling terminal (service or CI run); skip the debug pause.
        info!(error = %e, "keypress gate skipped");
    }

    serve(listener, SimpleRng::from_clock())
}
