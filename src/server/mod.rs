//! Server module - blocking connection lifecycle
//!
//! Listener, single accept, session loop, and teardown, composed
//! sequentially on one thread. Fatal setup failures are returned to the
//! entry point as `SetupError`; nothing in here terminates the process.

pub mod listener;
pub mod protocol;
pub mod session;

use std::io;
use std::net::{Shutdown, TcpListener, TcpStream};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::{GameRound, SimpleRng};
use crate::types::GAME_PORT;

pub use listener::{accept_client, create_listener};
pub use session::{run_session, SessionEnd};

/// Listen configuration; the defaults are the fixed production constants.
/// Port 0 exists for tests that need an ephemeral port.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: GAME_PORT }
    }
}

/// Fatal setup failures, mapped to process exit codes by the entry point.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no addresses resolved for port {port}")]
    Resolve { port: u16 },
    #[error("no bindable address for port {port}")]
    Bind { port: u16 },
    #[error("accept failed: {source}")]
    Accept { source: io::Error },
}

impl SetupError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::Resolve { .. } => 1,
            SetupError::Bind { .. } => 2,
            SetupError::Accept { .. } => 3,
        }
    }
}

/// Accept one client, run its session to completion, then tear down.
///
/// The listener is consumed: teardown closes it together with the client
/// socket whichever way the session ends, and an accept failure closes it
/// through the error return.
pub fn serve(listener: TcpListener, rng: SimpleRng) -> Result<(), SetupError> {
    let mut stream = accept_client(&listener)?;

    let round = GameRound::new(rng);
    match run_session(&mut stream, round) {
        SessionEnd::ClientClosed => info!("client closed the connection"),
        SessionEnd::TransportError(e) => warn!(error = %e, "session ended on transport error"),
    }

    teardown(stream, listener);
    Ok(())
}

/// Half-close the client's read side, then close both sockets in order.
fn teardown(stream: TcpStream, listener: TcpListener) {
    if let Err(e) = stream.shutdown(Shutdown::Read) {
        // The peer may already be gone; nothing left to do with it.
        debug!(error = %e, "read-side shutdown failed");
    }
    drop(stream);
    drop(listener);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_game_port() {
        assert_eq!(ServerConfig::default().port, GAME_PORT);
    }

    #[test]
    fn exit_codes_follow_the_setup_taxonomy() {
        assert_eq!(SetupError::Resolve { port: 24042 }.exit_code(), 1);
        assert_eq!(SetupError::Bind { port: 24042 }.exit_code(), 2);
        let accept = SetupError::Accept {
            source: io::Error::from(io::ErrorKind::ConnectionAborted),
        };
        assert_eq!(accept.exit_code(), 3);
    }

    #[test]
    fn setup_errors_name_the_port() {
        let err = SetupError::Bind { port: 24042 };
        assert!(err.to_string().contains("24042"));
    }
}
