//! Listener setup and the single accept
//!
//! Wildcard candidates are resolved for both address families and tried in
//! order; the first one that binds wins. The server accepts exactly one
//! connection over its whole lifetime.

use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

use tracing::{info, warn};

use crate::server::SetupError;

/// Wildcard hosts tried in order when building listen candidates.
const WILDCARD_HOSTS: [&str; 2] = ["::", "0.0.0.0"];

fn resolve_candidates(port: u16) -> Result<Vec<SocketAddr>, SetupError> {
    let mut candidates = Vec::new();
    for host in WILDCARD_HOSTS {
        match (host, port).to_socket_addrs() {
            Ok(addrs) => candidates.extend(addrs),
            Err(e) => warn!(host, error = %e, "address lookup failed"),
        }
    }

    if candidates.is_empty() {
        return Err(SetupError::Resolve { port });
    }
    Ok(candidates)
}

/// Bind and listen on the first workable wildcard candidate.
///
/// `std` fixes the listen backlog; with a single accept the queue depth is
/// unobservable anyway.
pub fn create_listener(port: u16) -> Result<TcpListener, SetupError> {
    for addr in resolve_candidates(port)? {
        match TcpListener::bind(addr) {
            Ok(listener) => {
                match listener.local_addr() {
                    Ok(local) => info!(%local, "listening"),
                    Err(_) => info!(%addr, "listening"),
                }
                return Ok(listener);
            }
            Err(e) => warn!(%addr, error = %e, "bind failed; trying next candidate"),
        }
    }

    Err(SetupError::Bind { port })
}

/// Block until one client connects.
pub fn accept_client(listener: &TcpListener) -> Result<TcpStream, SetupError> {
    let (stream, peer) = listener
        .accept()
        .map_err(|source| SetupError::Accept { source })?;
    info!(%peer, "client connected");
    Ok(stream)
}
