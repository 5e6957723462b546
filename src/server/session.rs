//! Session loop - one request/response cycle per client read
//!
//! The loop is generic over the stream so the protocol can be driven against
//! scripted readers and writers in tests; the server passes the accepted
//! `TcpStream`.

use std::io::{self, Read, Write};

use tracing::{debug, info};

use crate::core::GameRound;
use crate::server::protocol::{self, Reply};
use crate::types::RECV_BUFFER_LEN;

/// Why the session loop stopped.
#[derive(Debug)]
pub enum SessionEnd {
    /// The client closed the connection (zero-byte read).
    ClientClosed,
    /// A read or write on the connection failed.
    TransportError(io::Error),
}

/// Drive the guess/response protocol until the client goes away.
///
/// Each read result is treated as one complete guess attempt; guesses split
/// across reads or batched into one read are not reassembled. The round is
/// owned by the loop and never advances past a request until its response
/// has been written.
pub fn run_session<S: Read + Write>(stream: &mut S, mut round: GameRound) -> SessionEnd {
    let mut buf = [0u8; RECV_BUFFER_LEN];

    loop {
        if let Err(e) = stream.write_all(protocol::PROMPT.as_bytes()) {
            return SessionEnd::TransportError(e);
        }

        // At most RECV_BUFFER_LEN - 1 payload bytes per read.
        let received = match stream.read(&mut buf[..RECV_BUFFER_LEN - 1]) {
            Ok(0) => return SessionEnd::ClientClosed,
            Ok(n) => &buf[..n],
            Err(e) => return SessionEnd::TransportError(e),
        };

        let reply = match protocol::parse_guess(received) {
            Some(guess) => {
                info!(guess, "guess received");
                Reply::from(round.evaluate(guess))
            }
            None => {
                debug!(raw = %String::from_utf8_lossy(received).trim_end(), "unparseable guess");
                Reply::Invalid
            }
        };

        if reply == Reply::Correct {
            info!("correct guess; new secret drawn");
        }

        if let Err(e) = stream.write_all(reply.message().as_bytes()) {
            return SessionEnd::TransportError(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::core::SimpleRng;
    use crate::server::protocol::{CORRECT, HIGHER, INVALID, LOWER, PROMPT};

    /// Read side pops one scripted result per call; the write side records
    /// everything. An exhausted script reads as EOF.
    struct ScriptedStream {
        reads: VecDeque<io::Result<Vec<u8>>>,
        written: Vec<u8>,
    }

    impl ScriptedStream {
        fn new(reads: Vec<io::Result<Vec<u8>>>) -> Self {
            Self {
                reads: reads.into(),
                written: Vec::new(),
            }
        }

        fn lines(lines: &[&str]) -> Self {
            Self::new(lines.iter().map(|l| Ok(l.as_bytes().to_vec())).collect())
        }

        fn written_str(&self) -> String {
            String::from_utf8(self.written.clone()).expect("server wrote utf8")
        }
    }

    impl Read for ScriptedStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.reads.pop_front() {
                Some(Ok(chunk)) => {
                    assert!(chunk.len() <= buf.len(), "scripted chunk exceeds read buffer");
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
                Some(Err(e)) => Err(e),
                None => Ok(0),
            }
        }
    }

    impl Write for ScriptedStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Write side that fails immediately; the read side is never reached.
    struct BrokenStream;

    impl Read for BrokenStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            unreachable!("prompt write fails first")
        }
    }

    impl Write for BrokenStream {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn round_with_secret(secret: u32) -> GameRound {
        GameRound::with_secret(secret, SimpleRng::new(1))
    }

    #[test]
    fn eof_before_any_guess_writes_one_prompt() {
        let mut stream = ScriptedStream::lines(&[]);
        let end = run_session(&mut stream, round_with_secret(500));

        assert!(matches!(end, SessionEnd::ClientClosed));
        assert_eq!(stream.written_str(), PROMPT);
    }

    #[test]
    fn hints_bracket_the_secret() {
        let mut stream = ScriptedStream::lines(&["250\n", "750\n"]);
        let end = run_session(&mut stream, round_with_secret(500));

        assert!(matches!(end, SessionEnd::ClientClosed));
        let expected = format!("{PROMPT}{HIGHER}{PROMPT}{LOWER}{PROMPT}");
        assert_eq!(stream.written_str(), expected);
    }

    #[test]
    fn correct_guess_announces_regeneration_and_keeps_serving() {
        let mut stream = ScriptedStream::lines(&["500\n", "junk\n"]);
        let end = run_session(&mut stream, round_with_secret(500));

        assert!(matches!(end, SessionEnd::ClientClosed));
        let expected = format!("{PROMPT}{CORRECT}{PROMPT}{INVALID}{PROMPT}");
        assert_eq!(stream.written_str(), expected);
    }

    #[test]
    fn invalid_input_leaves_the_secret_guessable() {
        // The correct guess after a string of invalid submissions still wins,
        // so none of them can have touched the round.
        let mut stream = ScriptedStream::lines(&["abc\n", "0\n", "1000001\n", "500\n"]);
        let end = run_session(&mut stream, round_with_secret(500));

        assert!(matches!(end, SessionEnd::ClientClosed));
        let expected = format!("{PROMPT}{INVALID}{PROMPT}{INVALID}{PROMPT}{INVALID}{PROMPT}{CORRECT}{PROMPT}");
        assert_eq!(stream.written_str(), expected);
    }

    #[test]
    fn repeated_invalid_input_repeats_the_same_reply() {
        let mut stream = ScriptedStream::lines(&["x\n", "x\n", "x\n"]);
        run_session(&mut stream, round_with_secret(500));

        let written = stream.written_str();
        assert_eq!(written.matches(INVALID).count(), 3);
    }

    #[test]
    fn read_error_ends_with_transport_error() {
        let mut stream = ScriptedStream::new(vec![Err(io::Error::from(
            io::ErrorKind::ConnectionReset,
        ))]);
        let end = run_session(&mut stream, round_with_secret(500));

        assert!(matches!(end, SessionEnd::TransportError(_)));
        assert_eq!(stream.written_str(), PROMPT);
    }

    #[test]
    fn write_error_ends_with_transport_error() {
        let end = run_session(&mut BrokenStream, round_with_secret(500));
        assert!(matches!(end, SessionEnd::TransportError(_)));
    }
}
