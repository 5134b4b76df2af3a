use std::{
    io::{Read, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    process::Child,
    thread,
    time::{Duration, Instant},
};

use assert_cmd::Command;

pub trait AssertCmdExt {
    /// Enable test mode
    fn test_mode_args(&mut self) -> &mut Self;
}

impl AssertCmdExt for Command {
    fn test_mode_args(&mut self) -> &mut Self {
        self.timeout(Duration::from_secs(10)) // Set a timeout of 10 seconds
            .args(["-v"]); // Enable verbose logging

        self
    }
}

/// Ask the OS for a port that is free right now.
pub fn free_local_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind to an ephemeral port");
    listener.local_addr().expect("local address of listener")
}

/// Wait until something accepts connections on `address`.
pub fn wait_for_server(address: SocketAddr) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while TcpStream::connect(address).is_err() {
        assert!(
            Instant::now() < deadline,
            "server did not come up on {address}"
        );
        thread::sleep(Duration::from_millis(50));
    }
}

/// Send one HTTP/1.1 request and return the status code and body.
pub fn http_request(address: SocketAddr, method: &str, path: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(address).expect("connect to server");
    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: {address}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    )
    .expect("write request");

    let mut raw = String::new();
    let _ = stream.read_to_string(&mut raw).expect("read response");

    let (head, body) = raw.split_once("\r\n\r\n").expect("complete response");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .expect("status code");

    (status, body.to_string())
}

/// Kills the server process when dropped, also when a test panics.
pub struct ServerGuard(pub Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}
