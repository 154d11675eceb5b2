//! Helpers for running the built `logpuzzle` binary in isolation.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::thread;

/// Runs `logpuzzle` with `args` in `cwd`, with XDG dirs pointed inside `cwd`.
pub fn run_logpuzzle(cwd: &Path, args: &[&str]) -> Output {
    let xdg = cwd.join(".xdg");
    Command::new(env!("CARGO_BIN_EXE_logpuzzle"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", &xdg)
        .env("XDG_STATE_HOME", xdg.join("state"))
        .env("XDG_CONFIG_HOME", xdg.join("config"))
        .env("no_proxy", "127.0.0.1,localhost")
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn logpuzzle")
}

/// Serves `body` for every GET on a background thread. Returns "127.0.0.1:<port>".
pub fn start_image_server(body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let mut buf = [0u8; 8192];
            if stream.read(&mut buf).unwrap_or(0) == 0 {
                continue;
            }
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
    });
    format!("127.0.0.1:{}", addr.port())
}
