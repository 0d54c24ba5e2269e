#![allow(dead_code)]
use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::Duration;

/// A minimal SMTP server that accepts (or rejects) logins and hands every
/// received message back to the test.
pub struct FakeSmtpServer {
    pub port: u16,
    messages: Receiver<String>,
}

impl FakeSmtpServer {
    pub fn start(accept_auth: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (sender, messages) = channel();

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let sender = sender.clone();
                thread::spawn(move || handle_session(stream, accept_auth, sender));
            }
        });

        Self { port, messages }
    }

    pub fn next_message(&self) -> Option<String> {
        self.messages.recv_timeout(Duration::from_secs(10)).ok()
    }

    pub fn no_message(&self) -> bool {
        self.messages
            .recv_timeout(Duration::from_millis(200))
            .is_err()
    }
}

fn handle_session(stream: TcpStream, accept_auth: bool, sender: Sender<String>) {
    let mut writer = stream.try_clone().unwrap();
    let mut reader = BufReader::new(stream);
    let mut reply = |line: &str| writer.write_all(format!("{line}\r\n").as_bytes());

    if reply("220 localhost fake ESMTP").is_err() {
        return;
    }

    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let command = line.trim_end().to_ascii_uppercase();

        let result = if command.starts_with("EHLO") || command.starts_with("HELO") {
            reply("250-localhost").and_then(|_| reply("250 AUTH PLAIN"))
        } else if command.starts_with("AUTH") {
            if accept_auth {
                reply("235 2.7.0 Authentication successful")
            } else {
                reply("535 5.7.8 Authentication credentials invalid")
            }
        } else if command.starts_with("MAIL") || command.starts_with("RCPT") {
            reply("250 2.1.0 Ok")
        } else if command.starts_with("DATA") {
            if reply("354 End data with <CR><LF>.<CR><LF>").is_err() {
                return;
            }
            let mut message = String::new();
            loop {
                let mut data_line = String::new();
                match reader.read_line(&mut data_line) {
                    Ok(0) | Err(_) => return,
                    Ok(_) => {}
                }
                if data_line == ".\r\n" {
                    break;
                }
                message.push_str(&data_line);
            }
            let _ = sender.send(message);
            reply("250 2.0.0 Ok: queued")
        } else if command.starts_with("QUIT") {
            let _ = reply("221 2.0.0 Bye");
            return;
        } else if command.starts_with("RSET") || command.starts_with("NOOP") {
            reply("250 2.0.0 Ok")
        } else {
            reply("502 5.5.2 Command not recognized")
        };

        if result.is_err() {
            return;
        }
    }
}

/// A port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

pub fn config_json(
    sources: Value,
    targets: Value,
    smtp_port: u16,
    username: &str,
    password: &str,
) -> Value {
    json!({
        "data_sources": sources,
        "data_targets": targets,
        "notifications": {
            "email": {
                "smtp": {
                    "server": "127.0.0.1",
                    "port": smtp_port,
                    "username": username,
                    "password": password
                },
                "recipient": "ops@example.com"
            }
        },
        "settings": {
            "http_timeout_secs": 10,
            "smtp_timeout_secs": 10
        }
    })
}

pub fn write_config(dir: &Path, config: &Value) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, serde_json::to_vec_pretty(config).unwrap()).unwrap();
    path
}
