use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

const OK_RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

/// Announces a 100 byte body, then closes after 2 bytes.
const TRUNCATED_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nok";

/// Minimal Life server stand-in: answers every POST with 200 and forwards
/// each request body over the returned channel.
pub fn start_life_server() -> (u16, mpsc::Receiver<String>) {
    serve(OK_RESPONSE)
}

/// Like [`start_life_server`], but every response body is cut short.
pub fn start_truncating_server() -> (u16, mpsc::Receiver<String>) {
    serve(TRUNCATED_RESPONSE)
}

/// A port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    listener.local_addr().expect("no local addr").port()
}

fn serve(response: &'static [u8]) -> (u16, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind life server");
    let port = listener.local_addr().expect("no local addr").port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
            }

            let mut body = vec![0u8; content_length];
            if reader.read_exact(&mut body).is_err() {
                continue;
            }

            let mut stream = stream;
            let _ = stream.write_all(response);
            let _ = stream.flush();
            if tx.send(String::from_utf8_lossy(&body).into_owned()).is_err() {
                break;
            }
        }
    });

    (port, rx)
}
