use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serve exactly one HTTP response on a loopback port and return its base URL.
///
/// The listener also works as an HTTP proxy: it answers whatever request
/// line arrives, absolute-form or not.
pub fn serve_once(status_line: &'static str, headers: &'static str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 {status_line}\r\n{headers}Content-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
            let _ = stream.flush();
        }
    });

    format!("http://{addr}/")
}
