//! A local HTTP listener answering with canned responses, one per connection.

use std::sync::{Arc, Mutex};

use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub struct CannedServer {
    pub base_url: Url,
    targets: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Serve `responses` (status, body) in order under `base_path`
    pub async fn start(base_path: &str, responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let targets = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&targets);

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&head);
                // "GET /path?query HTTP/1.1"
                if let Some(target) = head.split_whitespace().nth(1) {
                    recorded.lock().unwrap().push(target.to_string());
                }
                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        let base_url = Url::parse(&format!("http://{addr}{base_path}")).unwrap();
        CannedServer { base_url, targets }
    }

    /// Request targets (path and query) received so far
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }

    /// Query pairs of the `index`-th request
    pub fn query(&self, index: usize) -> Vec<(String, String)> {
        let target = &self.targets()[index];
        Url::parse(&format!("http://localhost{target}"))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    /// Path of the `index`-th request
    pub fn path(&self, index: usize) -> String {
        let target = &self.targets()[index];
        Url::parse(&format!("http://localhost{target}"))
            .unwrap()
            .path()
            .to_string()
    }
}
