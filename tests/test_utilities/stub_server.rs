use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Picks the status and body for a request target such as `/search?q=x`
pub type Responder = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

/// Minimal in-process HTTP/1.1 server serving canned responses
///
/// Records the request target of every request it sees. Lives until the
/// runtime that started it shuts down.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Serves the same response to every request
    pub async fn fixed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::start(Arc::new(move |_: &str| (status, body.clone()))).await
    }

    pub async fn start(responder: Responder) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let responder = Arc::clone(&responder);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let _ = serve(stream, responder, recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}/api/v1/new_search", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(
    mut stream: TcpStream,
    responder: Responder,
    recorded: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    let head = String::from_utf8_lossy(&buffer);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();
    recorded.lock().unwrap().push(target.clone());

    let (status, body) = responder(&target);
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// A body with one Paracetamol suggestion whose only offer costs 12
pub fn paracetamol_body() -> String {
    serde_json::json!({
        "data": {"saltSuggestions": [{
            "id": 11,
            "salt": "Paracetamol",
            "most_common": {"Form": "tablet", "Strength": "500mg", "Packing": "strip-10"},
            "available_forms": ["tablet", "syrup"],
            "salt_forms_json": {
                "tablet": {"500mg": {"strip-10": [{"pharmacy_id": "1", "selling_price": 12}]}},
                "syrup": {"125mg/5ml": {"bottle-60ml": []}}
            }
        }]}
    })
    .to_string()
}
