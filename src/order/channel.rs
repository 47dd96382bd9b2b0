use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::constants::SUBMIT_TIMEOUT_SECS;
use crate::order::message::{order_message, whatsapp_link};
use crate::order::{Order, OrderError, Product};

/// Where a finished order goes: a record sink plus the messaging link that
/// lets the buyer follow up with the seller.
pub trait OrderChannel: Send + Sync {
    fn submit(&self, order: &Order) -> Result<(), OrderError>;
    fn message_link(&self, order: &Order) -> String;
}

/// Opens a URL outside the app.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), OrderError>;
}

/// Posts orders to a spreadsheet web app and hands off to WhatsApp.
pub struct WebhookChannel {
    client: Client,
    endpoint: String,
    product: Product,
}

impl WebhookChannel {
    pub fn new(endpoint: impl Into<String>, product: Product) -> Result<Self, OrderError> {
        let client = Client::builder().timeout(Duration::from_secs(SUBMIT_TIMEOUT_SECS)).build()?;
        Ok(Self { client, endpoint: endpoint.into(), product })
    }
}

impl OrderChannel for WebhookChannel {
    fn submit(&self, order: &Order) -> Result<(), OrderError> {
        let fields = order.form_fields();
        debug!(endpoint = %self.endpoint, quantity = order.quantity, "posting order");
        let response = self.client.post(&self.endpoint).form(&fields[..]).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OrderError::Status(status));
        }
        info!(%status, "order recorded");
        Ok(())
    }

    fn message_link(&self, order: &Order) -> String {
        whatsapp_link(&self.product.whatsapp_number, &order_message(&self.product, order))
    }
}

/// The desktop's default browser / URL handler.
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), OrderError> {
        open::that(url).map_err(|source| OrderError::OpenLink { url: url.to_string(), source })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Mutex;
    use std::thread::{self, JoinHandle};

    use super::*;
    use crate::order::tests::{budi, dumpling};

    /// Records submissions and answers with a canned outcome.
    pub struct FakeChannel {
        pub fail: bool,
        pub submitted: Mutex<Vec<Order>>,
    }

    impl FakeChannel {
        pub fn succeeding() -> Self {
            Self { fail: false, submitted: Mutex::new(Vec::new()) }
        }

        pub fn failing() -> Self {
            Self { fail: true, submitted: Mutex::new(Vec::new()) }
        }
    }

    impl OrderChannel for FakeChannel {
        fn submit(&self, order: &Order) -> Result<(), OrderError> {
            self.submitted.lock().unwrap().push(order.clone());
            if self.fail {
                Err(OrderError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
            } else {
                Ok(())
            }
        }

        fn message_link(&self, order: &Order) -> String {
            whatsapp_link(&dumpling().whatsapp_number, &order_message(&dumpling(), order))
        }
    }

    #[derive(Default)]
    pub struct FakeOpener {
        pub fail: bool,
        pub opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for FakeOpener {
        fn open(&self, url: &str) -> Result<(), OrderError> {
            self.opened.lock().unwrap().push(url.to_string());
            if self.fail {
                Err(OrderError::OpenLink {
                    url: url.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn webhook_link_targets_configured_number() {
        let mut product = dumpling();
        product.whatsapp_number = "6281234".to_string();
        let channel = WebhookChannel::new("http://127.0.0.1:9/exec", product).unwrap();
        let link = channel.message_link(&budi());
        assert!(link.starts_with("https://api.whatsapp.com/send?phone=6281234&text=Halo%21"));
        assert!(link.contains("Budi"));
        assert!(link.contains("36.000"));
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) on loopback: connection refused without touching the network
        let channel = WebhookChannel::new("http://127.0.0.1:9/exec", dumpling()).unwrap();
        assert!(matches!(channel.submit(&budi()), Err(OrderError::Transport(_))));
    }

    /// Answers a single HTTP request with `status_line` and hands back the raw request.
    fn one_shot_server(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/exec", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let length = text[..head_end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + length || n == 0 {
                        break;
                    }
                } else if n == 0 {
                    break;
                }
            }
            let reply = format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
            stream.write_all(reply.as_bytes()).unwrap();
            String::from_utf8(raw).unwrap()
        });
        (url, handle)
    }

    #[test]
    fn submit_posts_url_encoded_form() {
        let (url, server) = one_shot_server("200 OK");
        let channel = WebhookChannel::new(url, dumpling()).unwrap();
        channel.submit(&budi()).unwrap();

        let request = server.join().unwrap();
        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("POST /exec HTTP/1.1"), "{head}");
        assert!(
            head.lines().any(|l| l.eq_ignore_ascii_case("content-type: application/x-www-form-urlencoded")),
            "{head}"
        );
        assert_eq!(body, "jumlah=3&nama=Budi&kelas=XII+IPA+1&waktu_ambil=Istirahat+1");
    }

    #[test]
    fn server_error_is_a_status_error() {
        let (url, server) = one_shot_server("500 Internal Server Error");
        let channel = WebhookChannel::new(url, dumpling()).unwrap();
        let result = channel.submit(&budi());
        server.join().unwrap();
        assert!(
            matches!(result, Err(OrderError::Status(s)) if s == reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            "{result:?}"
        );
    }
}
