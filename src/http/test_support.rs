use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::error::RequestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportEvent {
    Started(String),
    Finished(String),
}

/// Scripted transport that records every call and tracks concurrency.
pub(crate) struct FakeTransport {
    routes: BTreeMap<String, Result<ApiResponse, RequestError>>,
    fallback: Result<ApiResponse, RequestError>,
    delays: BTreeMap<String, Duration>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    requests: Mutex<Vec<ApiRequest>>,
    events: Mutex<Vec<TransportEvent>>,
}

impl FakeTransport {
    pub(crate) fn responding(status: u16, body: &str) -> Self {
        Self {
            routes: BTreeMap::new(),
            fallback: Ok(ApiResponse {
                status,
                body: body.to_owned(),
            }),
            delays: BTreeMap::new(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: RequestError) -> Self {
        let mut transport = Self::responding(200, "");
        transport.fallback = Err(error);
        transport
    }

    pub(crate) fn with_route(
        mut self,
        url: &str,
        reply: Result<ApiResponse, RequestError>,
    ) -> Self {
        self.routes.insert(url.to_owned(), reply);
        self
    }

    pub(crate) const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn with_url_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_owned(), delay);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub(crate) fn events(&self) -> Vec<TransportEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push_event(&self, event: TransportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

pub(crate) fn ok_response(body: &str) -> Result<ApiResponse, RequestError> {
    Ok(ApiResponse {
        status: 200,
        body: body.to_owned(),
    })
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        self.peak.fetch_max(current, Ordering::SeqCst);
        self.push_event(TransportEvent::Started(request.url.clone()));
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let delay = self.delays.get(&request.url).copied().unwrap_or(self.delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.push_event(TransportEvent::Finished(request.url.clone()));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.routes
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub(crate) struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawns a throwaway HTTP/1.1 server that answers every request with the
/// given raw response. With `None` it accepts connections but never replies.
pub(crate) fn spawn_raw_server(
    response: Option<&'static str>,
) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let held: Arc<Mutex<Vec<TcpStream>>> = Arc::new(Mutex::new(Vec::new()));

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            match listener.accept() {
                Ok((stream, _)) => match response {
                    Some(raw) => {
                        thread::spawn(move || reply(stream, raw));
                    }
                    None => {
                        if let Ok(mut streams) = held.lock() {
                            streams.push(stream);
                        }
                    }
                },
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn reply(mut stream: TcpStream, raw: &str) {
    drop(stream.set_nonblocking(false));
    let mut buffer = [0u8; 4096];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    if stream.write_all(raw.as_bytes()).is_err() {
        return;
    }
    drop(stream.flush());
    drop(stream.shutdown(Shutdown::Both));
}
