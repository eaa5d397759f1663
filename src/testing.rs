//! Deterministic provider doubles with call counters.

use crate::location::{Coordinate, GeocodeError, GeocodeMatch, Geocoder};
use crate::routing::{RouteError, RouteMetrics, Router};
use std::cell::Cell;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::rc::Rc;
use std::thread::{self, JoinHandle};

pub type Calls = Rc<Cell<usize>>;

pub struct FakeGeocoder {
    places: HashMap<String, (f64, f64)>,
    transport_down: bool,
    calls: Calls,
}

impl FakeGeocoder {
    pub fn new(places: &[(&str, f64, f64)]) -> (Self, Calls) {
        let calls = Calls::default();
        let fake = Self {
            places: places
                .iter()
                .map(|(name, lat, lon)| (name.to_string(), (*lat, *lon)))
                .collect(),
            transport_down: false,
            calls: calls.clone(),
        };
        (fake, calls)
    }

    pub fn failing_transport() -> (Self, Calls) {
        let (mut fake, calls) = Self::new(&[]);
        fake.transport_down = true;
        (fake, calls)
    }
}

impl Geocoder for FakeGeocoder {
    fn name(&self) -> &str {
        "fake"
    }

    fn geocode(&self, query: &str) -> Result<GeocodeMatch, GeocodeError> {
        self.calls.set(self.calls.get() + 1);
        if self.transport_down {
            return Err(GeocodeError::Transport("connection refused".into()));
        }
        let (lat, lon) = self
            .places
            .get(query)
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
        Ok(GeocodeMatch {
            coordinate: Coordinate::new(*lat, *lon).expect("test coordinate in range"),
            display_name: Some(format!("{} (test)", query)),
        })
    }
}

enum Reply {
    Route(RouteMetrics),
    Status(String),
    Unreachable,
}

pub struct FakeRouter {
    reply: Reply,
    /// Origins (lat, lon) for which the router reports `NoRoute`.
    no_route_from: Vec<(f64, f64)>,
    calls: Calls,
}

impl FakeRouter {
    fn with_reply(reply: Reply) -> (Self, Calls) {
        let calls = Calls::default();
        let fake = Self {
            reply,
            no_route_from: Vec::new(),
            calls: calls.clone(),
        };
        (fake, calls)
    }

    pub fn fixed(distance_meters: f64, duration_seconds: f64) -> (Self, Calls) {
        Self::with_reply(Reply::Route(RouteMetrics {
            distance_meters,
            duration_seconds,
        }))
    }

    pub fn status(code: &str) -> (Self, Calls) {
        Self::with_reply(Reply::Status(code.to_string()))
    }

    pub fn unreachable() -> (Self, Calls) {
        Self::with_reply(Reply::Unreachable)
    }

    pub fn no_route_from(mut self, lat: f64, lon: f64) -> Self {
        self.no_route_from.push((lat, lon));
        self
    }
}

impl Router for FakeRouter {
    fn name(&self) -> &str {
        "fake"
    }

    fn route(&self, origin: Coordinate, _destination: Coordinate) -> Result<RouteMetrics, RouteError> {
        self.calls.set(self.calls.get() + 1);
        if self.no_route_from.contains(&(origin.lat(), origin.lon())) {
            return Err(RouteError::NoRoute {
                code: "NoRoute".into(),
                message: Some("Impossible route between points".into()),
            });
        }
        match &self.reply {
            Reply::Route(m) => Ok(*m),
            Reply::Status(code) => Err(RouteError::NoRoute {
                code: code.clone(),
                message: None,
            }),
            Reply::Unreachable => Err(RouteError::Transport("timed out".into())),
        }
    }
}

/// Answer exactly one HTTP request on a loopback port with a canned response.
///
/// Returns the base URL to point a provider at and a handle yielding the
/// request line the server received.
pub fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).expect("read header") == 0 || header == "\r\n" {
                break;
            }
        }
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
        request_line.trim_end().to_string()
    });

    (base, handle)
}
