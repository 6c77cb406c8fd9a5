//! HTTP transport boundary.
//!
//! # Design
//! Requests and responses are plain data. `OpenSecretsClient` builds an
//! `HttpRequest`, hands it to a [`Transport`], and parses the returned
//! `HttpResponse`. The transport is the only place that touches the network,
//! so tests swap in [`mock::ScriptedTransport`] and never open a socket.
//!
//! All fields use owned types so values can be recorded by test spies or
//! shipped across threads without lifetime concerns.

use std::time::{Duration, Instant};

use crate::error::TransportError;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Value of the first header matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Point in time after which an in-flight request is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    pub fn instant(&self) -> Instant {
        self.0
    }

    /// Time left before the deadline, or `None` once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.0
            .checked_duration_since(Instant::now())
            .filter(|d| !d.is_zero())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }
}

/// Executes one GET request.
///
/// Implementations must not interpret the status code; status mapping is the
/// client's job. When `deadline` is set the call must return
/// [`TransportError::DeadlineExceeded`] instead of outliving it.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &HttpRequest,
        deadline: Option<Deadline>,
    ) -> Result<HttpResponse, TransportError>;
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(clippy::unwrap_used, clippy::missing_panics_doc)]
pub mod mock {
    //! Scripted transport for unit tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{Deadline, HttpRequest, HttpResponse, Transport};
    use crate::error::TransportError;

    /// Replays queued results in order and records every request it sees.
    ///
    /// When the queue is empty it answers `200` with an empty JSON object.
    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
        calls: Mutex<Vec<(HttpRequest, Option<Deadline>)>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response with the given status and body.
        pub fn respond(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
            self.responses.lock().unwrap().push_back(Ok(HttpResponse {
                status,
                body: body.into(),
            }));
            self
        }

        /// Queue a transport failure.
        pub fn fail(self, error: TransportError) -> Self {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        /// Every request passed to `send`, in call order.
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(req, _)| req.clone())
                .collect()
        }

        /// Deadlines passed to `send`, in call order.
        pub fn deadlines(&self) -> Vec<Option<Deadline>> {
            self.calls.lock().unwrap().iter().map(|(_, d)| *d).collect()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Transport for ScriptedTransport {
        fn send(
            &self,
            request: &HttpRequest,
            deadline: Option<Deadline>,
        ) -> Result<HttpResponse, TransportError> {
            self.calls.lock().unwrap().push((request.clone(), deadline));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Ok(HttpResponse {
                        status: 200,
                        body: b"{}".to_vec(),
                    })
                })
        }
    }
}
