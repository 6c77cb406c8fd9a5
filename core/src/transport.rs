//! Blocking transport backed by `ureq`.

use std::time::Duration;

use crate::error::TransportError;
use crate::http::{Deadline, HttpRequest, HttpResponse, Transport};

/// Production [`Transport`] built on a shared `ureq::Agent`.
///
/// The agent never turns 4xx/5xx into errors; the client maps status codes
/// itself. `timeout` bounds every call; a caller deadline can only shorten it.
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    fn effective_timeout(&self, deadline: Option<Deadline>) -> Result<Duration, TransportError> {
        match deadline {
            None => Ok(self.timeout),
            Some(deadline) => deadline
                .remaining()
                .map(|left| left.min(self.timeout))
                .ok_or(TransportError::DeadlineExceeded),
        }
    }
}

impl Transport for UreqTransport {
    fn send(
        &self,
        request: &HttpRequest,
        deadline: Option<Deadline>,
    ) -> Result<HttpResponse, TransportError> {
        let timeout = self.effective_timeout(deadline)?;

        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // The deadline, not the configured timeout, was the binding limit.
        let deadline_bound = deadline.is_some() && timeout < self.timeout;
        let map_err = |err: ureq::Error| match err {
            ureq::Error::Timeout(_) if deadline_bound || deadline.is_some_and(|d| d.is_expired()) => {
                TransportError::DeadlineExceeded
            }
            timeout @ ureq::Error::Timeout(_) => TransportError::Timeout(Box::new(timeout)),
            other => TransportError::Request(Box::new(other)),
        };

        let mut response = builder
            .config()
            .timeout_global(Some(timeout))
            .build()
            .call()
            .map_err(map_err)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(map_err)?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn expired_deadline_fails_without_network() {
        let transport = UreqTransport::new(Duration::from_secs(5));
        let req = HttpRequest {
            // Unroutable on purpose: the deadline check must short-circuit.
            url: "http://192.0.2.1/api/".to_string(),
            headers: Vec::new(),
        };
        let deadline = Deadline::at(Instant::now() - Duration::from_millis(1));

        let err = transport.send(&req, Some(deadline)).unwrap_err();
        assert!(matches!(err, TransportError::DeadlineExceeded));
    }

    #[test]
    fn deadline_shortens_configured_timeout() {
        let transport = UreqTransport::new(Duration::from_secs(5));
        let timeout = transport
            .effective_timeout(Some(Deadline::after(Duration::from_millis(200))))
            .unwrap();
        assert!(timeout <= Duration::from_millis(200));
    }

    #[test]
    fn distant_deadline_keeps_configured_timeout() {
        let transport = UreqTransport::new(Duration::from_secs(5));
        let timeout = transport
            .effective_timeout(Some(Deadline::after(Duration::from_secs(600))))
            .unwrap();
        assert_eq!(timeout, Duration::from_secs(5));
    }
}
