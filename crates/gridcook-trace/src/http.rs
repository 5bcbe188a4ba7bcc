//! HTTP submission backend (`http` feature).

use reqwest::blocking::Client;
use tracing::debug;

use crate::{SubmitReceipt, TraceError, TraceResult, TrajectoryRecord, TrajectorySink};

/// POSTs the JSON record to a configured endpoint.
///
/// One attempt per submission; the response status is logged and a non-2xx
/// answer surfaces as an error for the session to log.  Retry and queueing
/// are out of scope.
pub struct HttpSink {
    endpoint: String,
    client: Client,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpSink {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

impl TrajectorySink for HttpSink {
    fn submit(&mut self, record: &TrajectoryRecord) -> TraceResult<SubmitReceipt> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .map_err(|e| TraceError::Submit {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        debug!(%status, endpoint = %self.endpoint, "trajectory POST answered");
        if !status.is_success() {
            return Err(TraceError::Submit {
                endpoint: self.endpoint.clone(),
                reason: format!("HTTP {status}"),
            });
        }
        Ok(SubmitReceipt {
            destination: self.endpoint.clone(),
        })
    }
}
