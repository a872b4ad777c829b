use std::time::Duration;

use thiserror::Error;

use super::TimedRecord;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("encoding batch: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("mqtt client: {0}")]
    Client(#[from] rumqttc::ClientError),
    #[error("mqtt connection: {0}")]
    Connection(#[from] rumqttc::ConnectionError),
    #[error("no delivery acknowledgement within {0:?}")]
    Timeout(Duration),
}

/// Destination for one publish cycle's batch.
/// `Ok` means the whole batch was delivered.
pub trait RecordSink: Send + Sync {
    fn publish(
        &self,
        records: &[TimedRecord],
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}
