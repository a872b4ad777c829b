use std::time::Duration;

use rumqttc::{AsyncClient, ConnectionError, Event, EventLoop, MqttOptions, Outgoing, Packet, QoS};
use tokio::time::timeout;
use tracing::{Instrument, Level, debug, span, trace};
use uuid::Uuid;

use super::{RecordSink, TimedRecord, TransportError};
use crate::config::{ConfigError, MqttConfig};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);
const DISCONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_CAPACITY: usize = 10;

/// Connects once per batch, publishes it as a single JSON array,
/// waits for the broker to acknowledge at the configured QoS and disconnects
#[derive(Debug, Clone)]
pub struct MqttSink {
    hostname: String,
    port: u16,
    topic: String,
    client_id: String,
    keep_alive: Duration,
    qos: QoS,
    credentials: Option<(String, String)>,
}

impl MqttSink {
    pub fn new(cfg: &MqttConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            hostname: cfg.hostname.clone(),
            port: cfg.port,
            topic: cfg.topic.clone(),
            client_id: cfg
                .client_id
                .clone()
                .unwrap_or_else(|| format!("eflex_{}", Uuid::now_v7())),
            keep_alive: cfg.keep_alive(),
            qos: cfg.qos_level()?,
            credentials: cfg.credentials(),
        })
    }

    fn options(&self) -> MqttOptions {
        let mut opts = MqttOptions::new(&self.client_id, &self.hostname, self.port);
        opts.set_keep_alive(self.keep_alive);
        if let Some((username, password)) = &self.credentials {
            opts.set_credentials(username, password);
        }
        opts
    }

    async fn send(&self, payload: Vec<u8>) -> Result<(), TransportError> {
        let (client, mut eventloop) = AsyncClient::new(self.options(), REQUEST_CAPACITY);
        client.publish(&self.topic, self.qos, false, payload).await?;

        let delivery = await_delivery(&mut eventloop, self.qos);
        let delivered = match timeout(DELIVERY_TIMEOUT, delivery).await {
            Ok(res) => res.map_err(TransportError::from),
            Err(_) => Err(TransportError::Timeout(DELIVERY_TIMEOUT)),
        };

        if delivered.is_ok() {
            disconnect(&client, &mut eventloop).await;
        }
        delivered
    }
}

impl RecordSink for MqttSink {
    async fn publish(&self, records: &[TimedRecord]) -> Result<(), TransportError> {
        let payload = serde_json::to_vec(records)?;
        let span = span!(Level::DEBUG, "MQTT", host = %self.hostname, topic = %self.topic);
        async {
            debug!("sending {} bytes", payload.len());
            self.send(payload).await?;
            debug!("delivered");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

async fn await_delivery(eventloop: &mut EventLoop, qos: QoS) -> Result<(), ConnectionError> {
    loop {
        let event = eventloop.poll().await?;
        trace!("{event:?}");
        if is_delivered(qos, &event) {
            return Ok(());
        }
    }
}

/// QoS 0 is done once the publish is written, 1 on PUBACK, 2 on PUBCOMP
fn is_delivered(qos: QoS, event: &Event) -> bool {
    matches!(
        (qos, event),
        (QoS::AtMostOnce, Event::Outgoing(Outgoing::Publish(_)))
            | (QoS::AtLeastOnce, Event::Incoming(Packet::PubAck(_)))
            | (QoS::ExactlyOnce, Event::Incoming(Packet::PubComp(_)))
    )
}

async fn disconnect(client: &AsyncClient, eventloop: &mut EventLoop) {
    if let Err(e) = client.disconnect().await {
        debug!("queueing disconnect: {e}");
        return;
    }

    let drained = timeout(DISCONNECT_TIMEOUT, async {
        loop {
            match eventloop.poll().await {
                Ok(Event::Outgoing(Outgoing::Disconnect)) | Err(_) => break,
                Ok(_) => {}
            }
        }
    })
    .await;

    if drained.is_err() {
        debug!("broker did not see disconnect within {DISCONNECT_TIMEOUT:?}");
    }
}
