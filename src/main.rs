use std::{error::Error, sync::Arc};

use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{
    bus::BusInterface,
    cli::Cli,
    collector::{Collector, FrameListener},
    config::BridgeConfig,
    publish::{CycleRunner, PUBLISH_INTERVAL, mqtt::MqttSink},
};

pub mod bus;
pub mod cli;
pub mod collector;
pub mod config;
pub mod decode;
pub mod frame;
pub mod logging;
pub mod publish;
pub mod store;

#[cfg(test)]
mod testdata;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let cfg = BridgeConfig::load(&cli.config_path)?;
    let _log_guard = logging::init(&cfg.logging)?;

    info!("running process ID is {}", std::process::id());
    info!("running with config: {cfg:?}");
    logging::log_memory_usage("startup");

    let collector = Collector::new(cfg.can.completion);
    let sink = MqttSink::new(&cfg.mqtt)?;
    let cancel = CancellationToken::new();

    let listener: Arc<dyn FrameListener> = Arc::new(collector.clone());
    let mut bus_task = match cfg.can.interface {
        BusInterface::SocketCan => tokio::spawn(bus::listen(
            cfg.can.channel.clone(),
            listener,
            cancel.clone(),
        )),
    };
    let publish_task = tokio::spawn(
        CycleRunner::new(collector, sink)
            .with_profiling(cfg.logging.profile)
            .run(PUBLISH_INTERVAL, cancel.clone()),
    );

    let bus_exit = tokio::select! {
        _ = shutdown_signal() => {
            info!("got shutdown signal");
            None
        }
        res = &mut bus_task => Some(res),
    };

    cancel.cancel();
    if let Err(e) = publish_task.await {
        error!("publish task: {e}");
    }
    logging::log_memory_usage("shutting down");

    let bus_res = match bus_exit {
        Some(res) => res,
        None => bus_task.await,
    };
    match bus_res {
        Ok(Ok(())) => info!("shut down"),
        Ok(Err(e)) => {
            error!("frame source stopped: {e}");
            return Err(e.into());
        }
        Err(e) => {
            error!("frame source task: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("ctrl-c handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
