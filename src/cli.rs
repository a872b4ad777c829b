use std::path::PathBuf;

use clap_derive::Parser;

pub const DEFAULT_CONFIG_PATH: &str = "./conf/eflex-bridge.ini";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Fortress eFlex battery CAN to MQTT bridge", long_about = None)]
pub struct Cli {
    /// The path to the configuration file
    #[arg(long, alias = "config_path", default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,
}
