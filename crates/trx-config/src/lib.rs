pub mod toml_config;
pub mod trx_config;

pub use trx_config::TrxConfig;
