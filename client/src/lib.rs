//! HTTP game client and wallet login for Metamon auto-battling.
//!
//! [`HttpGameClient`] implements [`metamon_battle::GameClient`] against the
//! live API. A run looks like:
//!
//! ```ignore
//! let config = Config::from_env()?;
//! let wallet = Wallet::from_hex(&config.private_key)?;
//! let client = HttpGameClient::new(&config.api_url, config.http_timeout)?;
//! let session = client.login(&wallet).await?;
//! ```

mod auth;
pub mod config;
mod game;
mod http;
pub mod wallet;

pub use auth::login_message;
pub use config::{Config, ConfigError};
pub use http::HttpGameClient;
pub use wallet::Wallet;
