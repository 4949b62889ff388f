use anyhow::{Context, Result};
use metamon_protocol::{Endpoint, LoginResponse, Session};
use rand::Rng;

use crate::HttpGameClient;
use crate::wallet::Wallet;

impl HttpGameClient {
    /// Sign a fresh login message with `wallet` and exchange it for a session
    pub async fn login(&self, wallet: &Wallet) -> Result<Session> {
        let message = login_message(&mut rand::thread_rng());
        let signature = wallet.sign_message(&message)?;

        let params = [
            ("address", wallet.address()),
            ("sign", signature.as_str()),
            ("msg", message.as_str()),
            ("network", "1"),
        ];

        let response: LoginResponse = self
            .query(Endpoint::Login, None, &params)
            .await
            .context("Login request failed")?;

        tracing::info!(address = %wallet.address(), "Logged in");
        Ok(Session::new(wallet.address(), response.access_token))
    }
}

/// Login challenge text: `LogIn-` followed by a random 128-bit nonce
pub fn login_message<R: Rng + ?Sized>(rng: &mut R) -> String {
    let nonce: [u8; 16] = rng.r#gen();
    format!("LogIn-{}", hex::encode(nonce))
}
