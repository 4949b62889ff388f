use std::fmt;

/// Authenticated context for one account.
///
/// Produced once by the login handshake and handed to every game call.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Checksummed wallet address of the account
    pub address: String,
    /// Token the API expects in the `accesstoken` header
    pub access_token: String,
}

impl Session {
    pub fn new(address: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("address", &self.address)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
