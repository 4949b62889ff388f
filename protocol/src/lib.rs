use thiserror::Error;

pub mod endpoint;
pub mod envelope;
pub mod session;
pub mod types;

mod de;

pub use endpoint::{DEFAULT_API_URL, Endpoint};
pub use envelope::{Envelope, SUCCESS_CODE, decode_response, decode_status};
pub use session::Session;
pub use types::{
    Bag, BagItem, BattleObjects, BattleResult, JoinTeamRequest, LoginResponse, Monster,
    MonsterList, NftRef, PayResult, Team, TeamList,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request rejected with code {code}: {message}")]
    Rejected { code: String, message: String },

    #[error("Response is missing its data payload")]
    MissingData,
}
