//! Payload types of the game API
//!
//! Field names follow the service's camelCase JSON. Numeric fields go
//! through lenient decoders since the service quotes them inconsistently.

use serde::{Deserialize, Serialize};

use crate::de;

/// A creature as listed by the wallet, opponent and screening endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    #[serde(deserialize_with = "de::string")]
    pub id: String,

    #[serde(default, deserialize_with = "de::string")]
    pub token_id: String,

    /// Wallet address of the owning account
    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub rarity: String,

    #[serde(default, deserialize_with = "de::int")]
    pub level: i64,

    #[serde(default, deserialize_with = "de::int")]
    pub exp: i64,

    /// Experience needed for the next level
    #[serde(default, deserialize_with = "de::int")]
    pub exp_max: i64,

    /// Battle tickets left for today
    #[serde(default, deserialize_with = "de::int")]
    pub tear: i64,

    /// Strength score used for matchmaking and team eligibility
    #[serde(default, deserialize_with = "de::int")]
    pub sca: i64,
}

/// Payload of `getWalletPropertyList` and `kingdom/getScreenMetamon`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonsterList {
    #[serde(rename = "metamonList", default)]
    pub monsters: Vec<Monster>,
}

/// Payload of `getBattelObjects`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BattleObjects {
    #[serde(default)]
    pub objects: Vec<Monster>,
}

/// Payload of `startPay`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayResult {
    #[serde(default)]
    pub pay: bool,

    /// Entry fee charged, in RACA
    #[serde(default, deserialize_with = "de::int")]
    pub amount: i64,
}

/// Payload of `startBattle`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    /// Whether our creature won
    pub challenge_result: bool,

    #[serde(default, deserialize_with = "de::int")]
    pub challenge_exp: i64,

    /// Egg fragments awarded
    #[serde(default, deserialize_with = "de::int")]
    pub bp_fragment_num: i64,
}

/// Payload of `checkBag`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bag {
    #[serde(default)]
    pub item: Vec<BagItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagItem {
    /// Item category code
    #[serde(deserialize_with = "de::int")]
    pub bp_type: i64,

    #[serde(default, deserialize_with = "de::int")]
    pub bp_num: i64,
}

/// Payload of `kingdom/teamList`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamList {
    #[serde(default)]
    pub list: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(deserialize_with = "de::string")]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub lock_team: bool,

    /// Members must score below this
    #[serde(default, deserialize_with = "de::int")]
    pub monster_sca_threshold: i64,
}

/// Payload of `login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// JSON body of `kingdom/teamJoin`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamRequest {
    pub address: String,
    pub team_id: String,
    pub metamons: Vec<NftRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftRef {
    pub nft_id: String,
}
