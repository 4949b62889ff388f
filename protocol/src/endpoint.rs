/// Production base URL of the game API
pub const DEFAULT_API_URL: &str = "https://metamon-api.radiocaca.com/usm-api";

/// Game API operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Exchange a signed login message for an access token
    Login,
    /// List the account's creatures
    WalletPropertyList,
    /// List opponents for a creature in a tier
    BattleObjects,
    /// Pay the entry fee for a battle
    StartPay,
    /// Fight a paid battle
    StartBattle,
    /// Advance a creature one level
    UpdateMonster,
    /// Reset a max-level creature's experience
    ResetMonsterExp,
    /// List bag items (currencies and materials)
    CheckBag,
    /// Mint an egg from fragments
    ComposeMonsterEgg,
    /// List kingdom teams
    TeamList,
    /// List the account's creatures eligible for a team
    ScreenMonsters,
    /// Enroll creatures into a team
    JoinTeam,
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::WalletPropertyList => "getWalletPropertyList",
            Self::BattleObjects => "getBattelObjects",
            Self::StartPay => "startPay",
            Self::StartBattle => "startBattle",
            Self::UpdateMonster => "updateMonster",
            Self::ResetMonsterExp => "resetMonster",
            Self::CheckBag => "checkBag",
            Self::ComposeMonsterEgg => "composeMonsterEgg",
            Self::TeamList => "kingdom/teamList",
            Self::ScreenMonsters => "kingdom/getScreenMetamon",
            Self::JoinTeam => "kingdom/teamJoin",
        }
    }

    /// Full URL under `base`, tolerating a trailing slash
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}
