//! Bag items and kingdom teams

use metamon_protocol::types;

/// Category of a bag item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagItemKind {
    /// Egg fragments, composed into eggs by minting
    MintMaterial,
    /// Pass that lets a creature enter a kingdom team
    BattlePass,
    Other(i64),
}

impl BagItemKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::MintMaterial,
            6 => Self::BattlePass,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagItem {
    pub kind: BagItemKind,
    pub quantity: i64,
}

impl From<types::BagItem> for BagItem {
    fn from(item: types::BagItem) -> Self {
        Self {
            kind: BagItemKind::from_code(item.bp_type),
            quantity: item.bp_num,
        }
    }
}

/// A kingdom team creatures can be enrolled into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: Option<String>,
    pub locked: bool,
    /// Members must be rated below this
    pub rating_threshold: i64,
}

impl From<types::Team> for Team {
    fn from(team: types::Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            locked: team.lock_team,
            rating_threshold: team.monster_sca_threshold,
        }
    }
}
