//! Egg minting, run once after battling

use metamon_protocol::Session;

use crate::game::GameClient;
use crate::types::{BagItem, BagItemKind};

/// Fragments needed for one mint
pub const MINT_THRESHOLD: i64 = 1000;

/// Outcome of the mint pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MintReport {
    pub issued: usize,
    pub failed: usize,
}

/// Mint-material items holding enough fragments to mint
pub fn mintable(items: &[BagItem]) -> impl Iterator<Item = &BagItem> {
    items
        .iter()
        .filter(|item| item.kind == BagItemKind::MintMaterial && item.quantity >= MINT_THRESHOLD)
}

/// Request one mint per qualifying bag item.
///
/// Nothing here aborts the run: a failed lookup or mint is logged and
/// counted.
pub async fn mint_from_bag<C: GameClient>(client: &C, session: &Session) -> MintReport {
    let mut report = MintReport::default();

    let bag = match client.list_bag_items(session).await {
        Ok(bag) => bag,
        Err(e) => {
            tracing::warn!(error = %e, "Could not check bag for minting");
            return report;
        }
    };

    for item in mintable(&bag) {
        match client.mint_asset(session).await {
            Ok(()) => {
                tracing::info!(fragments = item.quantity, "Minted egg");
                report.issued += 1;
            }
            Err(e) => {
                tracing::warn!(fragments = item.quantity, error = %e, "Mint failed");
                report.failed += 1;
            }
        }
    }

    report
}
