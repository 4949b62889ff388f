//! Kingdom team enrollment, run once before battling

use metamon_protocol::Session;

use crate::error::AutomationError;
use crate::game::GameClient;
use crate::types::{BagItem, BagItemKind, Team};

/// Teams demanding a higher rating ceiling than this are never joined
pub const TEAM_RATING_CEILING: i64 = 305;

/// First team in listing order that is open and within the rating ceiling
pub fn pick_team(teams: &[Team]) -> Option<&Team> {
    teams
        .iter()
        .find(|team| !team.locked && team.rating_threshold <= TEAM_RATING_CEILING)
}

/// Bag items that can pay for a team enrollment
fn battle_passes(items: &[BagItem]) -> impl Iterator<Item = &BagItem> {
    items
        .iter()
        .filter(|item| item.kind == BagItemKind::BattlePass && item.quantity > 0)
}

/// Enroll eligible creatures into a team for every battle pass held.
///
/// Each pass item gets at most one enrollment, into the first eligible
/// team. Returns how many enrollment requests were submitted. Any failing
/// call aborts the run.
pub async fn enroll_teams<C: GameClient>(
    client: &C,
    session: &Session,
) -> Result<usize, AutomationError> {
    let teams = client
        .list_teams(session)
        .await
        .map_err(|e| AutomationError::account("list teams", e))?;

    let bag = client
        .list_bag_items(session)
        .await
        .map_err(|e| AutomationError::account("list bag items", e))?;

    let mut submitted = 0;

    for pass in battle_passes(&bag) {
        let Some(team) = pick_team(&teams) else {
            tracing::info!(passes = pass.quantity, "No open team within the rating ceiling");
            continue;
        };

        let eligible = client
            .screen_eligible_creatures(session, &team.id, team.rating_threshold)
            .await
            .map_err(|e| AutomationError::account("screen team candidates", e))?;

        if eligible.is_empty() {
            tracing::info!(team = %team.id, "No creatures eligible for team");
            continue;
        }

        let ids: Vec<String> = eligible.into_iter().map(|c| c.id).collect();
        client
            .join_team(session, &team.id, &ids)
            .await
            .map_err(|e| AutomationError::account("join team", e))?;

        tracing::info!(
            team = %team.id,
            name = team.name.as_deref().unwrap_or(""),
            threshold = team.rating_threshold,
            creatures = ids.len(),
            "Submitted team enrollment"
        );
        submitted += 1;
    }

    Ok(submitted)
}
