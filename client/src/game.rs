use anyhow::Result;
use metamon_battle::{
    BagItem, BattleOutcome, Creature, GameClient, OpponentCandidate, PaymentReceipt, Team, Tier,
};
use metamon_protocol::{
    Bag, BattleObjects, BattleResult, Endpoint, JoinTeamRequest, MonsterList, NftRef, PayResult,
    Session, TeamList,
};

use crate::HttpGameClient;

impl GameClient for HttpGameClient {
    async fn list_owned_creatures(&self, session: &Session) -> Result<Vec<Creature>> {
        let params = [("address", session.address.as_str()), ("orderType", "-1")];
        let list: MonsterList = self
            .query(Endpoint::WalletPropertyList, Some(session), &params)
            .await?;
        Ok(list.monsters.into_iter().map(Creature::from).collect())
    }

    async fn fetch_opponents(
        &self,
        session: &Session,
        owner: &str,
        creature_id: &str,
        tier: Tier,
    ) -> Result<Vec<OpponentCandidate>> {
        let params = [
            ("address", owner),
            ("metamonId", creature_id),
            ("front", tier.as_str()),
        ];
        let objects: BattleObjects = self
            .query(Endpoint::BattleObjects, Some(session), &params)
            .await?;
        Ok(objects
            .objects
            .into_iter()
            .map(OpponentCandidate::from)
            .collect())
    }

    async fn pay_entry_fee(
        &self,
        session: &Session,
        creature_id: &str,
        opponent_id: &str,
        tier: Tier,
    ) -> Result<PaymentReceipt> {
        let params = battle_params(session, creature_id, opponent_id, tier);
        let result: PayResult = self.query(Endpoint::StartPay, Some(session), &params).await?;
        Ok(result.into())
    }

    async fn fight_battle(
        &self,
        session: &Session,
        creature_id: &str,
        opponent_id: &str,
        tier: Tier,
    ) -> Result<BattleOutcome> {
        let params = battle_params(session, creature_id, opponent_id, tier);
        let result: BattleResult = self
            .query(Endpoint::StartBattle, Some(session), &params)
            .await?;
        Ok(result.into())
    }

    async fn level_up_creature(&self, session: &Session, creature_id: &str) -> Result<()> {
        let params = [("nftId", creature_id), ("address", session.address.as_str())];
        self.command(Endpoint::UpdateMonster, session, &params).await
    }

    async fn reset_creature_exp(&self, session: &Session, creature_id: &str) -> Result<()> {
        let params = [("address", session.address.as_str()), ("nftId", creature_id)];
        self.command(Endpoint::ResetMonsterExp, session, &params).await
    }

    async fn list_bag_items(&self, session: &Session) -> Result<Vec<BagItem>> {
        let params = [("address", session.address.as_str())];
        let bag: Bag = self.query(Endpoint::CheckBag, Some(session), &params).await?;
        Ok(bag.item.into_iter().map(BagItem::from).collect())
    }

    async fn list_teams(&self, session: &Session) -> Result<Vec<Team>> {
        let params = [
            ("address", session.address.as_str()),
            ("page", "1"),
            ("pageSize", "20"),
            ("orderField", "monsterNum"),
        ];
        let teams: TeamList = self.query(Endpoint::TeamList, Some(session), &params).await?;
        Ok(teams.list.into_iter().map(Team::from).collect())
    }

    async fn screen_eligible_creatures(
        &self,
        session: &Session,
        team_id: &str,
        rating_threshold: i64,
    ) -> Result<Vec<Creature>> {
        let threshold = rating_threshold.to_string();
        let params = [
            ("address", session.address.as_str()),
            ("scaThreshold", threshold.as_str()),
            ("teamId", team_id),
            ("minSca", "-1"),
            ("nftId", "-1"),
            ("pageSize", "50"),
        ];
        let list: MonsterList = self
            .query(Endpoint::ScreenMonsters, Some(session), &params)
            .await?;
        Ok(list.monsters.into_iter().map(Creature::from).collect())
    }

    async fn join_team(
        &self,
        session: &Session,
        team_id: &str,
        creature_ids: &[String],
    ) -> Result<()> {
        let request = JoinTeamRequest {
            address: session.address.clone(),
            team_id: team_id.to_string(),
            metamons: creature_ids
                .iter()
                .map(|id| NftRef { nft_id: id.clone() })
                .collect(),
        };
        self.command_json(Endpoint::JoinTeam, session, &request).await
    }

    async fn mint_asset(&self, session: &Session) -> Result<()> {
        let params = [("address", session.address.as_str())];
        self.command(Endpoint::ComposeMonsterEgg, session, &params)
            .await
    }
}

/// Query parameters shared by `startPay` and `startBattle`
fn battle_params<'a>(
    session: &'a Session,
    creature_id: &'a str,
    opponent_id: &'a str,
    tier: Tier,
) -> [(&'static str, &'a str); 4] {
    [
        ("address", session.address.as_str()),
        ("battleLevel", tier.as_str()),
        ("monsterA", creature_id),
        ("monsterB", opponent_id),
    ]
}
