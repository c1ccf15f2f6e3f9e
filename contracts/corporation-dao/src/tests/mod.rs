extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Bytes, Env, String,
};
use std::vec::Vec as StdVec;

use crate::types::{
    Config, CustomAction, JoinPolicy, PolicyChange, Promotion, ProposalKind, SettingsChange, TreasurySpend, VoteChoice,
};
use crate::{CorporationDao, CorporationDaoClient};

mod admin;
mod registry;

pub const CREATION_FEE: i128 = 1_000;
pub const DEPOSIT: i128 = 500;
pub const STARTING_FUNDS: i128 = 1_000_000;
pub const START_TIME: u64 = 1_700_000_000;
pub const VOTING_PERIOD: u64 = 259_200;

pub fn default_config() -> Config {
    Config {
        creation_fee: CREATION_FEE,
        proposal_deposit: DEPOSIT,
        ..Config::default()
    }
}

pub struct TestEnvironment {
    pub env: Env,
    pub admin: Address,
    pub token: Address,
    pub contract_id: Address,
    pub client: CorporationDaoClient<'static>,
    pub token_client: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self::with_config(default_config())
    }

    pub fn with_config(config: Config) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START_TIME);

        let admin = Address::generate(&env);
        let token = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        let token_client = token::TokenClient::new(&env, &token);
        let token_admin = token::StellarAssetClient::new(&env, &token);

        let contract_id = env.register(CorporationDao, ());
        let client = CorporationDaoClient::new(&env, &contract_id);
        client.initialize(&admin, &token, &config);

        Self {
            env,
            admin,
            token,
            contract_id,
            client,
            token_client,
            token_admin,
        }
    }

    /// New address holding `STARTING_FUNDS`
    pub fn create_user(&self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &STARTING_FUNDS);
        user
    }

    pub fn balance(&self, address: &Address) -> i128 {
        self.token_client.balance(address)
    }

    pub fn advance_time(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn string(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn create_corporation(&self, founder: &Address, policy: JoinPolicy) -> u64 {
        let fee = self.client.get_config().creation_fee;
        self.client.create_corporation(
            founder,
            &self.string("Iron Syndicate"),
            &self.string("Miners and haulers"),
            &policy,
            &fee,
        )
    }

    /// Open corporation with `size` members, founder first. The clock is
    /// advanced afterwards so every member may vote on new proposals.
    pub fn corporation_with_members(&self, size: u32) -> (u64, StdVec<Address>) {
        let founder = self.create_user();
        let corp_id = self.create_corporation(&founder, JoinPolicy::Open);

        let mut members = StdVec::new();
        members.push(founder);
        for _ in 1..size {
            let member = self.create_user();
            self.client.join(&member, &corp_id);
            members.push(member);
        }
        self.advance_time(1);
        (corp_id, members)
    }

    pub fn propose(&self, proposer: &Address, corp_id: u64, kind: &ProposalKind) -> u64 {
        self.client.create_proposal(proposer, &corp_id, kind, &DEPOSIT)
    }

    pub fn vote_all(&self, proposal_id: u64, voters: &[Address], choice: VoteChoice) {
        for voter in voters {
            self.client.vote(voter, &proposal_id, &choice);
        }
    }

    /// Jump to the proposal's voting deadline
    pub fn close_voting(&self, proposal_id: u64) {
        let deadline = self.client.get_proposal(&proposal_id).voting_deadline;
        self.env.ledger().set_timestamp(deadline);
    }

    pub fn spend(&self, recipient: &Address, amount: i128) -> ProposalKind {
        ProposalKind::TreasurySpend(TreasurySpend {
            recipient: recipient.clone(),
            amount,
            reason: self.string("ore shipment"),
        })
    }

    pub fn promotion(&self, member: &Address, new_role: authorization::Role) -> ProposalKind {
        ProposalKind::PromoteMember(Promotion {
            member: member.clone(),
            new_role,
        })
    }

    pub fn custom(&self, target: &Address) -> ProposalKind {
        ProposalKind::Custom(CustomAction {
            target: target.clone(),
            instruction: Bytes::from_array(&self.env, &[7u8; 4]),
        })
    }
}

pub fn no_settings() -> SettingsChange {
    SettingsChange {
        name: None,
        description: None,
        join_policy: PolicyChange::Keep,
        quorum_bps: None,
        voting_period: None,
        max_members: None,
    }
}
