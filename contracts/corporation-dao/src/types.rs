use authorization::Role;
use shared::constants::{
    DEFAULT_DISSOLUTION_BPS, DEFAULT_INVITE_TTL_SECONDS, DEFAULT_MAX_MEMBERS, DEFAULT_QUORUM_BPS,
    DEFAULT_SPEND_CAP_BPS, DEFAULT_VOTING_PERIOD_SECONDS, MAX_VOTING_PERIOD_SECONDS,
    MIN_VOTING_PERIOD_SECONDS,
};
use soroban_sdk::{contracttype, Address, Bytes, String};

/// Global parameters, set at initialization and changed only by the admin
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Exact amount a founder pays to create a corporation
    pub creation_fee: i128,
    /// Exact amount escrowed with every proposal
    pub proposal_deposit: i128,
    pub default_quorum_bps: u32,
    pub default_voting_period: u64,
    pub min_voting_period: u64,
    pub max_voting_period: u64,
    /// Largest single treasury spend, as bps of the balance at execution
    pub spend_cap_bps: u32,
    /// Share of the snapshot that must vote yes on a dissolution
    pub dissolution_bps: u32,
    pub default_max_members: u32,
    pub invite_ttl: u64,
}

/// Free to create and propose; every other field at its protocol default
impl Default for Config {
    fn default() -> Self {
        Config {
            creation_fee: 0,
            proposal_deposit: 0,
            default_quorum_bps: DEFAULT_QUORUM_BPS,
            default_voting_period: DEFAULT_VOTING_PERIOD_SECONDS,
            min_voting_period: MIN_VOTING_PERIOD_SECONDS,
            max_voting_period: MAX_VOTING_PERIOD_SECONDS,
            spend_cap_bps: DEFAULT_SPEND_CAP_BPS,
            dissolution_bps: DEFAULT_DISSOLUTION_BPS,
            default_max_members: DEFAULT_MAX_MEMBERS,
            invite_ttl: DEFAULT_INVITE_TTL_SECONDS,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoinPolicy {
    Open,
    InviteOnly,
}

/// Lifecycle of a corporation; transitions only move forward
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CorporationStatus {
    Active,
    Dissolving,
    Dissolved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Corporation {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub founder: Address,
    pub join_policy: JoinPolicy,
    pub status: CorporationStatus,
    pub quorum_bps: u32,
    pub voting_period: u64,
    pub max_members: u32,
    pub member_count: u32,
    pub treasury_balance: i128,
    /// Dissolution claims not yet paid out
    pub unclaimed_shares: u32,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub corp_id: u64,
    pub address: Address,
    pub role: Role,
    pub joined_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invite {
    pub corp_id: u64,
    pub invitee: Address,
    pub inviter: Address,
    pub expires_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasurySpend {
    pub recipient: Address,
    pub amount: i128,
    pub reason: String,
}

/// Join policy update inside a settings change
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolicyChange {
    Keep,
    Set(JoinPolicy),
}

/// Fields left as `None` (or `PolicyChange::Keep`) keep their current value
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettingsChange {
    pub name: Option<String>,
    pub description: Option<String>,
    pub join_policy: PolicyChange,
    pub quorum_bps: Option<u32>,
    pub voting_period: Option<u64>,
    pub max_members: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Promotion {
    pub member: Address,
    pub new_role: Role,
}

/// Opaque payload handed to an external executor
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomAction {
    pub target: Address,
    pub instruction: Bytes,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    TreasurySpend(TreasurySpend),
    ChangeSettings(SettingsChange),
    KickMember(Address),
    PromoteMember(Promotion),
    Dissolution,
    Custom(CustomAction),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Active,
    Passed,
    Failed,
    Executed,
    Expired,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub corp_id: u64,
    pub proposer: Address,
    pub kind: ProposalKind,
    pub deposit: i128,
    pub created_at: u64,
    pub voting_deadline: u64,
    /// Member count at creation; quorum is always measured against it
    pub member_count_snapshot: u32,
    pub quorum_bps: u32,
    pub dissolution_bps: u32,
    pub yes_votes: u32,
    pub no_votes: u32,
    pub status: ProposalStatus,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    Yes,
    No,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub choice: VoteChoice,
    pub cast_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DissolutionClaim {
    pub amount: i128,
    pub claimed: bool,
}

/// Everything the contract owes, tracked separately from the token balance
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Liabilities {
    pub treasuries: i128,
    pub escrow: i128,
    pub claims: i128,
}

/// Read-only view of a proposal's tally
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteStatus {
    pub proposal_id: u64,
    pub yes_votes: u32,
    pub no_votes: u32,
    pub member_count_snapshot: u32,
    pub quorum_reached: bool,
    pub voting_closed: bool,
    /// `Active` while voting is open, then the outcome execution would apply
    pub outcome: ProposalStatus,
}
