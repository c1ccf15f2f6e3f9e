//! Common constants used across the corporation contracts
//!
//! Defaults here seed a fresh `Config`; bounds are enforced by `validation`.

// ===== Basis Points =====

/// Denominator for every bps value (10000 = 100%)
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Smallest meaningful quorum (0.01%)
pub const MIN_QUORUM_BPS: u32 = 1;

/// Default quorum (51%)
pub const DEFAULT_QUORUM_BPS: u32 = 5_100;

/// Default cap on a single treasury spend (25% of the current balance)
pub const DEFAULT_SPEND_CAP_BPS: u32 = 2_500;

/// Default dissolution supermajority (75% of the snapshot)
pub const DEFAULT_DISSOLUTION_BPS: u32 = 7_500;

// ===== Time Constants (in seconds) =====

/// One hour in seconds
pub const ONE_HOUR_SECONDS: u64 = 3_600;

/// One day in seconds (86400)
pub const ONE_DAY_SECONDS: u64 = 86_400;

/// Shortest voting period a corporation may configure (1 hour)
pub const MIN_VOTING_PERIOD_SECONDS: u64 = ONE_HOUR_SECONDS;

/// Longest voting period a corporation may configure (30 days)
pub const MAX_VOTING_PERIOD_SECONDS: u64 = 30 * ONE_DAY_SECONDS;

/// Default voting period (3 days)
pub const DEFAULT_VOTING_PERIOD_SECONDS: u64 = 3 * ONE_DAY_SECONDS;

/// Default invite lifetime (7 days)
pub const DEFAULT_INVITE_TTL_SECONDS: u64 = 7 * ONE_DAY_SECONDS;

// ===== Membership =====

/// Default member cap for new corporations
pub const DEFAULT_MAX_MEMBERS: u32 = 50;

// ===== Pagination Constants =====

/// Maximum results per page for paginated queries
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 30;

// ===== Ledger TTL Constants =====
// ~5s per ledger: 17,280 ledgers per day.

/// Ledgers per day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Persistent entries are extended to ~30 days on every write
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Extension kicks in once fewer than ~29 days remain
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Instance storage is extended to ~7 days
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance extension threshold (~6 days)
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
