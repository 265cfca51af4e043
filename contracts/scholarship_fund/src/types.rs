use soroban_sdk::{contracttype, Address};

// ─── Scholar records ───────────────────────────────────────────────────────

/// Lifecycle of a scholar record. A record only exists once awarded.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScholarStatus {
    Awarded,
}

/// Award held by a single scholar.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScholarInfo {
    /// Amount awarded, in minor units.
    pub amount: i128,
    pub status: ScholarStatus,
}

// ─── Fund snapshot ─────────────────────────────────────────────────────────

/// Read-only view of the fund's scalar state.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundSummary {
    pub owner: Address,
    /// Donations received minus scholarships awarded.
    pub total_funds: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Fund owner, the only address allowed to award. Stored in `instance()`.
    Owner,
    /// Pooled balance available for awards. Stored in `instance()`.
    TotalFunds,
    /// Cumulative contribution per donor. Stored in `persistent()`.
    Donor(Address),
    /// Award record per scholar. Stored in `persistent()`.
    Scholar(Address),
}
