//! # Scholarship Fund Contract
//!
//! Donors contribute to a shared pool; the fund owner awards scholarships out
//! of that pool. Anyone can query the pooled total, a donor's cumulative
//! contribution, or a scholar's award record.
//!
//! ## Storage Layout
//!
//! | Key                      | Tier           | Lifecycle       |
//! |--------------------------|----------------|-----------------|
//! | `DataKey::Owner`         | `instance()`   | Entire contract |
//! | `DataKey::TotalFunds`    | `instance()`   | Entire contract |
//! | `DataKey::Donor(addr)`   | `persistent()` | Per donor       |
//! | `DataKey::Scholar(addr)` | `persistent()` | Per scholar     |
//!
//! ## Rules
//!
//! - The owner is set once by `initialize` and never changes.
//! - `award_scholarship` checks the caller before the balance, so a non-owner
//!   always sees `Unauthorized`, even for an amount the fund cannot cover.
//! - Every guard runs before the first storage write; a failed call leaves
//!   the fund untouched.
//! - Amounts are `i128` minor units. Donations use checked addition; an
//!   award never exceeds the pooled total, so it cannot drive it negative.

#![no_std]

mod events;
mod math;
mod types;
mod validation;

pub use scholarship_errors::{ErrorCategory, ErrorExt, FundError};
pub use types::{DataKey, FundSummary, ScholarInfo, ScholarStatus};

use soroban_sdk::{contract, contractimpl, Address, Env};




// ─── TTL constants ─────────────────────────────────────────────────────────

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn load_owner(e: &Env) -> Result<Address, FundError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(FundError::NotInitialized)
}

fn load_total_funds(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

/// Donor contribution, defaulting to zero for an address that never donated.
fn load_donor_contribution(e: &Env, donor: &Address) -> i128 {
    let key = DataKey::Donor(donor.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, i128>(&key) {
        Some(amount) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            amount
        }
        None => 0,
    }
}

fn save_persistent<V>(e: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct ScholarshipFund;

#[contractimpl]
impl ScholarshipFund {
    /// One-time initialization. Stores `owner` and an empty pool.
    ///
    /// # Errors
    /// * `AlreadyInitialized` — an owner is already stored
    ///
    /// # Events
    /// Emits `fund_initialized` with the owner address
    pub fn initialize(e: Env, owner: Address) -> Result<(), FundError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(FundError::AlreadyInitialized);
        }

        owner.require_auth();

        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::TotalFunds, &0_i128);

        events::emit_fund_initialized(&e, &owner);
        Ok(())
    }

    // ── Mutations ──────────────────────────────────────────────────────────

    /// Record a donation of `amount` from `sender`.
    ///
    /// Adds `amount` to the pooled total and to the sender's cumulative
    /// contribution. Returns the donated amount.
    ///
    /// # Errors
    /// * `NotInitialized` — no owner stored yet
    /// * `InvalidAmount` — `amount <= 0`
    /// * `Overflow` — either running total would overflow `i128`
    ///
    /// # Events
    /// Emits `donation_received`
    pub fn donate_funds(e: Env, amount: i128, sender: Address) -> Result<i128, FundError> {
        sender.require_auth();
        load_owner(&e)?;
        validation::require_positive_amount(amount)?;

        let total_funds = math::add_amount(load_total_funds(&e), amount)?;
        let donor_total = math::add_amount(load_donor_contribution(&e, &sender), amount)?;

        e.storage()
            .instance()
            .set(&DataKey::TotalFunds, &total_funds);
        save_persistent(&e, &DataKey::Donor(sender.clone()), &donor_total);

        events::emit_donation_received(&e, &sender, amount, donor_total, total_funds);
        Ok(amount)
    }

    /// Award `amount` from the pool to `scholar`. Owner only.
    ///
    /// Replaces any earlier award to the same scholar. Returns the awarded
    /// amount.
    ///
    /// # Errors
    /// * `NotInitialized` — no owner stored yet
    /// * `Unauthorized` — `sender` is not the owner (checked first)
    /// * `InvalidAmount` — `amount < 0`
    /// * `InsufficientFunds` — `amount` exceeds the pooled total
    ///
    /// # Events
    /// Emits `scholarship_awarded`
    pub fn award_scholarship(
        e: Env,
        scholar: Address,
        amount: i128,
        sender: Address,
    ) -> Result<i128, FundError> {
        sender.require_auth();
        let owner = load_owner(&e)?;
        if sender != owner {
            return Err(FundError::Unauthorized);
        }
        validation::require_non_negative_amount(amount)?;

        let total_funds = load_total_funds(&e);
        if amount > total_funds {
            return Err(FundError::InsufficientFunds);
        }
        // 0 <= amount <= total_funds
        let remaining = total_funds - amount;

        e.storage()
            .instance()
            .set(&DataKey::TotalFunds, &remaining);
        let info = ScholarInfo {
            amount,
            status: ScholarStatus::Awarded,
        };
        save_persistent(&e, &DataKey::Scholar(scholar.clone()), &info);

        events::emit_scholarship_awarded(&e, &scholar, amount, remaining);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Pooled balance available for awards. Zero before any donation.
    pub fn get_total_funds(e: Env) -> i128 {
        load_total_funds(&e)
    }

    /// Cumulative contribution of `donor`. Zero for unknown donors.
    pub fn get_donor_contribution(e: Env, donor: Address) -> i128 {
        load_donor_contribution(&e, &donor)
    }

    /// Award record for `scholar`, or `None` if nothing was awarded.
    pub fn get_scholar_info(e: Env, scholar: Address) -> Option<ScholarInfo> {
        let key = DataKey::Scholar(scholar);
        let storage = e.storage().persistent();
        let info: Option<ScholarInfo> = storage.get(&key);
        if info.is_some() {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
        }
        info
    }

    /// The owner fixed at initialization.
    ///
    /// # Errors
    /// * `NotInitialized` — no owner stored yet
    pub fn get_owner(e: Env) -> Result<Address, FundError> {
        load_owner(&e)
    }

    /// Owner and pooled total in one read.
    pub fn get_summary(e: Env) -> Result<FundSummary, FundError> {
        Ok(FundSummary {
            owner: load_owner(&e)?,
            total_funds: load_total_funds(&e),
        })
    }
}
