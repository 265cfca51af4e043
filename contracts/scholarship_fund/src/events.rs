use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the fund is initialized.
///
/// # Topics
/// * `Symbol` - "fund_initialized"
///
/// # Data
/// * `Address` - The fund owner
pub fn emit_fund_initialized(e: &Env, owner: &Address) {
    let topics = (Symbol::new(e, "fund_initialized"),);
    e.events().publish(topics, owner.clone());
}

/// Emitted when a donation is accepted.
///
/// # Topics
/// * `Symbol` - "donation_received"
/// * `Address` - The donor
///
/// # Data
/// * `i128` - The donated amount
/// * `i128` - The donor's cumulative contribution
/// * `i128` - The fund total after the donation
pub fn emit_donation_received(
    e: &Env,
    donor: &Address,
    amount: i128,
    donor_total: i128,
    total_funds: i128,
) {
    let topics = (Symbol::new(e, "donation_received"), donor.clone());
    let data = (amount, donor_total, total_funds);
    e.events().publish(topics, data);
}

/// Emitted when the owner awards a scholarship.
///
/// # Topics
/// * `Symbol` - "scholarship_awarded"
/// * `Address` - The scholar
///
/// # Data
/// * `i128` - The awarded amount
/// * `i128` - The fund total remaining
pub fn emit_scholarship_awarded(e: &Env, scholar: &Address, amount: i128, total_funds: i128) {
    let topics = (Symbol::new(e, "scholarship_awarded"), scholar.clone());
    let data = (amount, total_funds);
    e.events().publish(topics, data);
}
