use soroban_sdk::Env;

use crate::error::EscrowError;
use crate::types::{DataKey, EscrowAccount, Lifecycle};

const DAY_IN_LEDGERS: u32 = 17280; // ~5s per ledger
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn lifecycle(e: &Env) -> Option<Lifecycle> {
    e.storage().instance().get(&DataKey::Lifecycle)
}

/// Load the active account. Every entry point goes through here first.
pub fn load_account(e: &Env) -> Result<EscrowAccount, EscrowError> {
    match lifecycle(e) {
        None => Err(EscrowError::NotInitialized),
        Some(Lifecycle::Terminated) => Err(EscrowError::AccountTerminated),
        Some(Lifecycle::Active) => {
            let account = e
                .storage()
                .instance()
                .get::<_, EscrowAccount>(&DataKey::Account)
                .ok_or(EscrowError::NotInitialized)?;
            bump_instance(e);
            Ok(account)
        }
    }
}

pub fn store_account(e: &Env, account: &EscrowAccount) {
    e.storage().instance().set(&DataKey::Account, account);
    e.storage()
        .instance()
        .set(&DataKey::Lifecycle, &Lifecycle::Active);
    bump_instance(e);
}

/// Erase the account record. Only the lifecycle tag survives so later calls
/// can report `AccountTerminated` instead of `NotInitialized`.
pub fn erase_account(e: &Env) {
    e.storage().instance().remove(&DataKey::Account);
    e.storage()
        .instance()
        .set(&DataKey::Lifecycle, &Lifecycle::Terminated);
    bump_instance(e);
}
