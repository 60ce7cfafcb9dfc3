use soroban_sdk::Address;

use crate::error::EscrowError;
use crate::types::EscrowAccount;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    Contractor,
}

pub fn role_of(account: &EscrowAccount, caller: &Address) -> Option<Role> {
    if caller == &account.owner {
        Some(Role::Owner)
    } else if caller == &account.contractor {
        Some(Role::Contractor)
    } else {
        None
    }
}

pub fn require_owner(account: &EscrowAccount, caller: &Address) -> Result<(), EscrowError> {
    match role_of(account, caller) {
        Some(Role::Owner) => Ok(()),
        _ => Err(EscrowError::Unauthorized),
    }
}

pub fn require_contractor(account: &EscrowAccount, caller: &Address) -> Result<(), EscrowError> {
    match role_of(account, caller) {
        Some(Role::Contractor) => Ok(()),
        _ => Err(EscrowError::Unauthorized),
    }
}
