#![cfg(test)]

//! Minimal token that can be switched into declining transfers, either all of
//! them or only those to one blocked recipient.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MockTokenError {
    Declined = 1,
    InsufficientBalance = 2,
}

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Declining,
    Blocked,
    Balance(Address),
}

#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn set_declining(e: Env, declining: bool) {
        e.storage().instance().set(&MockKey::Declining, &declining);
    }

    pub fn set_blocked(e: Env, id: Address) {
        e.storage().instance().set(&MockKey::Blocked, &id);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        let balance = Self::balance(e.clone(), to.clone());
        e.storage()
            .instance()
            .set(&MockKey::Balance(to), &(balance + amount));
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        e.storage()
            .instance()
            .get(&MockKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), MockTokenError> {
        let declining: bool = e
            .storage()
            .instance()
            .get(&MockKey::Declining)
            .unwrap_or(false);
        let blocked: Option<Address> = e.storage().instance().get(&MockKey::Blocked);
        if declining || blocked.as_ref() == Some(&to) {
            return Err(MockTokenError::Declined);
        }

        let from_balance = Self::balance(e.clone(), from.clone());
        if from_balance < amount {
            return Err(MockTokenError::InsufficientBalance);
        }
        let to_balance = Self::balance(e.clone(), to.clone());
        e.storage()
            .instance()
            .set(&MockKey::Balance(from), &(from_balance - amount));
        e.storage()
            .instance()
            .set(&MockKey::Balance(to), &(to_balance + amount));
        Ok(())
    }
}
