#![no_std]

mod access;
mod custody;
mod error;
mod events;
mod schedule;
mod settlement;
mod storage;
mod types;

mod mock_token;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use error::EscrowError;
pub use events::{EscrowFunded, MilestoneApproved, MilestoneClaimed, ProjectClosed, ProjectCompleted};
pub use types::{EscrowAccount, Lifecycle, Milestone, MAX_DEPOSIT};

use access::Role;

/// Milestone payments escrow for a single project between an owner and a contractor.
///
/// The owner funds the escrow and defines a schedule of percentage milestones.
/// Each milestone is approved by the owner and then claimed by the contractor,
/// strictly in schedule order. Once both parties mark the project completed the
/// contractor receives whatever is left and the escrow is torn down.
#[contract]
pub struct PaymentsContract;

#[contractimpl]
impl PaymentsContract {
    /// Set up the escrow and pull `initial_deposit` from the owner. Caller must be owner.
    pub fn initialize(
        e: Env,
        owner: Address,
        contractor: Address,
        project_id: String,
        token: Address,
        initial_deposit: i128,
    ) -> Result<(), EscrowError> {
        owner.require_auth();

        match storage::lifecycle(&e) {
            Some(Lifecycle::Terminated) => return Err(EscrowError::AccountTerminated),
            Some(Lifecycle::Active) => return Err(EscrowError::AlreadyInitialized),
            None => {}
        }
        if contractor == owner {
            return Err(EscrowError::InvalidContractor);
        }
        custody::validate_deposit(initial_deposit)?;

        // Funds land in custody before any state is written
        custody::pull_deposit(&e, &token, &owner, initial_deposit)?;

        let account = EscrowAccount {
            owner: owner.clone(),
            contractor,
            project_id: project_id.clone(),
            token,
            milestones: Vec::new(&e),
            approval_index: 0,
            claim_index: 0,
            initial_deposit,
            current_balance: initial_deposit,
            owner_completed: false,
            contractor_completed: false,
        };
        storage::store_account(&e, &account);

        if initial_deposit > 0 {
            EscrowFunded {
                project_id,
                from: owner,
                amount: initial_deposit,
            }
            .publish(&e);
        }
        log!(&e, "escrow initialized with deposit {}", initial_deposit);
        Ok(())
    }

    /// Append a milestone worth `percentage` of the initial deposit. Owner only.
    /// Returns the new schedule length.
    pub fn add_milestone(e: Env, caller: Address, percentage: u32) -> Result<u32, EscrowError> {
        caller.require_auth();
        let mut account = storage::load_account(&e)?;
        access::require_owner(&account, &caller)?;

        let length = schedule::add_milestone(&mut account, percentage)?;
        storage::store_account(&e, &account);
        Ok(length)
    }

    /// Approve the next milestone in order. Owner only. Returns the payout amount
    /// the contractor can now claim.
    pub fn approve_next_milestone(e: Env, caller: Address) -> Result<i128, EscrowError> {
        caller.require_auth();
        let mut account = storage::load_account(&e)?;
        access::require_owner(&account, &caller)?;

        let amount = settlement::approve_next(&e, &mut account)?;
        storage::store_account(&e, &account);
        Ok(amount)
    }

    /// Transfer the oldest approved, unpaid milestone to the contractor. Contractor only.
    pub fn claim_next_milestone(e: Env, caller: Address) -> Result<i128, EscrowError> {
        caller.require_auth();
        let mut account = storage::load_account(&e)?;
        access::require_contractor(&account, &caller)?;

        let amount = settlement::claim_next(&e, &mut account)?;
        storage::store_account(&e, &account);
        Ok(amount)
    }

    /// Owner marks the project complete first; the contractor then closes it,
    /// receiving the remaining balance and terminating the escrow.
    ///
    /// Returns the announced balance for the owner and the paid amount for the contractor.
    pub fn mark_completed(e: Env, caller: Address) -> Result<i128, EscrowError> {
        caller.require_auth();
        let mut account = storage::load_account(&e)?;

        match access::role_of(&account, &caller) {
            Some(Role::Owner) => {
                let announced = custody::complete_for_owner(&e, &mut account)?;
                storage::store_account(&e, &account);
                Ok(announced)
            }
            // close_for_contractor erases the account itself
            Some(Role::Contractor) => custody::close_for_contractor(&e, &mut account),
            None => Err(EscrowError::Unauthorized),
        }
    }

    /// Add funds to the escrow without changing the payout base. Owner only.
    pub fn top_up(e: Env, caller: Address, amount: i128) -> Result<i128, EscrowError> {
        caller.require_auth();
        let mut account = storage::load_account(&e)?;
        access::require_owner(&account, &caller)?;

        let balance = custody::top_up(&e, &mut account, amount)?;
        storage::store_account(&e, &account);
        Ok(balance)
    }

    /// Next milestone the contractor will claim, approved or not.
    pub fn peek_next_for_contractor(e: Env) -> Result<Milestone, EscrowError> {
        settlement::peek_next_for_contractor(&storage::load_account(&e)?)
    }

    /// Next milestone waiting for owner approval.
    pub fn peek_next_for_owner(e: Env) -> Result<Milestone, EscrowError> {
        settlement::peek_next_for_owner(&storage::load_account(&e)?)
    }

    pub fn get_milestone(e: Env, index: u32) -> Result<Milestone, EscrowError> {
        schedule::get_milestone(&storage::load_account(&e)?, index)
    }

    /// Payout the milestone at `index` is worth.
    pub fn payout_amount(e: Env, index: u32) -> Result<i128, EscrowError> {
        let account = storage::load_account(&e)?;
        let milestone = schedule::get_milestone(&account, index)?;
        custody::payout_for(account.initial_deposit, milestone.percentage)
    }

    pub fn schedule_length(e: Env) -> Result<u32, EscrowError> {
        Ok(storage::load_account(&e)?.milestones.len())
    }

    pub fn total_percentage(e: Env) -> Result<u32, EscrowError> {
        Ok(schedule::total_percentage(&storage::load_account(&e)?.milestones))
    }

    pub fn approval_index(e: Env) -> Result<u32, EscrowError> {
        Ok(storage::load_account(&e)?.approval_index)
    }

    pub fn claim_index(e: Env) -> Result<u32, EscrowError> {
        Ok(storage::load_account(&e)?.claim_index)
    }

    pub fn current_balance(e: Env) -> Result<i128, EscrowError> {
        Ok(storage::load_account(&e)?.current_balance)
    }

    pub fn initial_deposit(e: Env) -> Result<i128, EscrowError> {
        Ok(storage::load_account(&e)?.initial_deposit)
    }

    /// Diagnostic: what the token contract reports the escrow holding.
    pub fn custody_balance(e: Env) -> Result<i128, EscrowError> {
        let account = storage::load_account(&e)?;
        Ok(custody::custody_balance(&e, &account.token))
    }

    pub fn owner(e: Env) -> Result<Address, EscrowError> {
        Ok(storage::load_account(&e)?.owner)
    }

    pub fn contractor(e: Env) -> Result<Address, EscrowError> {
        Ok(storage::load_account(&e)?.contractor)
    }

    pub fn project_id(e: Env) -> Result<String, EscrowError> {
        Ok(storage::load_account(&e)?.project_id)
    }

    pub fn token(e: Env) -> Result<Address, EscrowError> {
        Ok(storage::load_account(&e)?.token)
    }

    pub fn owner_completed(e: Env) -> Result<bool, EscrowError> {
        Ok(storage::load_account(&e)?.owner_completed)
    }

    pub fn contractor_completed(e: Env) -> Result<bool, EscrowError> {
        Ok(storage::load_account(&e)?.contractor_completed)
    }
}
