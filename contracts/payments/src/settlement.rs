use soroban_sdk::{log, Env};

use crate::custody;
use crate::error::EscrowError;
use crate::events::{MilestoneApproved, MilestoneClaimed};
use crate::types::{EscrowAccount, Milestone};

// Cursor rules:
//   claim_index <= approval_index <= milestones.len()
//   [0, claim_index)               approved and paid
//   [claim_index, approval_index)  approved, waiting for the contractor
//   [approval_index, len)          not approved

/// Owner approves the next milestone in schedule order. No funds move.
pub fn approve_next(e: &Env, account: &mut EscrowAccount) -> Result<i128, EscrowError> {
    let index = account.approval_index;
    let mut milestone = account
        .milestones
        .get(index)
        .ok_or(EscrowError::NoPendingApproval)?;
    let amount = custody::payout_for(account.initial_deposit, milestone.percentage)?;

    milestone.is_approved = true;
    account.milestones.set(index, milestone);
    account.approval_index = index + 1;

    MilestoneApproved {
        project_id: account.project_id.clone(),
        contractor: account.contractor.clone(),
        amount,
    }
    .publish(e);
    log!(e, "milestone {} approved for {}", index, amount);
    Ok(amount)
}

/// Contractor claims the oldest approved milestone. The transfer happens
/// before any state flips, so a failed transfer can simply be retried.
pub fn claim_next(e: &Env, account: &mut EscrowAccount) -> Result<i128, EscrowError> {
    let index = account.claim_index;
    if index >= account.approval_index {
        return Err(EscrowError::NoClaimablePayment);
    }
    let mut milestone = account
        .milestones
        .get(index)
        .ok_or(EscrowError::NoClaimablePayment)?;
    let amount = custody::payout_for(account.initial_deposit, milestone.percentage)?;

    let contractor = account.contractor.clone();
    custody::pay_out(e, account, &contractor, amount)?;

    milestone.is_paid = true;
    account.milestones.set(index, milestone);
    account.claim_index = index + 1;

    MilestoneClaimed {
        project_id: account.project_id.clone(),
        owner: account.owner.clone(),
        contractor,
        amount,
    }
    .publish(e);
    log!(e, "milestone {} claimed for {}", index, amount);
    Ok(amount)
}

pub fn peek_next_for_contractor(account: &EscrowAccount) -> Result<Milestone, EscrowError> {
    account
        .milestones
        .get(account.claim_index)
        .ok_or(EscrowError::NoMatchingPayment)
}

pub fn peek_next_for_owner(account: &EscrowAccount) -> Result<Milestone, EscrowError> {
    account
        .milestones
        .get(account.approval_index)
        .ok_or(EscrowError::NoMatchingPayment)
}
