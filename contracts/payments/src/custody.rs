use soroban_sdk::{log, token, Address, Env};

use crate::error::EscrowError;
use crate::events::{EscrowFunded, ProjectClosed, ProjectCompleted};
use crate::storage;
use crate::types::{EscrowAccount, MAX_DEPOSIT, PERCENT_DENOMINATOR};

/// Payout for a milestone, always computed against the initial deposit so the
/// amount does not depend on what has already been paid.
pub fn payout_for(initial_deposit: i128, percentage: u32) -> Result<i128, EscrowError> {
    initial_deposit
        .checked_mul(percentage as i128)
        .map(|scaled| scaled / PERCENT_DENOMINATOR)
        .ok_or(EscrowError::DepositTooLarge)
}

pub fn validate_deposit(amount: i128) -> Result<(), EscrowError> {
    if amount < 0 {
        return Err(EscrowError::InvalidAmount);
    }
    if amount > MAX_DEPOSIT {
        return Err(EscrowError::DepositTooLarge);
    }
    Ok(())
}

fn safe_transfer(
    e: &Env,
    token_addr: &Address,
    from: &Address,
    to: &Address,
    amount: &i128,
) -> Result<(), EscrowError> {
    let client = token::Client::new(e, token_addr);
    match client.try_transfer(from, to, amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(EscrowError::TransferFailed),
    }
}

/// Pull `amount` from `from` into contract custody.
pub fn pull_deposit(
    e: &Env,
    token_addr: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), EscrowError> {
    if amount == 0 {
        return Ok(());
    }
    safe_transfer(e, token_addr, from, &e.current_contract_address(), &amount)
}

/// Send `amount` out of custody. The tracked balance only moves after the
/// token confirms the transfer.
pub fn pay_out(
    e: &Env,
    account: &mut EscrowAccount,
    to: &Address,
    amount: i128,
) -> Result<(), EscrowError> {
    if amount > account.current_balance {
        return Err(EscrowError::TransferFailed);
    }
    if amount > 0 {
        safe_transfer(e, &account.token, &e.current_contract_address(), to, &amount)?;
    }
    account.current_balance -= amount;
    Ok(())
}

pub fn custody_balance(e: &Env, token_addr: &Address) -> i128 {
    token::Client::new(e, token_addr).balance(&e.current_contract_address())
}

pub fn top_up(e: &Env, account: &mut EscrowAccount, amount: i128) -> Result<i128, EscrowError> {
    if account.owner_completed {
        return Err(EscrowError::AlreadyCompleted);
    }
    if amount <= 0 {
        return Err(EscrowError::InvalidAmount);
    }
    let new_balance = account
        .current_balance
        .checked_add(amount)
        .ok_or(EscrowError::DepositTooLarge)?;
    validate_deposit(new_balance)?;

    pull_deposit(e, &account.token, &account.owner, amount)?;
    account.current_balance = new_balance;

    EscrowFunded {
        project_id: account.project_id.clone(),
        from: account.owner.clone(),
        amount,
    }
    .publish(e);
    Ok(new_balance)
}

/// Owner sign-off. Announces the balance remaining at that moment.
pub fn complete_for_owner(e: &Env, account: &mut EscrowAccount) -> Result<i128, EscrowError> {
    if account.owner_completed {
        return Err(EscrowError::AlreadyCompleted);
    }
    account.owner_completed = true;

    ProjectCompleted {
        project_id: account.project_id.clone(),
        contractor: account.contractor.clone(),
        amount: account.current_balance,
    }
    .publish(e);
    log!(e, "owner completed, {} left for contractor", account.current_balance);
    Ok(account.current_balance)
}

/// Contractor sign-off: pay out everything left and terminate the escrow.
pub fn close_for_contractor(e: &Env, account: &mut EscrowAccount) -> Result<i128, EscrowError> {
    if !account.owner_completed {
        return Err(EscrowError::CompletionNotAuthorized);
    }

    let remaining = account.current_balance;
    let contractor = account.contractor.clone();
    pay_out(e, account, &contractor, remaining)?;
    account.contractor_completed = true;

    ProjectClosed {
        project_id: account.project_id.clone(),
        owner: account.owner.clone(),
    }
    .publish(e);

    terminate(e, account);
    Ok(remaining)
}

/// Runs exactly once, on the transition to `Terminated`. Anything still held
/// beyond the tracked balance goes back to the owner. That return is best
/// effort: untracked tokens never block the contractor's settlement.
fn terminate(e: &Env, account: &EscrowAccount) {
    let residual = custody_balance(e, &account.token);
    if residual > 0 {
        let returned = safe_transfer(
            e,
            &account.token,
            &e.current_contract_address(),
            &account.owner,
            &residual,
        );
        if returned.is_err() {
            log!(e, "residual {} could not be returned to owner", residual);
        }
    }
    storage::erase_account(e);
    log!(e, "escrow terminated, residual {}", residual);
}
