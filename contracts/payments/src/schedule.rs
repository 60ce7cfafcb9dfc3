use soroban_sdk::Vec;

use crate::error::EscrowError;
use crate::types::{EscrowAccount, Milestone, MAX_PERCENTAGE, MIN_PERCENTAGE, PERCENT_DENOMINATOR};

pub fn validate_percentage(percentage: u32) -> Result<(), EscrowError> {
    if !(MIN_PERCENTAGE..=MAX_PERCENTAGE).contains(&percentage) {
        return Err(EscrowError::InvalidPercentage);
    }
    Ok(())
}

pub fn total_percentage(milestones: &Vec<Milestone>) -> u32 {
    milestones.iter().map(|m| m.percentage).sum()
}

/// Append a milestone. The schedule must always total strictly less than 100%.
pub fn add_milestone(account: &mut EscrowAccount, percentage: u32) -> Result<u32, EscrowError> {
    validate_percentage(percentage)?;

    let total = total_percentage(&account.milestones) + percentage;
    if total as i128 >= PERCENT_DENOMINATOR {
        return Err(EscrowError::ScheduleOverflow);
    }

    account.milestones.push_back(Milestone::new(percentage));
    Ok(account.milestones.len())
}

pub fn get_milestone(account: &EscrowAccount, index: u32) -> Result<Milestone, EscrowError> {
    account
        .milestones
        .get(index)
        .ok_or(EscrowError::IndexOutOfRange)
}
