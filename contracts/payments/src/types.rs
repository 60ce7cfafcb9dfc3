use soroban_sdk::{contracttype, Address, String, Vec};

/// Percentages are whole numbers out of this denominator.
pub const PERCENT_DENOMINATOR: i128 = 100;
pub const MIN_PERCENTAGE: u32 = 1;
pub const MAX_PERCENTAGE: u32 = 99;

/// Largest balance the escrow will hold. Keeps `amount * MAX_PERCENTAGE` inside i128.
pub const MAX_DEPOSIT: i128 = i128::MAX / PERCENT_DENOMINATOR;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub percentage: u32,
    pub is_approved: bool,
    pub is_paid: bool,
}

impl Milestone {
    pub fn new(percentage: u32) -> Self {
        Milestone {
            percentage,
            is_approved: false,
            is_paid: false,
        }
    }
}

/// Everything the escrow knows about its project, loaded and stored as one value.
#[contracttype]
#[derive(Clone, Debug)]
pub struct EscrowAccount {
    pub owner: Address,
    pub contractor: Address,
    pub project_id: String,
    pub token: Address,
    pub milestones: Vec<Milestone>,
    pub approval_index: u32,
    pub claim_index: u32,
    pub initial_deposit: i128,
    pub current_balance: i128,
    pub owner_completed: bool,
    pub contractor_completed: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    Active,
    Terminated,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Lifecycle,
    Account,
}
