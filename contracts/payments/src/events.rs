use soroban_sdk::{contractevent, Address, String};

#[contractevent]
#[derive(Clone)]
pub struct EscrowFunded {
    pub project_id: String,
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone)]
pub struct MilestoneApproved {
    pub project_id: String,
    pub contractor: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone)]
pub struct MilestoneClaimed {
    pub project_id: String,
    pub owner: Address,
    pub contractor: Address,
    pub amount: i128,
}

/// Owner signed off. `amount` is the balance remaining when the owner signed off.
#[contractevent]
#[derive(Clone)]
pub struct ProjectCompleted {
    pub project_id: String,
    pub contractor: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone)]
pub struct ProjectClosed {
    pub project_id: String,
    pub owner: Address,
}
