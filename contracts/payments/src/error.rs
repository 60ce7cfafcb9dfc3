use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    Unauthorized = 1,
    InvalidPercentage = 2,
    ScheduleOverflow = 3,
    NoPendingApproval = 4,
    NoClaimablePayment = 5,
    NoMatchingPayment = 6,
    CompletionNotAuthorized = 7,
    DepositTooLarge = 8,
    IndexOutOfRange = 9,
    TransferFailed = 10,
    AccountTerminated = 11,
    NotInitialized = 12,
    AlreadyInitialized = 13,
    InvalidAmount = 14,
    InvalidContractor = 15,
    AlreadyCompleted = 16,
}
