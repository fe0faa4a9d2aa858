use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

/// Coarse failure classes callers can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    StateConflict,
    Temporal,
    InvariantViolation,
    NotFound,
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, NearSchema, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
#[abi(borsh)]
pub enum GovernanceError {
    GroupNotFound,
    ProposalNotFound,
    NotAGroupMember,
    Unauthorized,
    AlreadyMember,
    NotAMember,
    AlreadyVoted,
    AlreadyExecuted,
    VotingClosed,
    VotingStillOpen,
    CreatorProtected,
    UnsupportedProposalType,
    InvalidInput(String),
}

impl GovernanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAGroupMember | Self::Unauthorized => ErrorKind::Authorization,
            Self::AlreadyMember | Self::NotAMember | Self::AlreadyVoted | Self::AlreadyExecuted => {
                ErrorKind::StateConflict
            }
            Self::VotingClosed | Self::VotingStillOpen => ErrorKind::Temporal,
            Self::CreatorProtected | Self::UnsupportedProposalType => {
                ErrorKind::InvariantViolation
            }
            Self::GroupNotFound | Self::ProposalNotFound => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

impl std::fmt::Display for GovernanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupNotFound => write!(f, "Group not found"),
            Self::ProposalNotFound => write!(f, "Proposal not found"),
            Self::NotAGroupMember => write!(f, "Not a group member"),
            Self::Unauthorized => write!(f, "Unauthorized to remove member"),
            Self::AlreadyMember => write!(f, "Already a member"),
            Self::NotAMember => write!(f, "Not a member"),
            Self::AlreadyVoted => write!(f, "Already voted"),
            Self::AlreadyExecuted => write!(f, "Proposal already executed"),
            Self::VotingClosed => write!(f, "Voting period ended"),
            Self::VotingStillOpen => write!(f, "Voting period has not ended"),
            Self::CreatorProtected => write!(f, "Cannot remove group creator"),
            Self::UnsupportedProposalType => write!(f, "Proposal type has no executor"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl FunctionError for GovernanceError {
    fn panic(&self) -> ! {
        env::panic_str(&self.to_string())
    }
}

#[macro_export]
macro_rules! invalid_input {
    ($msg:expr) => {
        $crate::errors::GovernanceError::InvalidInput($msg.into())
    };
}
