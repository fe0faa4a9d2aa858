//! Proposal lifecycle: creation, ballots, tally and execution of passed outcomes.

mod proposals;
mod tally;
mod votes;

pub use proposals::ProposalBook;
