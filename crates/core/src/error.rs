//! Error types for scrutin-core.

use thiserror::Error;

use crate::{Phase, ProposalId, VoterId};

/// Core errors.
///
/// Every failure is a synchronous precondition violation surfaced to the
/// caller before any mutation. The core never retries; resubmitting a
/// corrected call is the caller's decision.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller is not the election administrator.
    #[error("caller is not the administrator")]
    NotOwner,

    /// Caller is not a registered voter.
    #[error("caller is not a registered voter")]
    NotAVoter,

    /// The operation is not allowed in the current phase.
    #[error("operation requires phase '{expected}', but election is in phase '{actual}'")]
    WrongPhase { expected: Phase, actual: Phase },

    /// Voter is already registered.
    #[error("voter already registered: {0}")]
    AlreadyRegistered(VoterId),

    /// Voter has already cast their vote.
    #[error("voter has already voted: {0}")]
    AlreadyVoted(VoterId),

    /// Proposal description is empty.
    #[error("proposal description is empty")]
    EmptyProposal,

    /// No proposal exists with this identifier.
    #[error("proposal not found: {0}")]
    ProposalNotFound(ProposalId),
}
