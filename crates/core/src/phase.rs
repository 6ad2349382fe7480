//! The election workflow phases.
//!
//! An election moves through six phases in a fixed order:
//! ```text
//! RegisteringVoters -> ProposalsRegistrationStarted
//!                   -> ProposalsRegistrationEnded
//!                   -> VotingSessionStarted
//!                   -> VotingSessionEnded
//!                   -> VotesTallied
//! ```
//! Every edge is one-way and triggered only by an explicit administrator
//! action. No phase may be skipped or revisited.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The current stage of the election lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    RegisteringVoters,
    ProposalsRegistrationStarted,
    ProposalsRegistrationEnded,
    VotingSessionStarted,
    VotingSessionEnded,
    VotesTallied,
}

impl Phase {
    /// The next phase in the workflow, or `None` from the terminal phase.
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::RegisteringVoters => Some(Phase::ProposalsRegistrationStarted),
            Phase::ProposalsRegistrationStarted => Some(Phase::ProposalsRegistrationEnded),
            Phase::ProposalsRegistrationEnded => Some(Phase::VotingSessionStarted),
            Phase::VotingSessionStarted => Some(Phase::VotingSessionEnded),
            Phase::VotingSessionEnded => Some(Phase::VotesTallied),
            Phase::VotesTallied => None,
        }
    }

    /// Whether this is the terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::VotesTallied)
    }

    /// Numeric index of the phase, 0 through 5 in workflow order.
    ///
    /// Collaborators that log or display phase-change notifications use
    /// this as a stable wire value.
    pub fn index(self) -> u8 {
        match self {
            Phase::RegisteringVoters => 0,
            Phase::ProposalsRegistrationStarted => 1,
            Phase::ProposalsRegistrationEnded => 2,
            Phase::VotingSessionStarted => 3,
            Phase::VotingSessionEnded => 4,
            Phase::VotesTallied => 5,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::RegisteringVoters
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::RegisteringVoters => "registering voters",
            Phase::ProposalsRegistrationStarted => "proposals registration started",
            Phase::ProposalsRegistrationEnded => "proposals registration ended",
            Phase::VotingSessionStarted => "voting session started",
            Phase::VotingSessionEnded => "voting session ended",
            Phase::VotesTallied => "votes tallied",
        };
        write!(f, "{name}")
    }
}
