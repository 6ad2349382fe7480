//! State-change notifications.
//!
//! Every successful mutating operation appends one event to the
//! election's log. Collaborators (front-ends, audit tooling) observe the
//! log as an ordered, append-only sequence correlated with the triggering
//! call.

use crate::{Phase, ProposalId, VoterId};
use serde::{Deserialize, Serialize};

/// A notification emitted by a successful mutating operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A voter was registered by the administrator.
    VoterRegistered { voter: VoterId },
    /// A proposal was submitted and assigned this identifier.
    ProposalRegistered { proposal_id: ProposalId },
    /// A voter cast their vote for this proposal.
    Voted {
        voter: VoterId,
        proposal_id: ProposalId,
    },
    /// The workflow advanced one phase.
    WorkflowStatusChange { previous: Phase, new: Phase },
}
