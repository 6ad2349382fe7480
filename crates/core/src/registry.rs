//! Voter and proposal storage.
//!
//! The registry holds the authoritative collections for one election and
//! enforces entity-level invariants: a voter registers at most once, a
//! proposal is never empty, proposal identifiers are dense and assigned
//! in submission order. Phase gating lives in [`crate::Election`], which
//! consults the current phase before delegating here.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A voter identifier (an opaque caller identity, e.g. an account address).
pub type VoterId = String;

/// A proposal identifier: a dense, zero-based index in submission order.
///
/// The ordering is load-bearing: it drives index-based lookup and the
/// first-reaches-max tie-break during tallying.
pub type ProposalId = usize;

/// A registered voter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Set exactly once at registration, never cleared.
    pub is_registered: bool,
    /// False until the voter casts a vote, then permanently true.
    pub has_voted: bool,
    /// The chosen proposal; meaningful only when `has_voted` is true.
    pub voted_proposal_id: ProposalId,
}

/// A submitted proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u64,
}

/// Storage for one election's voters and proposals.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Registry {
    voters: BTreeMap<VoterId, Voter>,
    proposals: Vec<Proposal>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new voter.
    pub fn register_voter(&mut self, voter: &VoterId) -> Result<(), Error> {
        if self.is_registered(voter) {
            return Err(Error::AlreadyRegistered(voter.clone()));
        }

        self.voters.insert(
            voter.clone(),
            Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            },
        );

        Ok(())
    }

    /// Append a new proposal, assigning the next sequential identifier.
    pub fn submit_proposal(&mut self, description: &str) -> Result<ProposalId, Error> {
        if description.trim().is_empty() {
            return Err(Error::EmptyProposal);
        }

        let id = self.proposals.len();
        self.proposals.push(Proposal {
            description: description.to_string(),
            vote_count: 0,
        });

        Ok(id)
    }

    /// Look up a voter.
    pub fn voter(&self, voter: &VoterId) -> Option<&Voter> {
        self.voters.get(voter)
    }

    /// Whether this identity is a registered voter.
    pub fn is_registered(&self, voter: &VoterId) -> bool {
        self.voters.get(voter).is_some_and(|v| v.is_registered)
    }

    /// Look up a proposal by identifier.
    pub fn proposal(&self, id: ProposalId) -> Result<&Proposal, Error> {
        self.proposals.get(id).ok_or(Error::ProposalNotFound(id))
    }

    /// All proposals in submission order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Number of submitted proposals.
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// Record a vote: increment the proposal's count and mark the voter.
    ///
    /// Re-checks registration and `has_voted` at the storage boundary even
    /// though [`crate::Election`] already gates both, so a future caller
    /// cannot double-count a vote.
    pub fn record_vote(&mut self, voter: &VoterId, proposal_id: ProposalId) -> Result<(), Error> {
        if proposal_id >= self.proposals.len() {
            return Err(Error::ProposalNotFound(proposal_id));
        }

        let entry = self
            .voters
            .get_mut(voter)
            .filter(|v| v.is_registered)
            .ok_or(Error::NotAVoter)?;

        if entry.has_voted {
            return Err(Error::AlreadyVoted(voter.clone()));
        }

        entry.has_voted = true;
        entry.voted_proposal_id = proposal_id;
        self.proposals[proposal_id].vote_count += 1;

        Ok(())
    }
}
