//! The workflow engine: phase gating, authorization, and the tally.
//!
//! [`Election`] owns the current [`Phase`] and the [`Registry`] for one
//! election. Every operation takes the caller identity explicitly and
//! runs its guards (authorization, then phase, then data integrity)
//! before any mutation, so a rejected call leaves the election untouched.
//!
//! Mutating operations take `&mut self`, which is exactly the
//! serialization the model requires: no two mutations on the same
//! election can interleave, and reads through `&self` observe a
//! consistent snapshot.

use crate::{Error, Event, Phase, Proposal, ProposalId, Registry, Voter, VoterId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A single election instance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Election {
    /// The administrator: the only identity allowed to register voters,
    /// drive phase transitions and run the tally.
    owner: VoterId,

    /// Current workflow phase.
    phase: Phase,

    /// Voter and proposal storage.
    registry: Registry,

    /// The winner, fixed by `tally_votes`. Zero until the tally runs.
    winning_proposal_id: ProposalId,

    /// Append-only notification log.
    events: Vec<Event>,
}

impl Election {
    /// Create a new election administered by `owner`, in the
    /// voter-registration phase.
    pub fn new(owner: impl Into<VoterId>) -> Self {
        Self {
            owner: owner.into(),
            phase: Phase::default(),
            registry: Registry::new(),
            winning_proposal_id: 0,
            events: Vec::new(),
        }
    }

    /// The administrator identity.
    pub fn owner(&self) -> &VoterId {
        &self.owner
    }

    /// The current workflow phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winning proposal identifier.
    ///
    /// Readable at any time but meaningful only once the phase is
    /// [`Phase::VotesTallied`]; before that it is zero.
    pub fn winning_proposal_id(&self) -> ProposalId {
        self.winning_proposal_id
    }

    /// The ordered notification log.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of submitted proposals.
    pub fn proposal_count(&self) -> usize {
        self.registry.proposal_count()
    }

    /// Read a voter's record. Read access requires a registered caller.
    ///
    /// An identity that was never registered yields a default record with
    /// `is_registered == false`.
    pub fn get_voter(&self, caller: &VoterId, voter: &VoterId) -> Result<Voter, Error> {
        self.require_voter(caller)?;
        Ok(self.registry.voter(voter).cloned().unwrap_or_default())
    }

    /// Read a proposal. Read access requires a registered caller.
    pub fn get_proposal(&self, caller: &VoterId, id: ProposalId) -> Result<&Proposal, Error> {
        self.require_voter(caller)?;
        self.registry.proposal(id)
    }

    /// Register a voter. Administrator only, voter-registration phase only.
    pub fn register_voter(&mut self, caller: &VoterId, voter: &VoterId) -> Result<(), Error> {
        self.require_owner(caller)?;
        self.require_phase(Phase::RegisteringVoters)?;
        self.registry.register_voter(voter)?;

        debug!(voter = %voter, "voter registered");
        self.events.push(Event::VoterRegistered {
            voter: voter.clone(),
        });

        Ok(())
    }

    /// Submit a proposal. Registered voters only, proposal phase only.
    ///
    /// Returns the new proposal's identifier, assigned densely from zero
    /// in submission order.
    pub fn submit_proposal(
        &mut self,
        caller: &VoterId,
        description: &str,
    ) -> Result<ProposalId, Error> {
        self.require_voter(caller)?;
        self.require_phase(Phase::ProposalsRegistrationStarted)?;
        let proposal_id = self.registry.submit_proposal(description)?;

        debug!(proposal_id, "proposal registered");
        self.events.push(Event::ProposalRegistered { proposal_id });

        Ok(proposal_id)
    }

    /// Cast the caller's vote for a proposal. Registered voters only,
    /// voting phase only, one vote per voter.
    pub fn cast_vote(&mut self, caller: &VoterId, proposal_id: ProposalId) -> Result<(), Error> {
        self.require_voter(caller)?;
        self.require_phase(Phase::VotingSessionStarted)?;

        // The registry re-checks has_voted; checked here first so
        // AlreadyVoted is reported before the proposal-range check.
        if self.registry.voter(caller).is_some_and(|v| v.has_voted) {
            return Err(Error::AlreadyVoted(caller.clone()));
        }

        self.registry.record_vote(caller, proposal_id)?;

        debug!(voter = %caller, proposal_id, "vote cast");
        self.events.push(Event::Voted {
            voter: caller.clone(),
            proposal_id,
        });

        Ok(())
    }

    /// Open the proposal-submission window.
    pub fn start_proposals_registering(&mut self, caller: &VoterId) -> Result<(), Error> {
        self.advance(caller, Phase::RegisteringVoters)
    }

    /// Close the proposal-submission window.
    pub fn end_proposals_registering(&mut self, caller: &VoterId) -> Result<(), Error> {
        self.advance(caller, Phase::ProposalsRegistrationStarted)
    }

    /// Open the voting window.
    pub fn start_voting_session(&mut self, caller: &VoterId) -> Result<(), Error> {
        self.advance(caller, Phase::ProposalsRegistrationEnded)
    }

    /// Close the voting window.
    pub fn end_voting_session(&mut self, caller: &VoterId) -> Result<(), Error> {
        self.advance(caller, Phase::VotingSessionStarted)
    }

    /// Tally the votes, fix the winner and move to the terminal phase.
    ///
    /// Single ascending scan; the first proposal to reach the maximum
    /// vote count wins, so a later proposal with an equal count never
    /// overrides an earlier leader. Calling this again once the election
    /// is tallied fails with `WrongPhase`.
    pub fn tally_votes(&mut self, caller: &VoterId) -> Result<ProposalId, Error> {
        self.require_owner(caller)?;
        self.require_phase(Phase::VotingSessionEnded)?;

        let mut winner = 0;
        let mut best = 0u64;
        for (id, proposal) in self.registry.proposals().iter().enumerate() {
            if proposal.vote_count > best {
                best = proposal.vote_count;
                winner = id;
            }
        }

        self.winning_proposal_id = winner;
        info!(winning_proposal_id = winner, "votes tallied");
        self.advance(caller, Phase::VotingSessionEnded)?;

        Ok(winner)
    }

    fn require_owner(&self, caller: &VoterId) -> Result<(), Error> {
        if caller != &self.owner {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    fn require_voter(&self, caller: &VoterId) -> Result<(), Error> {
        if !self.registry.is_registered(caller) {
            return Err(Error::NotAVoter);
        }
        Ok(())
    }

    fn require_phase(&self, expected: Phase) -> Result<(), Error> {
        if self.phase != expected {
            return Err(Error::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Advance from `from` to its successor. Administrator only.
    fn advance(&mut self, caller: &VoterId, from: Phase) -> Result<(), Error> {
        self.require_owner(caller)?;
        self.require_phase(from)?;

        let Some(to) = from.successor() else {
            // Unreachable through the public transitions; the terminal
            // phase has no successor and fails the phase gate above.
            return Err(Error::WrongPhase {
                expected: from,
                actual: self.phase,
            });
        };

        self.phase = to;
        info!(previous = %from, new = %to, "workflow status changed");
        self.events.push(Event::WorkflowStatusChange { previous: from, new: to });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> VoterId {
        "owner".to_string()
    }

    #[test]
    fn new_election_starts_registering_voters() {
        let election = Election::new(owner());

        assert_eq!(election.phase(), Phase::RegisteringVoters);
        assert_eq!(election.winning_proposal_id(), 0);
        assert!(election.events().is_empty());
        assert_eq!(election.owner(), &owner());
    }

    #[test]
    fn guards_run_before_any_mutation() {
        let mut election = Election::new(owner());
        election.register_voter(&owner(), &"alice".to_string()).unwrap();

        // Wrong phase: no proposal may be created, no event appended.
        let err = election
            .submit_proposal(&"alice".to_string(), "too early")
            .unwrap_err();
        assert!(matches!(err, Error::WrongPhase { .. }));
        assert_eq!(election.proposal_count(), 0);
        assert_eq!(election.events().len(), 1); // only the registration
    }

    #[test]
    fn owner_is_not_implicitly_a_voter() {
        let mut election = Election::new(owner());
        election.register_voter(&owner(), &"alice".to_string()).unwrap();
        election.start_proposals_registering(&owner()).unwrap();

        let err = election.submit_proposal(&owner(), "owner idea").unwrap_err();
        assert_eq!(err, Error::NotAVoter);
    }

    #[test]
    fn tally_with_no_proposals_defaults_to_zero() {
        let mut election = Election::new(owner());
        election.start_proposals_registering(&owner()).unwrap();
        election.end_proposals_registering(&owner()).unwrap();
        election.start_voting_session(&owner()).unwrap();
        election.end_voting_session(&owner()).unwrap();

        assert_eq!(election.tally_votes(&owner()).unwrap(), 0);
        assert_eq!(election.phase(), Phase::VotesTallied);
    }
}
