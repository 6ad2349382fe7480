//! scrutin-core: state machine for a single-election voting workflow.
//!
//! An administrator registers voters, opens a window for proposal
//! submission, closes it, opens a voting window, closes it, then tallies
//! the votes to determine a winner. This crate implements the two
//! components behind that workflow:
//! - [`Registry`]: the voter and proposal collections
//! - [`Election`]: the phase state machine that gates every operation
//!   and runs the tally
//!
//! Persistence, transport and caller authentication are collaborator
//! concerns; the caller identity is passed explicitly into every
//! operation.

mod election;
mod error;
mod event;
mod phase;
mod registry;

pub use election::Election;
pub use error::Error;
pub use event::Event;
pub use phase::Phase;
pub use registry::{Proposal, ProposalId, Registry, Voter, VoterId};
