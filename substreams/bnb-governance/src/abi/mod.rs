#![allow(clippy::all)]

pub mod access_control_manager;
pub mod governor_bravo;
pub mod omnichain_proposal_sender;
pub mod xvs;
pub mod xvs_vault;
