#![allow(clippy::all)]

pub mod access_control_manager;
pub mod omnichain_executor_owner;
pub mod omnichain_governance_executor;
