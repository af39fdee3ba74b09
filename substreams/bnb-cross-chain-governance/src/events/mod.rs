use substreams_ethereum::{pb::eth::v2::Log, Event};
use subgraph_substreams::{
    permissions::{self, PermissionChange},
    pb::subgraph::common::v1::PermissionStatus,
    prelude::*,
};

use crate::abi::{
    access_control_manager::events::{PermissionGranted, PermissionRevoked},
    omnichain_executor_owner::events::FunctionRegistryChanged,
    omnichain_governance_executor::events::{
        NewGuardian, ProposalCanceled, ProposalExecuted, ProposalQueued, ProposalReceived,
        SetMaxDailyReceiveLimit, SetSrcChainId, TimelockAdded,
    },
};

pub mod executor;
pub mod owner;

/// Every event the cross-chain governance subgraph handles.
pub enum EventType {
    ProposalReceived(ProposalReceived),
    ProposalQueued(ProposalQueued),
    ProposalExecuted(ProposalExecuted),
    ProposalCanceled(ProposalCanceled),
    SetMaxDailyReceiveLimit(SetMaxDailyReceiveLimit),
    NewGuardian(NewGuardian),
    TimelockAdded(TimelockAdded),
    SetSrcChainId(SetSrcChainId),
    FunctionRegistryChanged(FunctionRegistryChanged),
    PermissionGranted(PermissionGranted),
    PermissionRevoked(PermissionRevoked),
}

impl EventType {
    pub fn apply<S: EntityStore>(&self, store: &mut S, ctx: &EventContext) -> Result<(), HandlerError> {
        match self {
            EventType::ProposalReceived(e) => executor::handle_proposal_received(store, ctx, e),
            EventType::ProposalQueued(e) => executor::handle_proposal_queued(store, ctx, e),
            EventType::ProposalExecuted(e) => executor::handle_proposal_executed(store, ctx, e),
            EventType::ProposalCanceled(e) => executor::handle_proposal_canceled(store, ctx, e),
            EventType::SetMaxDailyReceiveLimit(e) => {
                executor::handle_set_max_daily_receive_limit(store, ctx, e)
            }
            EventType::NewGuardian(e) => executor::handle_new_guardian(store, ctx, e),
            EventType::TimelockAdded(e) => executor::handle_timelock_added(store, e),
            EventType::SetSrcChainId(e) => executor::handle_set_src_chain_id(store, ctx, e),
            EventType::FunctionRegistryChanged(e) => owner::handle_function_registry_changed(store, e),
            EventType::PermissionGranted(e) => permissions::apply(
                store,
                ctx,
                &PermissionChange {
                    status: PermissionStatus::Granted,
                    account: e.account.clone(),
                    contract: e.contract_address.clone(),
                    function_sig: e.function_sig.clone(),
                },
            ),
            EventType::PermissionRevoked(e) => permissions::apply(
                store,
                ctx,
                &PermissionChange {
                    status: PermissionStatus::Revoked,
                    account: e.account.clone(),
                    contract: e.contract_address.clone(),
                    function_sig: e.function_sig.clone(),
                },
            ),
        }
    }
}

pub fn decode_executor_event(event: &Log) -> Option<EventType> {
    [
        ProposalReceived::match_and_decode(event).map(EventType::ProposalReceived),
        ProposalQueued::match_and_decode(event).map(EventType::ProposalQueued),
        ProposalExecuted::match_and_decode(event).map(EventType::ProposalExecuted),
        ProposalCanceled::match_and_decode(event).map(EventType::ProposalCanceled),
        SetMaxDailyReceiveLimit::match_and_decode(event).map(EventType::SetMaxDailyReceiveLimit),
        NewGuardian::match_and_decode(event).map(EventType::NewGuardian),
        TimelockAdded::match_and_decode(event).map(EventType::TimelockAdded),
        SetSrcChainId::match_and_decode(event).map(EventType::SetSrcChainId),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

pub fn decode_owner_event(event: &Log) -> Option<EventType> {
    FunctionRegistryChanged::match_and_decode(event).map(EventType::FunctionRegistryChanged)
}

pub fn decode_access_control_event(event: &Log) -> Option<EventType> {
    [
        PermissionGranted::match_and_decode(event).map(EventType::PermissionGranted),
        PermissionRevoked::match_and_decode(event).map(EventType::PermissionRevoked),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}
