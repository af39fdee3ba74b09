use substreams_ethereum::{pb::eth::v2::Log, Event};
use subgraph_substreams::{
    permissions::{self, PermissionChange},
    pb::subgraph::common::v1::PermissionStatus,
    prelude::*,
};

use crate::{
    abi::{
        access_control_manager::events::{PermissionGranted, PermissionRevoked},
        governor_bravo::events::{
            NewAdmin, NewGuardian, NewImplementation, ProposalCanceled, ProposalCreated,
            ProposalExecuted, ProposalQueued, VoteCast,
        },
        omnichain_proposal_sender::events::{
            ClearPayload, ExecuteRemoteProposal, SetMaxDailyLimit, SetTrustedRemoteAddress,
            StorePayload,
        },
        xvs::events::Transfer,
        xvs_vault::events::{DelegateChangedV2, DelegateVotesChangedV2, Deposit, RequestedWithdrawal},
    },
    params::Params,
};

pub mod governor;
pub mod omnichain;
pub mod token;
pub mod vault;

/// Every event the governance subgraph handles.
pub enum EventType {
    ProposalCreated(ProposalCreated),
    ProposalQueued(ProposalQueued),
    ProposalExecuted(ProposalExecuted),
    ProposalCanceled(ProposalCanceled),
    VoteCast(VoteCast),
    NewGuardian(NewGuardian),
    NewAdmin(NewAdmin),
    NewImplementation(NewImplementation),
    Deposit(Deposit),
    RequestedWithdrawal(RequestedWithdrawal),
    DelegateChanged(DelegateChangedV2),
    DelegateVotesChanged(DelegateVotesChangedV2),
    Transfer(Transfer),
    ExecuteRemoteProposal(ExecuteRemoteProposal),
    StorePayload(StorePayload),
    ClearPayload(ClearPayload),
    SetTrustedRemoteAddress(SetTrustedRemoteAddress),
    SetMaxDailyLimit(SetMaxDailyLimit),
    PermissionGranted(PermissionGranted),
    PermissionRevoked(PermissionRevoked),
}

impl EventType {
    pub fn apply<S: EntityStore>(
        &self,
        store: &mut S,
        params: &Params,
        ctx: &EventContext,
    ) -> Result<(), HandlerError> {
        match self {
            EventType::ProposalCreated(e) => governor::handle_proposal_created(store, ctx, e),
            EventType::ProposalQueued(e) => governor::handle_proposal_queued(store, ctx, e),
            EventType::ProposalExecuted(e) => governor::handle_proposal_executed(store, ctx, e),
            EventType::ProposalCanceled(e) => governor::handle_proposal_canceled(store, ctx, e),
            EventType::VoteCast(e) => governor::handle_vote_cast(store, ctx, e),
            EventType::NewGuardian(e) => governor::handle_new_guardian(store, e),
            EventType::NewAdmin(e) => governor::handle_new_admin(store, e),
            EventType::NewImplementation(e) => governor::handle_new_implementation(store, e),
            EventType::Deposit(e) => vault::handle_deposit(store, &params.xvs, e),
            EventType::RequestedWithdrawal(e) => {
                vault::handle_requested_withdrawal(store, &params.xvs, e)
            }
            EventType::DelegateChanged(e) => vault::handle_delegate_changed(store, e),
            EventType::DelegateVotesChanged(e) => vault::handle_delegate_votes_changed(store, e),
            EventType::Transfer(e) => token::handle_transfer(store, e),
            EventType::ExecuteRemoteProposal(e) => {
                omnichain::handle_execute_remote_proposal(store, ctx, e)
            }
            EventType::StorePayload(e) => omnichain::handle_store_payload(store, ctx, e),
            EventType::ClearPayload(e) => omnichain::handle_clear_payload(store, ctx, e),
            EventType::SetTrustedRemoteAddress(e) => {
                omnichain::handle_set_trusted_remote_address(store, e)
            }
            EventType::SetMaxDailyLimit(e) => omnichain::handle_set_max_daily_limit(store, e),
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

pub fn decode_governor_event(event: &Log) -> Option<EventType> {
    [
        ProposalCreated::match_and_decode(event).map(EventType::ProposalCreated),
        ProposalQueued::match_and_decode(event).map(EventType::ProposalQueued),
        ProposalExecuted::match_and_decode(event).map(EventType::ProposalExecuted),
        ProposalCanceled::match_and_decode(event).map(EventType::ProposalCanceled),
        VoteCast::match_and_decode(event).map(EventType::VoteCast),
        NewGuardian::match_and_decode(event).map(EventType::NewGuardian),
        NewAdmin::match_and_decode(event).map(EventType::NewAdmin),
        NewImplementation::match_and_decode(event).map(EventType::NewImplementation),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

pub fn decode_vault_event(event: &Log) -> Option<EventType> {
    [
        Deposit::match_and_decode(event).map(EventType::Deposit),
        RequestedWithdrawal::match_and_decode(event).map(EventType::RequestedWithdrawal),
        DelegateChangedV2::match_and_decode(event).map(EventType::DelegateChanged),
        DelegateVotesChangedV2::match_and_decode(event).map(EventType::DelegateVotesChanged),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

pub fn decode_token_event(event: &Log) -> Option<EventType> {
    Transfer::match_and_decode(event).map(EventType::Transfer)
}

pub fn decode_sender_event(event: &Log) -> Option<EventType> {
    [
        ExecuteRemoteProposal::match_and_decode(event).map(EventType::ExecuteRemoteProposal),
        StorePayload::match_and_decode(event).map(EventType::StorePayload),
        ClearPayload::match_and_decode(event).map(EventType::ClearPayload),
        SetTrustedRemoteAddress::match_and_decode(event).map(EventType::SetTrustedRemoteAddress),
        SetMaxDailyLimit::match_and_decode(event).map(EventType::SetMaxDailyLimit),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

pub fn decode_access_control_event(event: &Log) -> Option<EventType> {
    [
        PermissionGranted::match_and_decode(event).map(EventType::PermissionGranted),
        PermissionRevoked::match_and_decode(event).map(EventType::PermissionRevoked),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}
