use serde_json::{Map, Value};
use substreams_ethereum::pb::eth::v2::Log;
use subgraph_substreams::{
    pb::subgraph::common::v1::Permission, prelude::*, subgraph::snapshot_entities,
};

use crate::{
    events::{decode_access_control_event, decode_executor_event, decode_owner_event, EventType},
    params::Params,
    pb::subgraph::cross_chain_governance::v1::{
        FunctionRegistry, Governance, GovernanceRoute, Proposal,
    },
};

/// Governance on a destination chain: proposals relayed to the omnichain executor, the functions
/// its owner may call and the access control permissions of the chain.
pub struct CrossChainGovernance {
    params: Params,
}

impl CrossChainGovernance {
    pub fn from_params(params: &str) -> anyhow::Result<Self> {
        Ok(Self::new(Params::parse(params)?))
    }

    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Subgraph for CrossChainGovernance {
    type Event = EventType;

    const NAME: &'static str = "bnb-cross-chain-governance";

    fn decode<S: EntityStore>(&self, _store: &S, log: &Log) -> Option<EventType> {
        if log.address == self.params.executor {
            decode_executor_event(log)
        } else if log.address == self.params.executor_owner {
            decode_owner_event(log)
        } else if log.address == self.params.access_control_manager {
            decode_access_control_event(log)
        } else {
            None
        }
    }

    fn handle<S: EntityStore>(
        &self,
        store: &mut S,
        ctx: &EventContext,
        event: EventType,
    ) -> Result<(), HandlerError> {
        event.apply(store, ctx)
    }

    fn snapshot(&self, store: &MemoryStore) -> Result<Value, HandlerError> {
        let mut out = Map::new();
        snapshot_entities::<Governance>(store, &mut out)?;
        snapshot_entities::<Proposal>(store, &mut out)?;
        snapshot_entities::<GovernanceRoute>(store, &mut out)?;
        snapshot_entities::<FunctionRegistry>(store, &mut out)?;
        snapshot_entities::<Permission>(store, &mut out)?;
        Ok(Value::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::function_registry_id;
    use ethabi::Token;
    use subgraph_substreams::{
        pb::subgraph::common::v1::PermissionStatus,
        permissions::permission_id,
        testing::{address, address_token, block, event_log, uint_token},
    };

    const EXECUTOR: u8 = 0xd7;
    const OWNER: u8 = 0x87;
    const ACM: u8 = 0x23;

    fn cross_chain_governance() -> CrossChainGovernance {
        CrossChainGovernance::new(Params {
            executor: address(EXECUTOR),
            executor_owner: address(OWNER),
            access_control_manager: address(ACM),
        })
    }

    fn registry_changed(signature: &str, active: bool) -> Log {
        event_log(
            &address(OWNER),
            "FunctionRegistryChanged(string,bool)",
            vec![],
            vec![Token::String(signature.to_string()), Token::Bool(active)],
        )
    }

    fn permission(signature: &str) -> Log {
        event_log(
            &address(ACM),
            signature,
            vec![],
            vec![
                address_token(&address(OWNER)),
                address_token(&address(EXECUTOR)),
                Token::String("setSrcChainId(uint16)".to_string()),
            ],
        )
    }

    #[test]
    fn test_block_replay() {
        let subgraph = cross_chain_governance();
        let mut store = MemoryStore::new();

        let logs = vec![
            event_log(
                &address(EXECUTOR),
                "ProposalReceived(uint256,address[],uint256[],string[],bytes[],uint8)",
                vec![uint_token("1")],
                vec![
                    Token::Array(vec![address_token(&address(0x30))]),
                    Token::Array(vec![uint_token("0")]),
                    Token::Array(vec![Token::String("pause()".to_string())]),
                    Token::Array(vec![Token::Bytes(Vec::new())]),
                    uint_token("0"),
                ],
            ),
            event_log(
                &address(EXECUTOR),
                "ProposalQueued(uint256,uint256)",
                vec![uint_token("1")],
                vec![uint_token("1700000000")],
            ),
            registry_changed("setSrcChainId(uint16)", true),
            registry_changed("pause()", true),
            registry_changed("pause()", false),
            permission("PermissionGranted(address,address,string)"),
            permission("PermissionRevoked(address,address,string)"),
            permission("PermissionRevoked(address,address,string)"),
        ];
        let report = process_block(&subgraph, &mut store, &block(20, logs));
        assert_eq!(report, BlockReport { block_number: 20, handled: 8, failed: 0 });

        let proposal: Proposal = load(&store, "1").unwrap();
        assert!(proposal.queued);
        assert_eq!(proposal.signatures, vec!["pause()"]);

        assert_eq!(store.count::<FunctionRegistry>(), 1);
        assert!(store.has::<FunctionRegistry>(&function_registry_id("setSrcChainId(uint16)")));

        assert_eq!(store.count::<Permission>(), 1);
        let permission: Permission =
            load(&store, &permission_id(&address(OWNER), &address(EXECUTOR), "setSrcChainId(uint16)")).unwrap();
        assert_eq!(permission.status, PermissionStatus::Revoked as i32);
        assert_eq!(permission.updated_at, subgraph_substreams::ids::to_hex(&[8; 32]));

        let snapshot = subgraph.snapshot(&store).unwrap();
        assert_eq!(snapshot["Governance"]["GOVERNANCE"]["total_proposals"], 1);
    }

    #[test]
    fn test_events_from_other_contracts_are_ignored() {
        let subgraph = cross_chain_governance();
        let mut store = MemoryStore::new();

        let mut log = registry_changed("pause()", true);
        log.address = address(0x01);
        let report = process_block(&subgraph, &mut store, &block(1, vec![log]));

        assert_eq!(report.handled, 0);
        assert!(store.is_empty());
    }
}
