use serde_json::{Map, Value};
use substreams_ethereum::pb::eth::v2::Log;
use subgraph_substreams::{
    pb::subgraph::common::v1::Permission, prelude::*, subgraph::snapshot_entities,
};

use crate::{
    events::{
        decode_access_control_event, decode_governor_event, decode_sender_event,
        decode_token_event, decode_vault_event, EventType,
    },
    params::Params,
    pb::subgraph::governance::v1::{
        DestinationChain, Delegate, Governance, Proposal, RemoteProposal, TokenHolder, Vote,
    },
};

/// Proposals, votes and delegation on the governance chain, plus the omnichain proposal sender
/// and access control permissions. Every contract has a static address.
pub struct GovernanceSubgraph {
    params: Params,
}

impl GovernanceSubgraph {
    pub fn from_params(params: &str) -> anyhow::Result<Self> {
        Ok(Self::new(Params::parse(params)?))
    }

    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Subgraph for GovernanceSubgraph {
    type Event = EventType;

    const NAME: &'static str = "bnb-governance";

    fn decode<S: EntityStore>(&self, _store: &S, log: &Log) -> Option<EventType> {
        let params = &self.params;
        if log.address == params.governor_bravo {
            decode_governor_event(log)
        } else if log.address == params.xvs_vault {
            decode_vault_event(log)
        } else if log.address == params.xvs {
            decode_token_event(log)
        } else if log.address == params.omnichain_proposal_sender {
            decode_sender_event(log)
        } else if log.address == params.access_control_manager {
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
        event.apply(store, &self.params, ctx)
    }

    fn snapshot(&self, store: &MemoryStore) -> Result<Value, HandlerError> {
        let mut out = Map::new();
        snapshot_entities::<Governance>(store, &mut out)?;
        snapshot_entities::<Proposal>(store, &mut out)?;
        snapshot_entities::<Vote>(store, &mut out)?;
        snapshot_entities::<Delegate>(store, &mut out)?;
        snapshot_entities::<TokenHolder>(store, &mut out)?;
        snapshot_entities::<RemoteProposal>(store, &mut out)?;
        snapshot_entities::<DestinationChain>(store, &mut out)?;
        snapshot_entities::<Permission>(store, &mut out)?;
        Ok(Value::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{vote_id, GOVERNANCE_ID};
    use ethabi::Token;
    use subgraph_substreams::{
        ids,
        pb::subgraph::common::v1::PermissionStatus,
        permissions::permission_id,
        testing::{address, address_token, block, event_log, uint_token},
    };

    const GOVERNOR: u8 = 0x2d;
    const VAULT: u8 = 0x05;
    const XVS: u8 = 0xcf;
    const SENDER: u8 = 0x36;
    const ACM: u8 = 0x47;

    fn governance_subgraph() -> GovernanceSubgraph {
        GovernanceSubgraph::new(Params {
            governor_bravo: address(GOVERNOR),
            xvs_vault: address(VAULT),
            xvs: address(XVS),
            omnichain_proposal_sender: address(SENDER),
            access_control_manager: address(ACM),
        })
    }

    fn proposal_created(id: &str) -> Log {
        event_log(
            &address(GOVERNOR),
            "ProposalCreated(uint256,address,address[],uint256[],string[],bytes[],uint256,uint256,string,uint8)",
            vec![],
            vec![
                uint_token(id),
                address_token(&address(1)),
                Token::Array(vec![address_token(&address(0x30))]),
                Token::Array(vec![uint_token("0")]),
                Token::Array(vec![Token::String("_setPendingAdmin(address)".to_string())]),
                Token::Array(vec![Token::Bytes(vec![0xab; 32])]),
                uint_token("100"),
                uint_token("200"),
                Token::String("# Upgrade".to_string()),
                uint_token("0"),
            ],
        )
    }

    #[test]
    fn test_from_params() {
        let input = format!(
            "governor_bravo=0x{}&xvs_vault=0x{}&xvs=0x{}&omnichain_proposal_sender=0x{}&access_control_manager=0x{}",
            hex::encode(address(GOVERNOR)),
            hex::encode(address(VAULT)),
            hex::encode(address(XVS)),
            hex::encode(address(SENDER)),
            hex::encode(address(ACM)),
        );
        let subgraph = GovernanceSubgraph::from_params(&input).unwrap();
        assert_eq!(subgraph.params.xvs, address(XVS));
    }

    #[test]
    fn test_block_replay() {
        let subgraph = governance_subgraph();
        let mut store = MemoryStore::new();

        let logs = vec![
            proposal_created("42"),
            event_log(
                &address(GOVERNOR),
                "VoteCast(address,uint256,uint8,uint256,string)",
                vec![address_token(&address(2))],
                vec![uint_token("42"), uint_token("1"), uint_token("600"), Token::String("yes".to_string())],
            ),
            event_log(&address(GOVERNOR), "ProposalExecuted(uint256)", vec![], vec![uint_token("42")]),
            event_log(
                &address(VAULT),
                "DelegateVotesChangedV2(address,uint256,uint256)",
                vec![address_token(&address(2))],
                vec![uint_token("0"), uint_token("600")],
            ),
            event_log(
                &address(XVS),
                "Transfer(address,address,uint256)",
                vec![address_token(&address(0)), address_token(&address(3))],
                vec![uint_token("1000")],
            ),
            event_log(
                &address(ACM),
                "PermissionGranted(address,address,string)",
                vec![],
                vec![
                    address_token(&address(4)),
                    address_token(&address(5)),
                    Token::String("setCollateralFactor(address,uint256,uint256)".to_string()),
                ],
            ),
            // a Transfer emitted by another token is ignored
            event_log(
                &address(0x99),
                "Transfer(address,address,uint256)",
                vec![address_token(&address(0)), address_token(&address(3))],
                vec![uint_token("1")],
            ),
        ];
        let report = process_block(&subgraph, &mut store, &block(10, logs));
        assert_eq!(report, BlockReport { block_number: 10, handled: 6, failed: 0 });

        let governance: Governance = load(&store, GOVERNANCE_ID).unwrap();
        assert_eq!(governance.total_proposals, 1);
        assert_eq!(governance.total_delegates, 1);
        assert_eq!(governance.total_token_holders, 1);

        let proposal: Proposal = load(&store, "42").unwrap();
        assert!(proposal.executed);
        assert_eq!(proposal.for_votes_mantissa, "600");
        assert_eq!(proposal.signatures, vec!["_setPendingAdmin(address)"]);
        assert!(store.has::<Vote>(&vote_id(&address(2), 42)));

        let holder: TokenHolder = load(&store, &ids::address_id(&address(3))).unwrap();
        assert_eq!(holder.balance_mantissa, "1000");

        let permission: Permission = load(
            &store,
            &permission_id(&address(4), &address(5), "setCollateralFactor(address,uint256,uint256)"),
        )
        .unwrap();
        assert_eq!(permission.status, PermissionStatus::Granted as i32);

        let snapshot = subgraph.snapshot(&store).unwrap();
        assert_eq!(snapshot["Proposal"]["42"]["executed"], true);
    }

    #[test]
    fn test_vote_on_unknown_proposal_fails() {
        let subgraph = governance_subgraph();
        let mut store = MemoryStore::new();

        let logs = vec![event_log(
            &address(GOVERNOR),
            "VoteCast(address,uint256,uint8,uint256,string)",
            vec![address_token(&address(2))],
            vec![uint_token("1"), uint_token("1"), uint_token("1"), Token::String(String::new())],
        )];
        let report = process_block(&subgraph, &mut store, &block(1, logs));

        assert_eq!(report.failed, 1);
        assert!(store.is_empty());
    }
}
