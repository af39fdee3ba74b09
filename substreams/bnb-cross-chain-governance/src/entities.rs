use subgraph_substreams::{ids, mantissa, prelude::*};

use crate::pb::subgraph::cross_chain_governance::v1::{
    FunctionRegistry, Governance, GovernanceRoute, Proposal,
};

subgraph_substreams::entity!(
    Governance => "Governance",
    Proposal => "Proposal",
    GovernanceRoute => "GovernanceRoute",
    FunctionRegistry => "FunctionRegistry",
);

pub const GOVERNANCE_ID: &str = "GOVERNANCE";

pub fn new_governance(executor: &[u8]) -> Governance {
    Governance {
        id: GOVERNANCE_ID.to_string(),
        address: ids::address_id(executor),
        guardian: ids::address_id(&ids::NULL_ADDRESS),
        src_chain_id: 0,
        max_daily_receive_limit_mantissa: mantissa::zero(),
        total_proposals: 0,
    }
}

pub fn load_governance<S: EntityStore>(store: &S, executor: &[u8]) -> Result<Governance, HandlerError> {
    Ok(get_or_create(store, GOVERNANCE_ID, |_| new_governance(executor))?.entity)
}

pub fn new_proposal(id: &str) -> Proposal {
    Proposal { id: id.to_string(), ..Default::default() }
}

pub fn route_id(route_type: i32) -> String {
    route_type.to_string()
}

pub fn new_governance_route(route_type: i32) -> GovernanceRoute {
    GovernanceRoute {
        id: route_id(route_type),
        route_type,
        timelock_address: ids::address_id(&ids::NULL_ADDRESS),
    }
}

pub fn function_registry_id(signature: &str) -> String {
    ids::to_hex(&ids::function_selector(signature))
}

pub fn new_function_registry(signature: &str) -> FunctionRegistry {
    FunctionRegistry { id: function_registry_id(signature), signature: signature.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_registry_id_is_selector() {
        assert_eq!(function_registry_id("transfer(address,uint256)"), "0xa9059cbb");
        assert_eq!(new_function_registry("transfer(address,uint256)").signature, "transfer(address,uint256)");
    }
}
