// @generated
pub mod subgraph {
    // @@protoc_insertion_point(attribute:subgraph.cross_chain_governance.v1)
    pub mod cross_chain_governance {
        pub mod v1 {
            include!("subgraph.cross_chain_governance.v1.rs");
            // @@protoc_insertion_point(subgraph.cross_chain_governance.v1)
        }
    }
}
