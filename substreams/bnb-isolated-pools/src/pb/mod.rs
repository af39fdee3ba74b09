// @generated
pub mod subgraph {
    // @@protoc_insertion_point(attribute:subgraph.isolated_pools.v1)
    pub mod isolated_pools {
        pub mod v1 {
            include!("subgraph.isolated_pools.v1.rs");
            // @@protoc_insertion_point(subgraph.isolated_pools.v1)
        }
    }
}
