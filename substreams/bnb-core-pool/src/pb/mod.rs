// @generated
pub mod subgraph {
    // @@protoc_insertion_point(attribute:subgraph.core_pool.v1)
    pub mod core_pool {
        pub mod v1 {
            include!("subgraph.core_pool.v1.rs");
            // @@protoc_insertion_point(subgraph.core_pool.v1)
        }
    }
}
