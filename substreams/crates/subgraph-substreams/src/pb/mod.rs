// @generated
pub mod subgraph {
    pub mod common {
        // @@protoc_insertion_point(attribute:subgraph.common.v1)
        pub mod v1 {
            include!("subgraph.common.v1.rs");
            // @@protoc_insertion_point(subgraph.common.v1)
        }
    }
}
