// @generated
pub mod subgraph {
    // @@protoc_insertion_point(attribute:subgraph.governance.v1)
    pub mod governance {
        pub mod v1 {
            include!("subgraph.governance.v1.rs");
            // @@protoc_insertion_point(subgraph.governance.v1)
        }
    }
}
