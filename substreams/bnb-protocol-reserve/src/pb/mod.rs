// @generated
pub mod subgraph {
    // @@protoc_insertion_point(attribute:subgraph.protocol_reserve.v1)
    pub mod protocol_reserve {
        pub mod v1 {
            include!("subgraph.protocol_reserve.v1.rs");
            // @@protoc_insertion_point(subgraph.protocol_reserve.v1)
        }
    }
}
