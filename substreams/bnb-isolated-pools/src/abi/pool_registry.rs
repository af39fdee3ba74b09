const INTERNAL_ERR: &'static str = "`ethabi_derive` internal error";
/// Contract's functions.
#[allow(dead_code, unused_imports, unused_variables)]
pub mod functions {
    use super::INTERNAL_ERR;
}
/// Contract's events.
#[allow(dead_code, unused_imports, unused_variables)]
pub mod events {
    use super::INTERNAL_ERR;
    #[derive(Debug, Clone, PartialEq)]
    pub struct MarketAdded {
        pub comptroller: Vec<u8>,
        pub v_token_address: Vec<u8>,
    }
    impl MarketAdded {
        const TOPIC_ID: [u8; 32] = [
            119u8,
            114u8,
            200u8,
            94u8,
            104u8,
            222u8,
            189u8,
            247u8,
            79u8,
            173u8,
            135u8,
            131u8,
            78u8,
            44u8,
            192u8,
            95u8,
            167u8,
            99u8,
            231u8,
            79u8,
            175u8,
            20u8,
            222u8,
            112u8,
            150u8,
            218u8,
            48u8,
            82u8,
            144u8,
            101u8,
            17u8,
            66u8,
        ];
        pub fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            if log.topics.len() != 3usize {
                return false;
            }
            if log.data.len() != 0usize {
                return false;
            }
            return log.topics.get(0).expect("bounds already checked").as_ref()
                == Self::TOPIC_ID;
        }
        pub fn decode(
            log: &substreams_ethereum::pb::eth::v2::Log,
        ) -> Result<Self, String> {
            Ok(Self {
                comptroller: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[1usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'comptroller' from topic of type 'address': {:?}",
                            e
                        )
                    })?
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_address()
                    .expect(INTERNAL_ERR)
                    .as_bytes()
                    .to_vec(),
                v_token_address: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[2usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'v_token_address' from topic of type 'address': {:?}",
                            e
                        )
                    })?
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_address()
                    .expect(INTERNAL_ERR)
                    .as_bytes()
                    .to_vec(),
            })
        }
    }
    impl substreams_ethereum::Event for MarketAdded {
        const NAME: &'static str = "MarketAdded";
        fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            Self::match_log(log)
        }
        fn decode(log: &substreams_ethereum::pb::eth::v2::Log) -> Result<Self, String> {
            Self::decode(log)
        }
    }
    #[derive(Debug, Clone, PartialEq)]
    pub struct PoolMetadataUpdated {
        pub comptroller: Vec<u8>,
        pub old_metadata: (String, String, String),
        pub new_metadata: (String, String, String),
    }
    impl PoolMetadataUpdated {
        const TOPIC_ID: [u8; 32] = [
            143u8,
            145u8,
            243u8,
            181u8,
            210u8,
            11u8,
            97u8,
            116u8,
            78u8,
            213u8,
            145u8,
            196u8,
            51u8,
            70u8,
            212u8,
            81u8,
            78u8,
            229u8,
            194u8,
            255u8,
            206u8,
            213u8,
            252u8,
            55u8,
            149u8,
            187u8,
            19u8,
            198u8,
            249u8,
            81u8,
            129u8,
            71u8,
        ];
        pub fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            if log.topics.len() != 2usize {
                return false;
            }
            if log.data.len() < 384usize {
                return false;
            }
            return log.topics.get(0).expect("bounds already checked").as_ref()
                == Self::TOPIC_ID;
        }
        pub fn decode(
            log: &substreams_ethereum::pb::eth::v2::Log,
        ) -> Result<Self, String> {
            let mut values = ethabi::decode(
                    &[
                        ethabi::ParamType::Tuple(
                            vec![
                                ethabi::ParamType::String, ethabi::ParamType::String,
                                ethabi::ParamType::String
                            ],
                        ),
                        ethabi::ParamType::Tuple(
                            vec![
                                ethabi::ParamType::String, ethabi::ParamType::String,
                                ethabi::ParamType::String
                            ],
                        ),
                    ],
                    log.data.as_ref(),
                )
                .map_err(|e| format!("unable to decode log.data: {:?}", e))?;
            values.reverse();
            Ok(Self {
                comptroller: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[1usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'comptroller' from topic of type 'address': {:?}",
                            e
                        )
                    })?
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_address()
                    .expect(INTERNAL_ERR)
                    .as_bytes()
                    .to_vec(),
                old_metadata: {
                    let tuple_elements = values
                        .pop()
                        .expect(INTERNAL_ERR)
                        .into_tuple()
                        .expect(INTERNAL_ERR);
                    (
                        tuple_elements[0usize]
                            .clone()
                            .into_string()
                            .expect(INTERNAL_ERR),
                        tuple_elements[1usize]
                            .clone()
                            .into_string()
                            .expect(INTERNAL_ERR),
                        tuple_elements[2usize].clone().into_string().expect(INTERNAL_ERR),
                    )
                },
                new_metadata: {
                    let tuple_elements = values
                        .pop()
                        .expect(INTERNAL_ERR)
                        .into_tuple()
                        .expect(INTERNAL_ERR);
                    (
                        tuple_elements[0usize]
                            .clone()
                            .into_string()
                            .expect(INTERNAL_ERR),
                        tuple_elements[1usize]
                            .clone()
                            .into_string()
                            .expect(INTERNAL_ERR),
                        tuple_elements[2usize].clone().into_string().expect(INTERNAL_ERR),
                    )
                },
            })
        }
    }
    impl substreams_ethereum::Event for PoolMetadataUpdated {
        const NAME: &'static str = "PoolMetadataUpdated";
        fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            Self::match_log(log)
        }
        fn decode(log: &substreams_ethereum::pb::eth::v2::Log) -> Result<Self, String> {
            Self::decode(log)
        }
    }
    #[derive(Debug, Clone, PartialEq)]
    pub struct PoolNameSet {
        pub comptroller: Vec<u8>,
        pub old_name: String,
        pub new_name: String,
    }
    impl PoolNameSet {
        const TOPIC_ID: [u8; 32] = [
            160u8,
            31u8,
            43u8,
            13u8,
            242u8,
            177u8,
            67u8,
            191u8,
            178u8,
            61u8,
            75u8,
            105u8,
            108u8,
            16u8,
            53u8,
            71u8,
            166u8,
            190u8,
            200u8,
            202u8,
            31u8,
            86u8,
            232u8,
            232u8,
            164u8,
            131u8,
            97u8,
            28u8,
            180u8,
            226u8,
            58u8,
            126u8,
        ];
        pub fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            if log.topics.len() != 2usize {
                return false;
            }
            if log.data.len() < 128usize {
                return false;
            }
            return log.topics.get(0).expect("bounds already checked").as_ref()
                == Self::TOPIC_ID;
        }
        pub fn decode(
            log: &substreams_ethereum::pb::eth::v2::Log,
        ) -> Result<Self, String> {
            let mut values = ethabi::decode(
                    &[ethabi::ParamType::String, ethabi::ParamType::String],
                    log.data.as_ref(),
                )
                .map_err(|e| format!("unable to decode log.data: {:?}", e))?;
            values.reverse();
            Ok(Self {
                comptroller: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[1usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'comptroller' from topic of type 'address': {:?}",
                            e
                        )
                    })?
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_address()
                    .expect(INTERNAL_ERR)
                    .as_bytes()
                    .to_vec(),
                old_name: values
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_string()
                    .expect(INTERNAL_ERR),
                new_name: values
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_string()
                    .expect(INTERNAL_ERR),
            })
        }
    }
    impl substreams_ethereum::Event for PoolNameSet {
        const NAME: &'static str = "PoolNameSet";
        fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            Self::match_log(log)
        }
        fn decode(log: &substreams_ethereum::pb::eth::v2::Log) -> Result<Self, String> {
            Self::decode(log)
        }
    }
    #[derive(Debug, Clone, PartialEq)]
    pub struct PoolRegistered {
        pub comptroller: Vec<u8>,
        pub pool: (
            String,
            Vec<u8>,
            Vec<u8>,
            substreams::scalar::BigInt,
            substreams::scalar::BigInt,
        ),
    }
    impl PoolRegistered {
        const TOPIC_ID: [u8; 32] = [
            83u8,
            236u8,
            42u8,
            29u8,
            150u8,
            69u8,
            196u8,
            99u8,
            20u8,
            114u8,
            218u8,
            188u8,
            246u8,
            210u8,
            85u8,
            245u8,
            242u8,
            151u8,
            27u8,
            170u8,
            100u8,
            50u8,
            18u8,
            53u8,
            177u8,
            97u8,
            13u8,
            145u8,
            198u8,
            146u8,
            146u8,
            142u8,
        ];
        pub fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            if log.topics.len() != 2usize {
                return false;
            }
            if log.data.len() < 192usize {
                return false;
            }
            return log.topics.get(0).expect("bounds already checked").as_ref()
                == Self::TOPIC_ID;
        }
        pub fn decode(
            log: &substreams_ethereum::pb::eth::v2::Log,
        ) -> Result<Self, String> {
            let mut values = ethabi::decode(
                    &[
                        ethabi::ParamType::Tuple(
                            vec![
                                ethabi::ParamType::String, ethabi::ParamType::Address,
                                ethabi::ParamType::Address,
                                ethabi::ParamType::Uint(256usize),
                                ethabi::ParamType::Uint(256usize)
                            ],
                        ),
                    ],
                    log.data.as_ref(),
                )
                .map_err(|e| format!("unable to decode log.data: {:?}", e))?;
            values.reverse();
            Ok(Self {
                comptroller: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[1usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'comptroller' from topic of type 'address': {:?}",
                            e
                        )
                    })?
                    .pop()
                    .expect(INTERNAL_ERR)
                    .into_address()
                    .expect(INTERNAL_ERR)
                    .as_bytes()
                    .to_vec(),
                pool: {
                    let tuple_elements = values
                        .pop()
                        .expect(INTERNAL_ERR)
                        .into_tuple()
                        .expect(INTERNAL_ERR);
                    (
                        tuple_elements[0usize]
                            .clone()
                            .into_string()
                            .expect(INTERNAL_ERR),
                        tuple_elements[1usize]
                            .clone()
                            .into_address()
                            .expect(INTERNAL_ERR)
                            .as_bytes()
                            .to_vec(),
                        tuple_elements[2usize]
                            .clone()
                            .into_address()
                            .expect(INTERNAL_ERR)
                            .as_bytes()
                            .to_vec(),
                        {
                            let mut v = [0 as u8; 32];
                            tuple_elements[3usize]
                                .clone()
                                .into_uint()
                                .expect(INTERNAL_ERR)
                                .to_big_endian(v.as_mut_slice());
                            substreams::scalar::BigInt::from_unsigned_bytes_be(&v)
                        },
                        {
                            let mut v = [0 as u8; 32];
                            tuple_elements[4usize]
                                .clone()
                                .into_uint()
                                .expect(INTERNAL_ERR)
                                .to_big_endian(v.as_mut_slice());
                            substreams::scalar::BigInt::from_unsigned_bytes_be(&v)
                        },
                    )
                },
            })
        }
    }
    impl substreams_ethereum::Event for PoolRegistered {
        const NAME: &'static str = "PoolRegistered";
        fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            Self::match_log(log)
        }
        fn decode(log: &substreams_ethereum::pb::eth::v2::Log) -> Result<Self, String> {
            Self::decode(log)
        }
    }
}