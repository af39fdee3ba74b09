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
    pub struct ConverterAdded {
        pub converter: Vec<u8>,
    }
    impl ConverterAdded {
        const TOPIC_ID: [u8; 32] = [
            160u8,
            161u8,
            88u8,
            4u8,
            74u8,
            37u8,
            82u8,
            37u8,
            111u8,
            100u8,
            21u8,
            206u8,
            96u8,
            194u8,
            239u8,
            13u8,
            105u8,
            131u8,
            166u8,
            127u8,
            88u8,
            228u8,
            145u8,
            205u8,
            122u8,
            246u8,
            228u8,
            138u8,
            226u8,
            171u8,
            226u8,
            95u8,
        ];
        pub fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            if log.topics.len() != 2usize {
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
                converter: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[1usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'converter' from topic of type 'address': {:?}",
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
    impl substreams_ethereum::Event for ConverterAdded {
        const NAME: &'static str = "ConverterAdded";
        fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            Self::match_log(log)
        }
        fn decode(log: &substreams_ethereum::pb::eth::v2::Log) -> Result<Self, String> {
            Self::decode(log)
        }
    }
    #[derive(Debug, Clone, PartialEq)]
    pub struct ConverterRemoved {
        pub converter: Vec<u8>,
    }
    impl ConverterRemoved {
        const TOPIC_ID: [u8; 32] = [
            235u8,
            186u8,
            94u8,
            223u8,
            41u8,
            125u8,
            121u8,
            206u8,
            160u8,
            236u8,
            24u8,
            217u8,
            122u8,
            218u8,
            207u8,
            87u8,
            140u8,
            195u8,
            21u8,
            34u8,
            64u8,
            189u8,
            17u8,
            46u8,
            141u8,
            125u8,
            162u8,
            107u8,
            166u8,
            87u8,
            0u8,
            209u8,
        ];
        pub fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            if log.topics.len() != 2usize {
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
                converter: ethabi::decode(
                        &[ethabi::ParamType::Address],
                        log.topics[1usize].as_ref(),
                    )
                    .map_err(|e| {
                        format!(
                            "unable to decode param 'converter' from topic of type 'address': {:?}",
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
    impl substreams_ethereum::Event for ConverterRemoved {
        const NAME: &'static str = "ConverterRemoved";
        fn match_log(log: &substreams_ethereum::pb::eth::v2::Log) -> bool {
            Self::match_log(log)
        }
        fn decode(log: &substreams_ethereum::pb::eth::v2::Log) -> Result<Self, String> {
            Self::decode(log)
        }
    }
}