use substreams_ethereum::{pb::eth::v2::Log, Event};
use subgraph_substreams::prelude::*;

use crate::{
    abi::{
        converter_network::events::{ConverterAdded, ConverterRemoved},
        token_converter::events::{
            BaseAssetUpdated, ConversionConfigUpdated, ConversionPaused, ConversionResumed,
            ConverterNetworkAddressUpdated, DestinationAddressUpdated, PriceOracleUpdated,
        },
    },
    reader::ConverterReader,
};

pub mod converter;
pub mod network;

/// Every event the protocol reserve subgraph handles.
pub enum EventType {
    ConverterAdded(ConverterAdded),
    ConverterRemoved(ConverterRemoved),
    ConversionConfigUpdated(ConversionConfigUpdated),
    ConversionPaused(ConversionPaused),
    ConversionResumed(ConversionResumed),
    ConverterNetworkAddressUpdated(ConverterNetworkAddressUpdated),
    DestinationAddressUpdated(DestinationAddressUpdated),
    BaseAssetUpdated(BaseAssetUpdated),
    PriceOracleUpdated(PriceOracleUpdated),
}

impl EventType {
    pub fn apply<S: EntityStore, R: ConverterReader>(
        &self,
        store: &mut S,
        reader: &R,
        ctx: &EventContext,
    ) -> Result<(), HandlerError> {
        match self {
            EventType::ConverterAdded(e) => network::handle_converter_added(store, reader, e),
            EventType::ConverterRemoved(e) => network::handle_converter_removed(store, e),
            EventType::ConversionConfigUpdated(e) => {
                converter::handle_conversion_config_updated(store, reader, ctx, e)
            }
            EventType::ConversionPaused(e) => converter::handle_conversion_paused(store, reader, ctx, e),
            EventType::ConversionResumed(e) => {
                converter::handle_conversion_resumed(store, reader, ctx, e)
            }
            EventType::ConverterNetworkAddressUpdated(e) => {
                converter::handle_converter_network_address_updated(store, reader, ctx, e)
            }
            EventType::DestinationAddressUpdated(e) => {
                converter::handle_destination_address_updated(store, reader, ctx, e)
            }
            EventType::BaseAssetUpdated(e) => converter::handle_base_asset_updated(store, reader, ctx, e),
            EventType::PriceOracleUpdated(e) => {
                converter::handle_price_oracle_updated(store, reader, ctx, e)
            }
        }
    }
}

pub fn decode_network_event(event: &Log) -> Option<EventType> {
    [
        ConverterAdded::match_and_decode(event).map(EventType::ConverterAdded),
        ConverterRemoved::match_and_decode(event).map(EventType::ConverterRemoved),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}

pub fn decode_converter_event(event: &Log) -> Option<EventType> {
    [
        ConversionConfigUpdated::match_and_decode(event).map(EventType::ConversionConfigUpdated),
        ConversionPaused::match_and_decode(event).map(EventType::ConversionPaused),
        ConversionResumed::match_and_decode(event).map(EventType::ConversionResumed),
        ConverterNetworkAddressUpdated::match_and_decode(event)
            .map(EventType::ConverterNetworkAddressUpdated),
        DestinationAddressUpdated::match_and_decode(event).map(EventType::DestinationAddressUpdated),
        BaseAssetUpdated::match_and_decode(event).map(EventType::BaseAssetUpdated),
        PriceOracleUpdated::match_and_decode(event).map(EventType::PriceOracleUpdated),
    ]
    .into_iter()
    .find_map(std::convert::identity)
}
