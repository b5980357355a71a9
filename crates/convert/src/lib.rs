//! Engine-response to channel-message conversion.
//!
//! The pipeline has two stages: [`filter::filter_responses`] keeps the
//! responses the target platform may render, and [`mapper::map_one`] turns
//! each survivor into at most one channel message. [`convert`] drives both
//! over a whole turn batch and is the single entry point the gateway uses.

pub mod filter;
pub mod mapper;

pub use {filter::filter_responses, mapper::map_one};

use {flowbridge_engine::response::ResponseMessage, flowbridge_teams::message::ChannelMessage};

/// Convert one engine response batch into the channel messages to deliver.
///
/// Every input yields zero or one output and relative order is preserved;
/// the pipeline never reorders or merges responses. An empty result is a
/// valid reply, not an error.
pub fn convert(responses: Vec<ResponseMessage>, platform: &str) -> Vec<ChannelMessage> {
    filter_responses(responses, platform)
        .iter()
        .filter_map(map_one)
        .collect()
}
