//! Dialogflow CX engine client for flowbridge.
//!
//! Defines the response-message data model shared with the conversion
//! pipeline and a thin REST session client for detect-intent turns.

pub mod client;
pub mod error;
pub mod response;
pub mod token;

pub use {
    client::{EngineConfig, SessionClient},
    error::{EngineError, Result},
    response::{
        Button, CardMessage, ImageMessage, QuickReplies, ResponseKind, ResponseMessage,
        TextMessage,
    },
    token::{StaticTokenSource, TokenSource},
};
