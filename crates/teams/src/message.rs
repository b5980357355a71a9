//! Channel-native outbound message types.
//!
//! These serialize into the Bot Framework activity wire shape. The
//! constructors stand in for the SDK card/message factories: plain text,
//! a hero-card attachment, or a suggested-actions message.

use serde::Serialize;

pub const HERO_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.hero";

/// One message ready for the connector API.
///
/// Owned by the conversion pipeline until handed to the sender; never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelMessage {
    Activity(Activity),
    /// Pre-built activity passed through from a payload response.
    Raw(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(rename = "suggestedActions", skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<SuggestedActions>,
}

impl Activity {
    fn message() -> Self {
        Self {
            activity_type: "message".into(),
            text: None,
            attachments: None,
            suggested_actions: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::message()
        }
    }

    pub fn hero_card(card: HeroCard) -> Self {
        Self {
            attachments: Some(vec![Attachment::hero(card)]),
            ..Self::message()
        }
    }

    /// A suggested-actions message labeled with `title`. An empty title
    /// degrades to a message with no text rather than an empty bubble.
    pub fn suggested_actions(title: impl Into<String>, actions: Vec<CardAction>) -> Self {
        let title = title.into();
        Self {
            text: (!title.is_empty()).then_some(title),
            suggested_actions: Some(SuggestedActions { actions }),
            ..Self::message()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: HeroCard,
}

impl Attachment {
    pub fn hero(card: HeroCard) -> Self {
        Self {
            content_type: HERO_CARD_CONTENT_TYPE.into(),
            content: card,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCard {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<CardImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestedActions {
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub title: String,
    pub value: String,
}

impl CardAction {
    pub fn open_url(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::OpenUrl,
            title: title.into(),
            value: value.into(),
        }
    }

    pub fn post_back(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::PostBack,
            title: title.into(),
            value: value.into(),
        }
    }

    pub fn im_back(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action_type: ActionType::ImBack,
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    OpenUrl,
    PostBack,
    ImBack,
}
