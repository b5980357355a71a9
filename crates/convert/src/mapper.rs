use {
    serde_json::{Map, Value},
    tracing::debug,
};

use {
    flowbridge_engine::response::{
        Button, CardMessage, ImageMessage, QuickReplies, ResponseKind, ResponseMessage, TextMessage,
    },
    flowbridge_teams::message::{Activity, CardAction, CardImage, ChannelMessage, HeroCard},
};

/// Namespace inside a payload response holding this channel's pre-built
/// activity.
const PAYLOAD_NAMESPACE: &str = "teams";

/// Map one engine response to at most one channel message.
///
/// Kinds this channel has no rendering for yield `None`; missing sub-fields
/// degrade to empty fields rather than failing the batch.
pub fn map_one(response: &ResponseMessage) -> Option<ChannelMessage> {
    match response.kind()? {
        ResponseKind::Text(text) => Some(map_text(text)),
        ResponseKind::Image(image) => Some(map_image(image)),
        ResponseKind::Card(card) => Some(map_card(card)),
        ResponseKind::QuickReplies(quick_replies) => Some(map_quick_replies(quick_replies)),
        ResponseKind::Payload(payload) => map_payload(payload),
        ResponseKind::Other => {
            debug!("skipping response kind with no Teams rendering");
            None
        },
    }
}

fn map_text(text: &TextMessage) -> ChannelMessage {
    // Single-reply channel: only the first alternative is rendered.
    let body = text.text.first().cloned().unwrap_or_default();
    ChannelMessage::Activity(Activity::text(body))
}

fn map_image(image: &ImageMessage) -> ChannelMessage {
    let card = HeroCard {
        images: vec![CardImage {
            url: image.image_uri.clone(),
        }],
        ..HeroCard::default()
    };
    ChannelMessage::Activity(Activity::hero_card(card))
}

fn map_card(card: &CardMessage) -> ChannelMessage {
    let images = if card.image_uri.is_empty() {
        Vec::new()
    } else {
        vec![CardImage {
            url: card.image_uri.clone(),
        }]
    };
    ChannelMessage::Activity(Activity::hero_card(HeroCard {
        title: card.title.clone(),
        subtitle: card.subtitle.clone(),
        images,
        buttons: card.buttons.iter().map(map_button).collect(),
    }))
}

fn map_button(button: &Button) -> CardAction {
    if button.is_url() {
        CardAction::open_url(&button.text, &button.postback)
    } else {
        CardAction::post_back(&button.text, &button.postback)
    }
}

fn map_quick_replies(quick_replies: &QuickReplies) -> ChannelMessage {
    let actions = quick_replies
        .quick_replies
        .iter()
        .map(|option| CardAction::im_back(option, option))
        .collect();
    ChannelMessage::Activity(Activity::suggested_actions(&quick_replies.title, actions))
}

/// A payload response carries per-channel activities keyed by channel
/// namespace; the `teams` member is already channel-native and passes
/// through unmodified.
fn map_payload(payload: &Map<String, Value>) -> Option<ChannelMessage> {
    match payload.get(PAYLOAD_NAMESPACE) {
        Some(activity) => Some(ChannelMessage::Raw(activity.clone())),
        None => {
            debug!("payload response has no {PAYLOAD_NAMESPACE} member");
            None
        },
    }
}
