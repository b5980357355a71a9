//! Response-message data model.
//!
//! One `ResponseMessage` is one unit of conversational output from a
//! detect-intent turn. The wire shape mirrors the `responseMessages` entries
//! of a CX query result: exactly one kind field is populated per entry, and
//! an optional platform tag restricts which channels may render it. Both the
//! older flat `platform` tag and the newer `channel` tag are accepted;
//! neither shape is treated as authoritative over the other.

use {
    serde::Deserialize,
    serde_json::{Map, Value},
};

/// One structured output unit from the conversational engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseMessage {
    /// Flat platform tag (older export shape).
    pub platform: Option<String>,
    /// Channel tag (newer export shape).
    pub channel: Option<String>,
    pub text: Option<TextMessage>,
    pub image: Option<ImageMessage>,
    pub card: Option<CardMessage>,
    pub quick_replies: Option<QuickReplies>,
    pub payload: Option<Map<String, Value>>,
    /// Kind fields this bridge has no rendering for (e.g. `liveAgentHandoff`).
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Borrowed view of the populated kind, for exhaustive dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseKind<'a> {
    Text(&'a TextMessage),
    Image(&'a ImageMessage),
    Card(&'a CardMessage),
    QuickReplies(&'a QuickReplies),
    Payload(&'a Map<String, Value>),
    /// A kind meaningful to some other channel only.
    Other,
}

impl ResponseMessage {
    /// The populated message kind, or `None` for an entry with no kind at
    /// all (malformed input the filter drops).
    pub fn kind(&self) -> Option<ResponseKind<'_>> {
        if let Some(text) = &self.text {
            return Some(ResponseKind::Text(text));
        }
        if let Some(image) = &self.image {
            return Some(ResponseKind::Image(image));
        }
        if let Some(card) = &self.card {
            return Some(ResponseKind::Card(card));
        }
        if let Some(quick_replies) = &self.quick_replies {
            return Some(ResponseKind::QuickReplies(quick_replies));
        }
        if let Some(payload) = &self.payload {
            return Some(ResponseKind::Payload(payload));
        }
        if !self.other.is_empty() {
            return Some(ResponseKind::Other);
        }
        None
    }

    /// Platform tags restricting where this response may render. Empty tags
    /// are ignored, so an untagged response stays eligible everywhere.
    pub fn platform_tags(&self) -> impl Iterator<Item = &str> {
        [self.platform.as_deref(), self.channel.as_deref()]
            .into_iter()
            .flatten()
            .filter(|tag| !tag.is_empty())
    }

    /// Whether the given platform may render this response: untagged
    /// responses are eligible for every channel, tagged ones only for
    /// channels in their tag set.
    pub fn eligible_for(&self, platform: &str) -> bool {
        let mut tags = self.platform_tags().peekable();
        tags.peek().is_none() || tags.any(|tag| tag == platform)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextMessage {
    /// Text alternatives; a single-reply channel renders only the first.
    pub text: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageMessage {
    pub image_uri: String,
    pub accessibility_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardMessage {
    pub title: String,
    pub subtitle: String,
    pub image_uri: String,
    pub buttons: Vec<Button>,
}

/// One card button. The postback value is either an absolute URL the channel
/// should open or an opaque token it posts back to the bot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Button {
    pub text: String,
    pub postback: String,
}

impl Button {
    /// Whether this button navigates to a URL rather than posting back.
    pub fn is_url(&self) -> bool {
        is_http_url(&self.postback)
    }
}

/// True iff the value starts with an `http://` or `https://` scheme prefix
/// (ASCII case-insensitive).
pub fn is_http_url(value: &str) -> bool {
    has_scheme(value, "http://") || has_scheme(value, "https://")
}

fn has_scheme(value: &str, scheme: &str) -> bool {
    value
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickReplies {
    pub title: String,
    pub quick_replies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use {serde_json::json, super::*};

    fn parse(value: Value) -> ResponseMessage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn kind_picks_the_populated_field() {
        let response = parse(json!({ "text": { "text": ["hi", "hello"] } }));
        match response.kind() {
            Some(ResponseKind::Text(text)) => assert_eq!(text.text, vec!["hi", "hello"]),
            other => panic!("expected text kind, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_is_other_not_malformed() {
        let response = parse(json!({ "video": { "uri": "https://example.com/clip" } }));
        assert_eq!(response.kind(), Some(ResponseKind::Other));
    }

    #[test]
    fn empty_entry_has_no_kind() {
        let response = parse(json!({}));
        assert_eq!(response.kind(), None);
    }

    #[test]
    fn tagged_entry_with_no_kind_is_still_malformed() {
        let response = parse(json!({ "platform": "TEAMS" }));
        assert_eq!(response.kind(), None);
    }

    #[test]
    fn untagged_response_is_eligible_everywhere() {
        let response = parse(json!({ "text": { "text": ["hi"] } }));
        assert!(response.eligible_for("TEAMS"));
        assert!(response.eligible_for("SLACK"));
    }

    #[test]
    fn flat_platform_tag_restricts_eligibility() {
        let response = parse(json!({ "platform": "OTHER", "text": { "text": ["hi"] } }));
        assert!(response.eligible_for("OTHER"));
        assert!(!response.eligible_for("TEAMS"));
    }

    #[test]
    fn channel_tag_is_an_equal_input_shape() {
        let response = parse(json!({ "channel": "TEAMS", "text": { "text": ["hi"] } }));
        assert!(response.eligible_for("TEAMS"));
        assert!(!response.eligible_for("OTHER"));
    }

    #[test]
    fn empty_tag_counts_as_untagged() {
        let response = parse(json!({ "platform": "", "text": { "text": ["hi"] } }));
        assert!(response.eligible_for("TEAMS"));
    }

    #[test]
    fn url_buttons_classify_by_scheme_prefix() {
        let url = Button {
            text: "Go".into(),
            postback: "https://example.com".into(),
        };
        let postback = Button {
            text: "Buy".into(),
            postback: "SKU123".into(),
        };
        assert!(url.is_url());
        assert!(!postback.is_url());
    }

    #[test]
    fn scheme_check_is_case_insensitive_and_needs_the_separator() {
        assert!(is_http_url("HTTP://example.com"));
        assert!(is_http_url("HtTpS://example.com"));
        assert!(!is_http_url("httpfoo"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn card_buttons_deserialize_in_order() {
        let response = parse(json!({
            "card": {
                "title": "Pick one",
                "buttons": [
                    { "text": "Go", "postback": "https://example.com" },
                    { "text": "Buy", "postback": "SKU123" }
                ]
            }
        }));
        let Some(ResponseKind::Card(card)) = response.kind() else {
            panic!("expected card kind");
        };
        assert_eq!(card.title, "Pick one");
        assert_eq!(card.buttons[0].text, "Go");
        assert_eq!(card.buttons[1].text, "Buy");
    }
}
