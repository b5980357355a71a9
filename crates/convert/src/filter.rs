use {flowbridge_engine::response::ResponseMessage, tracing::warn};

/// Keep, in order, the responses the given platform may render.
///
/// Untagged responses are eligible for every platform. Entries with no
/// populated message kind are dropped with a warning so one bad entry never
/// blocks delivery of the rest of the batch.
pub fn filter_responses(
    mut responses: Vec<ResponseMessage>,
    platform: &str,
) -> Vec<ResponseMessage> {
    responses.retain(|response| {
        if response.kind().is_none() {
            warn!("dropping response with no message kind");
            return false;
        }
        response.eligible_for(platform)
    });
    responses
}

#[cfg(test)]
mod tests {
    use {serde_json::json, super::*};

    fn batch(value: serde_json::Value) -> Vec<ResponseMessage> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(filter_responses(Vec::new(), "TEAMS").is_empty());
    }

    #[test]
    fn untagged_responses_survive_any_platform() {
        let responses = batch(json!([{ "text": { "text": ["hi"] } }]));
        assert_eq!(filter_responses(responses.clone(), "TEAMS").len(), 1);
        assert_eq!(filter_responses(responses, "ANYTHING").len(), 1);
    }

    #[test]
    fn responses_tagged_for_other_platforms_are_dropped() {
        let responses = batch(json!([
            { "platform": "OTHER", "text": { "text": ["elsewhere"] } },
            { "text": { "text": ["everywhere"] } }
        ]));
        let filtered = filter_responses(responses, "TEAMS");
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered[0].text.as_ref().map(|t| t.text[0].as_str()),
            Some("everywhere")
        );
    }

    #[test]
    fn malformed_entries_are_dropped_without_aborting() {
        let responses = batch(json!([
            {},
            { "text": { "text": ["kept"] } },
            { "platform": "TEAMS" }
        ]));
        let filtered = filter_responses(responses, "TEAMS");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let responses = batch(json!([
            { "text": { "text": ["first"] } },
            { "platform": "OTHER", "text": { "text": ["skipped"] } },
            { "text": { "text": ["second"] } },
            { "channel": "TEAMS", "text": { "text": ["third"] } }
        ]));
        let filtered = filter_responses(responses, "TEAMS");
        let bodies: Vec<&str> = filtered
            .iter()
            .filter_map(|r| r.text.as_ref())
            .filter_map(|t| t.text.first())
            .map(String::as_str)
            .collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let responses = batch(json!([
            { "text": { "text": ["hi"] } },
            { "platform": "OTHER", "text": { "text": ["bye"] } },
            {}
        ]));
        let once = filter_responses(responses, "TEAMS");
        let twice = filter_responses(once.clone(), "TEAMS");
        assert_eq!(once, twice);
    }
}
