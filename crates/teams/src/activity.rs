use serde::Deserialize;

/// One inbound Bot Framework activity, as posted to the webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub id: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "serviceUrl")]
    pub service_url: Option<String>,
    pub from: Option<ActivityAccount>,
    pub recipient: Option<ActivityAccount>,
    pub conversation: Option<ActivityConversation>,
    #[serde(rename = "membersAdded", default)]
    pub members_added: Vec<ActivityAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityAccount {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityConversation {
    pub id: Option<String>,
}

impl TeamsActivity {
    pub fn is_message(&self) -> bool {
        self.activity_type == "message"
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation.as_ref()?.id.as_deref()
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.from.as_ref()?.id.as_deref()
    }

    /// The trimmed utterance of a message activity, if there is one.
    pub fn utterance(&self) -> Option<&str> {
        let text = self.text.as_deref()?.trim();
        (!text.is_empty()).then_some(text)
    }

    /// IDs of members added to the conversation, excluding the bot itself.
    pub fn added_member_ids(&self) -> Vec<&str> {
        let bot_id = self.recipient.as_ref().and_then(|r| r.id.as_deref());
        self.members_added
            .iter()
            .filter_map(|member| member.id.as_deref())
            .filter(|id| Some(*id) != bot_id)
            .collect()
    }
}
