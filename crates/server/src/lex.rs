//! Dialog platform wire types (Lex V1 code hook).
//!
//! Only the fields the bot reads or echoes are modelled; serde ignores the
//! rest of the event.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type SessionAttributes = HashMap<String, String>;

/// Event sent by the dialog platform for every fulfillment call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub bot: BotInfo,
    pub user_id: String,
    pub current_intent: CurrentIntent,
    /// Echoed back unchanged in the response; `null` stays `null`
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    #[serde(default)]
    pub invocation_source: Option<String>,
    #[serde(default)]
    pub input_transcript: Option<String>,
    #[serde(default)]
    pub output_dialog_mode: Option<String>,
    #[serde(default)]
    pub message_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotInfo {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    /// Unfilled slots arrive as `null`
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

impl IntentRequest {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// Value of a filled slot; `None` if the slot is absent or `null`
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|value| value.as_deref())
    }
}

/// Response returned to the dialog platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: DialogActionType,
    pub fulfillment_state: FulfillmentState,
    pub message: Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogActionType {
    Close,
}

/// The bot only ever completes an intent; failures surface as function
/// errors instead of a `Failed` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

impl LexResponse {
    /// A `Close` dialog action ending the conversation
    pub fn close(
        session_attributes: Option<SessionAttributes>,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction {
                action_type: DialogActionType::Close,
                fulfillment_state,
                message,
            },
        }
    }
}
