use serde::{Deserialize, Serialize};

pub const TOOL_NAME: &str = "schedule_visit";
pub const TOOL_DESCRIPTION: &str = "Extracts structured data for scheduling a CRM visit.";
pub const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionName,
}

/// Request body for an OpenAI-style chat completion that forces a single
/// tool call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCallPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
    pub tool_choice: ToolChoice,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ToolCallPayload {
    pub fn new(
        model: &str,
        system_prompt: String,
        transcript: &str,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: transcript.to_string(),
                },
            ],
            tools: vec![ToolDefinition {
                kind: "function".to_string(),
                function: FunctionDefinition {
                    name: TOOL_NAME.to_string(),
                    description: TOOL_DESCRIPTION.to_string(),
                    parameters,
                },
            }],
            tool_choice: ToolChoice {
                kind: "function".to_string(),
                function: FunctionName {
                    name: TOOL_NAME.to_string(),
                },
            },
            max_tokens: MAX_TOKENS,
            temperature: 0.0,
        }
    }
}

// ── Response envelope ──

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: Option<String>,
    pub arguments: String,
}

impl ToolCallResponse {
    /// Argument string of the first choice's first tool call.
    pub fn first_arguments(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .tool_calls
            .first()
            .map(|call| call.function.arguments.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_shape() {
        let payload = ToolCallPayload::new(
            "mercury",
            "be precise".to_string(),
            "book a visit",
            json!({"type": "object"}),
        );
        let wire = serde_json::to_value(&payload).unwrap();

        assert_eq!(wire["model"], "mercury");
        assert_eq!(wire["messages"][0]["role"], "system");
        assert_eq!(wire["messages"][1]["content"], "book a visit");
        assert_eq!(wire["tools"][0]["type"], "function");
        assert_eq!(wire["tools"][0]["function"]["name"], "schedule_visit");
        assert_eq!(wire["tools"][0]["function"]["parameters"]["type"], "object");
        assert_eq!(wire["tool_choice"]["type"], "function");
        assert_eq!(wire["tool_choice"]["function"]["name"], "schedule_visit");
        assert_eq!(wire["max_tokens"], 4096);
        assert_eq!(wire["temperature"], 0.0);
    }

    #[test]
    fn test_first_arguments() {
        let raw = json!({
            "choices": [{
                "message": {
                    "tool_calls": [
                        {"function": {"name": "schedule_visit", "arguments": "{\"a\":1}"}},
                        {"function": {"name": "schedule_visit", "arguments": "ignored"}}
                    ]
                }
            }]
        });
        let resp: ToolCallResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.first_arguments(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_first_arguments_missing_tool_call() {
        let raw = json!({"choices": [{"message": {"content": "sorry"}}]});
        let resp: ToolCallResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.first_arguments(), None);

        let empty: ToolCallResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_arguments(), None);
    }
}
