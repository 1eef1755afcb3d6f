// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenRouter chat-completions wire types (the subset used here).

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
	pub model: &'a str,
	pub messages: Vec<ChatMessage>,
	pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
	pub role: String,
	pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
	#[serde(default)]
	pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
	pub message: ChatMessage,
}

impl ChatResponse {
	/// `choices[0].message.content`, if present.
	pub fn first_content(&self) -> Option<&str> {
		self.choices.first().map(|c| c.message.content.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_serializes_expected_shape() {
		let request = ChatRequest {
			model: "openai/gpt-4o-mini",
			messages: vec![ChatMessage {
				role: "user".to_string(),
				content: "hi".to_string(),
			}],
			temperature: 0.2,
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(value["model"], "openai/gpt-4o-mini");
		assert_eq!(value["messages"][0]["role"], "user");
		assert!((value["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
	}

	#[test]
	fn response_without_choices_has_no_content() {
		let response: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
		assert_eq!(response.first_content(), None);

		let response: ChatResponse = serde_json::from_str(
			r#"{"choices":[{"message":{"role":"assistant","content":"Ciao"}}]}"#,
		)
		.unwrap();
		assert_eq!(response.first_content(), Some("Ciao"));
	}
}
