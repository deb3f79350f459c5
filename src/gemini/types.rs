/// Wire types for the Gemini `generateContent` response
///
/// Only the fields the editor reads are modelled. Everything is defaulted so
/// blocked or text-only answers still parse and simply carry no image.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Part {
    pub inline_data: Option<InlineData>,
}

/// Inline image payload as base64 text
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InlineData {
    pub data: String,
}
