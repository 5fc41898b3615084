//! Evidence inputs accepted by the verifier.

use serde::{Deserialize, Serialize};

/// One candidate source of evidence for a claim.
///
/// Callers hand over either a bare snippet string or a structured search
/// result with optional `title` and `snippet` fields. A JSON evidence array
/// may mix both shapes freely. The two shapes resolve into a single
/// comparison string at the verifier boundary, so the scoring loop never
/// branches on shape. Items have no identity beyond their position in the
/// evidence sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvidenceItem {
    TitledSnippet {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        snippet: Option<String>,
    },
    PlainText(String),
}

impl EvidenceItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    pub fn titled(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self::TitledSnippet {
            title: Some(title.into()),
            snippet: Some(snippet.into()),
        }
    }

    /// Canonical lower-cased text scanned for claim keywords.
    ///
    /// Structured items concatenate snippet then title with a separating
    /// space, so tokens never fuse across the field seam; missing fields
    /// contribute nothing.
    pub fn comparison_text(&self) -> String {
        match self {
            Self::PlainText(text) => text.to_lowercase(),
            Self::TitledSnippet { title, snippet } => {
                let mut text = snippet.clone().unwrap_or_default();
                if let Some(title) = title.as_deref() {
                    if !text.is_empty() && !title.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(title);
                }
                text.to_lowercase()
            }
        }
    }
}

impl From<&str> for EvidenceItem {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_string())
    }
}

impl From<String> for EvidenceItem {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_json_array_deserializes() {
        let items: Vec<EvidenceItem> = serde_json::from_str(
            r#"["plain snippet", {"title": "OpenAI News", "snippet": "Sam Altman is CEO."}, {"title": "Headline only"}]"#,
        )
        .expect("mixed array should parse");

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], EvidenceItem::text("plain snippet"));
        assert_eq!(
            items[1],
            EvidenceItem::titled("OpenAI News", "Sam Altman is CEO.")
        );
        assert_eq!(
            items[2],
            EvidenceItem::TitledSnippet {
                title: Some("Headline only".to_string()),
                snippet: None,
            }
        );
    }

    #[test]
    fn comparison_text_concatenates_snippet_then_title() {
        let item = EvidenceItem::titled("Second", "First");
        assert_eq!(item.comparison_text(), "first second");
    }

    #[test]
    fn snippet_and_title_never_fuse_across_the_seam() {
        // "ra" + "tes" must not produce a spurious "rates" hit.
        let item = EvidenceItem::titled("tes announced today", "RBI kept the ra");
        assert!(!item.comparison_text().contains("rates"));
    }

    #[test]
    fn missing_fields_add_no_separator() {
        let title_only = EvidenceItem::TitledSnippet {
            title: Some("Headline".to_string()),
            snippet: None,
        };
        assert_eq!(title_only.comparison_text(), "headline");

        let snippet_only = EvidenceItem::TitledSnippet {
            title: None,
            snippet: Some("Body".to_string()),
        };
        assert_eq!(snippet_only.comparison_text(), "body");
    }

    #[test]
    fn comparison_text_lowercases_plain_text() {
        let item = EvidenceItem::text("RBI Kept The Rate");
        assert_eq!(item.comparison_text(), "rbi kept the rate");
    }

    #[test]
    fn unknown_object_shape_degrades_to_empty_text() {
        let item: EvidenceItem =
            serde_json::from_str(r#"{"error": "search failed"}"#).expect("object should parse");
        assert_eq!(item.comparison_text(), "");
    }
}
