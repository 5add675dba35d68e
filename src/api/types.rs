// Quote API response types.

use serde::{Deserialize, Serialize};

/// A quote as returned by the random-quote endpoint.
///
/// The service sends extra fields (such as `id`); only the text and author
/// are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Quote body with its leading ellipsis, wrapped in double quotes.
    pub fn display_text(&self) -> String {
        format!("\"…{}\"", self.text)
    }

    /// Attribution line shown under the quote.
    pub fn attribution(&self) -> String {
        format!("— {}", self.author)
    }
}
