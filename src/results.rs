use serde::{Deserialize, Serialize};

/// Title and favicon resolved for a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Trimmed text of the page's `<title>` element
    pub title: String,

    /// Favicon image encoded as base64 text
    pub favicon: String,
}

impl PageResult {
    /// Create a new page result instance
    pub fn new(title: String, favicon: String) -> Self {
        Self { title, favicon }
    }
}
