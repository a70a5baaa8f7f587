pub mod html;

#[cfg(test)]
mod tests;

/// View over page markup exposing just the pieces a lookup needs
///
/// Recomputed from scratch for every markup variant obtained; nothing is
/// updated incrementally.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Text of the first `<title>` element. May be empty or all whitespace.
    pub title: Option<String>,

    /// `href` of the first `<link rel="icon">` element. The outer option is
    /// element presence, the inner one attribute presence.
    pub icon_href: Option<Option<String>>,

    /// Whether any `<script>` element is present
    pub has_script: bool,
}

impl ParsedPage {
    /// True when both elements needed for a lookup are present
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.icon_href.is_some()
    }
}
