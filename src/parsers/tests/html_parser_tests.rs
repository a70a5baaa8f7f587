use crate::parsers::html;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_head() {
        let markup = r#"<html><head>
            <title>Example Domain</title>
            <link rel="icon" href="/favicon.ico">
            </head><body><p>Hello</p></body></html>"#;
        let page = html::parse(markup);

        assert_eq!(page.title.as_deref(), Some("Example Domain"));
        assert_eq!(page.icon_href, Some(Some("/favicon.ico".to_string())));
        assert!(!page.has_script);
        assert!(page.is_complete());
    }

    #[test]
    fn test_first_elements_win() {
        let markup = r#"<html><head>
            <title>First</title>
            <title>Second</title>
            <link rel="icon" href="first.png">
            <link rel="icon" href="second.png">
            </head></html>"#;
        let page = html::parse(markup);

        assert_eq!(page.title.as_deref(), Some("First"));
        assert_eq!(page.icon_href, Some(Some("first.png".to_string())));
    }

    #[test]
    fn test_shortcut_icon_rel_matches() {
        // rel is a space-separated list; "shortcut icon" still counts
        let markup = r#"<html><head>
            <title>t</title>
            <link rel="shortcut icon" href="fav.ico">
            </head></html>"#;
        let page = html::parse(markup);

        assert_eq!(page.icon_href, Some(Some("fav.ico".to_string())));
    }

    #[test]
    fn test_stylesheet_link_does_not_match() {
        let markup = r#"<html><head>
            <title>t</title>
            <link rel="stylesheet" href="style.css">
            </head></html>"#;
        let page = html::parse(markup);

        assert_eq!(page.icon_href, None);
        assert!(!page.is_complete());
    }

    #[test]
    fn test_icon_without_href() {
        // Element present, attribute missing
        let markup = r#"<html><head>
            <title>t</title>
            <link rel="icon">
            </head></html>"#;
        let page = html::parse(markup);

        assert_eq!(page.icon_href, Some(None));
        assert!(page.is_complete());
    }

    #[test]
    fn test_empty_title_is_present_but_empty() {
        let markup = "<html><head><title></title></head></html>";
        let page = html::parse(markup);

        assert_eq!(page.title.as_deref(), Some(""));
    }

    #[test]
    fn test_script_detection() {
        let with_script = r#"<html><head><script src="app.js"></script></head><body></body></html>"#;
        assert!(html::parse(with_script).has_script);

        let inline_script = "<html><body><script>var x = 1;</script></body></html>";
        assert!(html::parse(inline_script).has_script);

        let without_script = "<html><head><title>t</title></head><body></body></html>";
        assert!(!html::parse(without_script).has_script);
    }

    #[test]
    fn test_missing_everything() {
        let page = html::parse("<html><body><p>plain page</p></body></html>");

        assert_eq!(page.title, None);
        assert_eq!(page.icon_href, None);
        assert!(!page.has_script);
        assert!(!page.is_complete());
    }
}
