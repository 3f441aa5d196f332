//! Host page contract.
//!
//! The host hands the view a container region it may fully overwrite; the
//! page shell wraps that region with a title. Shell construction is
//! synchronous and has no failure path.

/// A region of the host page the view is allowed to replace wholesale.
pub trait Region {
    fn set_content(&mut self, html: &str);
}

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub single_column: bool,
}

impl PageConfig {
    pub fn single_column(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            single_column: true,
        }
    }
}

/// Page shell exposing the body region the view renders into.
pub struct Page<R: Region> {
    pub body: R,
    config: PageConfig,
}

impl<R: Region> Page<R> {
    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn is_single_column(&self) -> bool {
        self.config.single_column
    }
}

pub fn make_app_page<R: Region>(parent: R, config: PageConfig) -> Page<R> {
    Page {
        body: parent,
        config,
    }
}

/// In-memory region holding the last fragment written to it. Used by the
/// binary (which prints it) and by tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlBuffer {
    content: String,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Region for HtmlBuffer {
    fn set_content(&mut self, html: &str) {
        self.content.clear();
        self.content.push_str(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_shell_exposes_title_and_layout() {
        let page = make_app_page(HtmlBuffer::new(), PageConfig::single_column("Vendors Directory"));
        assert_eq!(page.title(), "Vendors Directory");
        assert!(page.is_single_column());
        assert_eq!(page.body.content(), "");
    }

    #[test]
    fn set_content_replaces_previous_fragment() {
        let mut buffer = HtmlBuffer::new();
        buffer.set_content("<p>first</p>");
        buffer.set_content("<p>second</p>");
        assert_eq!(buffer.content(), "<p>second</p>");
    }
}
