use crate::sanitize::remove_html;
use std::fmt;

/// A string that is already safe to place into a page as HTML.
///
/// Third-party text only becomes `Markup` through [`Markup::escape`]; raw
/// HTML needs the explicit [`Markup::trusted`] constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn empty() -> Self {
        Markup(String::new())
    }

    pub fn escape(text: &str) -> Self {
        Markup(remove_html(text))
    }

    /// Wrap HTML produced by this crate's templates or by GitHub itself
    /// (`emojiHTML`).
    pub fn trusted(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        Markup(iter.into_iter().map(|m| m.0).collect())
    }
}
