/// A canonical corpus unit: its title and full display text.
///
/// Entries are created once by the loader and shared (behind `Arc`) by every
/// alias that resolves to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    title: String,
    body: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
