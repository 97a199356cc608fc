//! Deferred hyperlink targets.
//!
//! Titled links render as `` `title`_ `` in the text; the matching
//! `.. _title: url` targets are collected here and written once, after the
//! last line of the document.

/// Ordered title to URL table.
///
/// Entries keep the position of their first registration. Registering a
/// title again replaces its URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTargetTable {
    entries: Vec<(String, String)>,
}

impl LinkTargetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `title` as pointing at `url`.
    pub fn register(&mut self, title: &str, url: &str) {
        match self.entries.iter_mut().find(|(t, _)| t == title) {
            Some(entry) => {
                if entry.1 != url {
                    log::debug!("link target {:?} redefined: {} -> {}", title, entry.1, url);
                }
                entry.1 = url.to_string();
            }
            None => self.entries.push((title.to_string(), url.to_string())),
        }
    }

    /// URL currently registered for `title`.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, url)| url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, u)| (t.as_str(), u.as_str()))
    }

    /// Render the target block.
    ///
    /// A separating blank line, then a blank line and `.. _title: url` per
    /// entry. Nothing at all for an empty table.
    pub fn render(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let mut lines = vec![String::new()];
        for (title, url) in self.iter() {
            lines.push(String::new());
            lines.push(format!(".. _{}: {}", title, url));
        }
        lines
    }
}
