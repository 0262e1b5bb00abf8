//! Selectable list of corpus names

/// Ordered corpus names with at most one selected entry
///
/// Methods that can change the selection return the selection-changed
/// notification: the selected name, or an empty string when the selection
/// was cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorporaList {
    names: Vec<String>,
    selected: Option<usize>,
}

impl CorporaList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry
    pub fn clear(&mut self) -> Option<String> {
        self.names.clear();
        self.selected.take().map(|_| String::new())
    }

    /// Append names in order, keeping duplicates
    pub fn add<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
    }

    /// Select the first entry equal to `name`
    ///
    /// Notifies on every match, even when the entry was already selected.
    pub fn select(&mut self, name: &str) -> Option<String> {
        let index = self.names.iter().position(|n| n == name)?;
        self.selected = Some(index);
        Some(self.names[index].clone())
    }

    /// User selection from the view; notifies only on an actual change
    pub fn click(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() || self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        Some(self.names[index].clone())
    }

    /// Selected name, if any
    pub fn text(&self) -> Option<&str> {
        self.selected.map(|i| self.names[i].as_str())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> CorporaList {
        let mut list = CorporaList::new();
        list.add(["buckeye", "timit", "buckeye"]);
        list
    }

    #[test]
    fn select_unknown_name_changes_nothing() {
        let mut list = listing();
        assert_eq!(list.select("timit"), Some("timit".to_string()));

        assert_eq!(list.select("librispeech"), None);
        assert_eq!(list.text(), Some("timit"));
    }

    #[test]
    fn select_takes_first_duplicate_and_notifies_once() {
        let mut list = listing();
        assert_eq!(list.names().len(), 3);

        assert_eq!(list.select("buckeye"), Some("buckeye".to_string()));
        assert_eq!(list.selected_index(), Some(0));
        // Reselecting still notifies
        assert_eq!(list.select("buckeye"), Some("buckeye".to_string()));
    }

    #[test]
    fn clear_notifies_only_when_something_was_selected() {
        let mut list = listing();
        assert_eq!(list.clear(), None);
        assert!(list.is_empty());

        list.add(["timit"]);
        list.select("timit");
        assert_eq!(list.clear(), Some(String::new()));
        assert_eq!(list.text(), None);
    }

    #[test]
    fn click_ignores_out_of_range_and_repeats() {
        let mut list = listing();
        assert_eq!(list.click(7), None);
        assert_eq!(list.click(1), Some("timit".to_string()));
        assert_eq!(list.click(1), None);
        assert_eq!(list.text(), Some("timit"));
    }
}
