use super::value::Value;

/// A row the query engine can search, filter and sort.
pub trait Record {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Every field name [`Record::field`] answers for.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Read a field. Returns `None` for names not in [`Record::FIELDS`].
    fn field(&self, name: &str) -> Option<Value>;

    /// Fields matched case-insensitively by the search box.
    fn search_text(&self) -> Vec<&str>;

    /// Fields matched verbatim (phone numbers, ids).
    fn search_exact(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Does this record match a search term? An empty term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        if self.search_exact().iter().any(|field| field.contains(term)) {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_text()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
