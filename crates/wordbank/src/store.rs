use crate::{ParseError, VocabularyEntry};

/// Ordered collection of vocabulary entries. Appended to by manual entry,
/// replaced wholesale by import; entries are never removed individually.
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<VocabularyEntry>,
}

impl WordBank {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }

    /// The built-in starter set.
    pub fn seed() -> Self {
        Self::new(vec![
            VocabularyEntry::new("Hello", "Nǐ hǎo", "你好"),
            VocabularyEntry::new("Goodbye", "Zàijiàn", "再见"),
            VocabularyEntry::new("Thank you", "Xièxiè", "谢谢"),
            VocabularyEntry::new("Yes", "Shì", "是"),
            VocabularyEntry::new("No", "Bù", "不"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Adds one entry. No uniqueness check.
    pub fn append(&mut self, entry: VocabularyEntry) {
        self.entries.push(entry);
    }

    /// Wholesale replace, used by import.
    pub fn replace_all(&mut self, entries: Vec<VocabularyEntry>) {
        self.entries = entries;
    }

    /// Finds the single entry whose three fields equal the selected texts in
    /// the fixed column assignment.
    pub fn find_match(&self, english: &str, pinyin: &str, hanzi: &str) -> Option<&VocabularyEntry> {
        self.entries
            .iter()
            .find(|entry| entry.english == english && entry.pinyin == pinyin && entry.hanzi == hanzi)
    }

    /// Parses the serialized word document. The caller's bank is untouched on
    /// failure because nothing is replaced until parsing succeeds.
    pub fn parse(text: &str) -> Result<Vec<VocabularyEntry>, ParseError> {
        serde_json::from_str(text).map_err(ParseError::Json)
    }

    /// Serializes the whole bank as the downloadable word document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_entries() {
        let bank = WordBank::seed();
        assert_eq!(bank.len(), 5);
        assert!(bank.find_match("Hello", "Nǐ hǎo", "你好").is_some());
    }

    #[test]
    fn append_keeps_order_and_allows_duplicates() {
        let mut bank = WordBank::new(Vec::new());
        let entry = VocabularyEntry::new("Water", "Shuǐ", "水");
        bank.append(entry.clone());
        bank.append(entry.clone());
        assert_eq!(bank.entries(), &[entry.clone(), entry]);
    }

    #[test]
    fn find_match_requires_all_three_fields() {
        let bank = WordBank::seed();
        assert!(bank.find_match("Hello", "Nǐ hǎo", "再见").is_none());
        assert!(bank.find_match("Goodbye", "Nǐ hǎo", "你好").is_none());
        assert!(bank.find_match("Yes", "Shì", "是").is_some());
    }

    #[test]
    fn export_import_round_trip_preserves_entries_and_order() {
        let mut bank = WordBank::seed();
        bank.append(VocabularyEntry::new("Tea", "Chá", "茶"));
        let json = bank.to_json().unwrap();
        let parsed = WordBank::parse(&json).unwrap();
        assert_eq!(parsed, bank.entries());
    }

    #[test]
    fn parse_accepts_the_document_field_names() {
        let json = r#"[{ "english": "Hello", "chinese_pinyin": "Nǐ hǎo", "chinese_characters": "你好" }]"#;
        let parsed = WordBank::parse(json).unwrap();
        assert_eq!(parsed, &[VocabularyEntry::new("Hello", "Nǐ hǎo", "你好")]);
    }

    #[test]
    fn parse_failure_reports_an_error() {
        assert!(WordBank::parse("not json").is_err());
        assert!(WordBank::parse(r#"{"english": "Hello"}"#).is_err());
    }
}
