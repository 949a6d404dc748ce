use std::fmt;

use serde::{Deserialize, Serialize};

/// One vocabulary triple. Identity is the combination of all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub english: String,
    #[serde(rename = "chinese_pinyin")]
    pub pinyin: String,
    #[serde(rename = "chinese_characters")]
    pub hanzi: String,
}

impl VocabularyEntry {
    pub fn new(
        english: impl Into<String>,
        pinyin: impl Into<String>,
        hanzi: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            pinyin: pinyin.into(),
            hanzi: hanzi.into(),
        }
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::English => &self.english,
            Column::Pinyin => &self.pinyin,
            Column::Hanzi => &self.hanzi,
        }
    }
}

/// One of the three display lists, in required selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    English,
    Pinyin,
    Hanzi,
}

impl Column {
    pub const ORDER: [Column; 3] = [Column::English, Column::Pinyin, Column::Hanzi];

    pub fn label(self) -> &'static str {
        match self {
            Column::English => "English",
            Column::Pinyin => "Chinese (Pinyin)",
            Column::Hanzi => "Chinese Characters",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
