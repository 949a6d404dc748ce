use rand::seq::SliceRandom;

use wordbank::{Column, WordBank};
#[cfg(test)]
use wordbank::VocabularyEntry;

pub const MAX_ROUND_SIZE: usize = 5;

/// Visual state of one displayed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unselected,
    Selected,
    /// Permanent, a matched word stays highlighted.
    Correct,
    /// Transient, cleared by the mismatch reversion.
    Incorrect,
}

#[derive(Debug, Clone)]
pub struct Slot {
    pub text: String,
    pub state: SlotState,
}

/// Position of a slot on the board, captured when a triple is validated so a
/// deferred reversion touches exactly the words it saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef {
    pub column: Column,
    pub index: usize,
}

/// One round's three shuffled columns.
#[derive(Debug, Clone)]
pub struct Board {
    english: Vec<Slot>,
    pinyin: Vec<Slot>,
    hanzi: Vec<Slot>,
}

impl Board {
    /// Draws min(5, bank size) entries at random and independently shuffles
    /// each column so positional alignment carries no information.
    pub fn generate(bank: &WordBank) -> Option<Self> {
        if bank.is_empty() {
            return None;
        }
        let mut drawn = bank.entries().to_vec();
        let mut rng = rand::thread_rng();
        drawn.shuffle(&mut rng);
        drawn.truncate(MAX_ROUND_SIZE);

        let columns = Column::ORDER.map(|column| {
            let mut words = drawn
                .iter()
                .map(|entry| entry.field(column).to_owned())
                .collect::<Vec<String>>();
            words.shuffle(&mut rng);
            words
                .into_iter()
                .map(|text| Slot {
                    text,
                    state: SlotState::Unselected,
                })
                .collect::<Vec<Slot>>()
        });
        let [english, pinyin, hanzi] = columns;
        Some(Self {
            english,
            pinyin,
            hanzi,
        })
    }

    /// Number of words per column.
    pub fn round_size(&self) -> usize {
        self.english.len()
    }

    pub fn column(&self, column: Column) -> &[Slot] {
        match column {
            Column::English => &self.english,
            Column::Pinyin => &self.pinyin,
            Column::Hanzi => &self.hanzi,
        }
    }

    pub fn slot(&self, slot: SlotRef) -> Option<&Slot> {
        self.column(slot.column).get(slot.index)
    }

    pub fn set_state(&mut self, slot: SlotRef, state: SlotState) {
        let column = match slot.column {
            Column::English => &mut self.english,
            Column::Pinyin => &mut self.pinyin,
            Column::Hanzi => &mut self.hanzi,
        };
        if let Some(slot) = column.get_mut(slot.index) {
            slot.state = state;
        }
    }

    /// Locates a displayed word by exact text within one column.
    pub fn find_slot(&self, column: Column, text: &str) -> Option<SlotRef> {
        self.column(column)
            .iter()
            .position(|slot| slot.text == text)
            .map(|index| SlotRef { column, index })
    }

    #[cfg(test)]
    pub fn rig(entries: &[VocabularyEntry]) -> Self {
        // Aligned, unshuffled board for deterministic tests.
        let column = |field: fn(&VocabularyEntry) -> &str| -> Vec<Slot> {
            entries
                .iter()
                .map(|entry| Slot {
                    text: field(entry).to_owned(),
                    state: SlotState::Unselected,
                })
                .collect()
        };
        Self {
            english: column(|entry| &entry.english),
            pinyin: column(|entry| &entry.pinyin),
            hanzi: column(|entry| &entry.hanzi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank(count: usize) -> WordBank {
        let entries = (0..count)
            .map(|i| VocabularyEntry::new(format!("en{i}"), format!("py{i}"), format!("hz{i}")))
            .collect();
        WordBank::new(entries)
    }

    #[test]
    fn columns_have_equal_length_capped_at_five() {
        for (bank_size, expected) in [(1, 1), (3, 3), (5, 5), (9, 5)] {
            let board = Board::generate(&small_bank(bank_size)).unwrap();
            assert_eq!(board.round_size(), expected);
            for column in Column::ORDER {
                assert_eq!(board.column(column).len(), expected, "{column}");
            }
        }
    }

    #[test]
    fn empty_bank_produces_no_board() {
        assert!(Board::generate(&small_bank(0)).is_none());
    }

    #[test]
    fn each_column_holds_fields_of_the_same_drawn_entries() {
        let bank = small_bank(4);
        let board = Board::generate(&bank).unwrap();
        // Recover which entry each english word belongs to and check its
        // pinyin and hanzi forms appear in their columns too.
        for slot in board.column(Column::English) {
            let entry = bank
                .entries()
                .iter()
                .find(|entry| entry.english == slot.text)
                .expect("displayed word comes from the bank");
            assert!(board.find_slot(Column::Pinyin, &entry.pinyin).is_some());
            assert!(board.find_slot(Column::Hanzi, &entry.hanzi).is_some());
        }
    }

    #[test]
    fn all_slots_start_unselected() {
        let board = Board::generate(&small_bank(5)).unwrap();
        for column in Column::ORDER {
            assert!(board
                .column(column)
                .iter()
                .all(|slot| slot.state == SlotState::Unselected));
        }
    }
}
