use std::error::Error;
use std::fmt;

use wordbank::{Column, VocabularyEntry, WordBank};

use crate::board::{Board, SlotRef, SlotState};

pub const MATCH_REWARD: i64 = 10;
pub const MISMATCH_PENALTY: i64 = 5;

#[derive(Debug)]
pub enum GameError {
    EmptyBank,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyBank => write!(f, "the word database has no entries to play with"),
        }
    }
}

impl Error for GameError {}

/// What happened to one selection attempt. The interface layer decides how to
/// present each case; the game itself never talks to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted, the triple is not complete yet.
    Picked,
    /// Wrong column for the current position in the triple. No state change.
    OutOfOrder { expected: Column },
    /// The word is not available for selection. Silently ignored.
    AlreadySelected,
    /// The completed triple identified a stored entry.
    Matched { game_over: bool },
    /// The completed triple matched nothing. The slots should be reverted
    /// after the mismatch delay.
    Mismatched { slots: [SlotRef; 3] },
    /// The round is already over; selections are ignored until restart.
    Finished,
}

#[derive(Debug, Clone)]
struct Pick {
    text: String,
    slot: SlotRef,
}

/// One play session: the word bank, the current round's board, the in-flight
/// triple, and the score/time counters.
pub struct Game {
    bank: WordBank,
    board: Board,
    picks: Vec<Pick>,
    score: i64,
    elapsed_secs: u64,
    matched_slots: usize,
    finished: bool,
}

impl Game {
    pub fn new(bank: WordBank) -> Result<Self, GameError> {
        let board = Board::generate(&bank).ok_or(GameError::EmptyBank)?;
        Ok(Self {
            bank,
            board,
            picks: Vec::new(),
            score: 0,
            elapsed_secs: 0,
            matched_slots: 0,
            finished: false,
        })
    }

    /// Aligned, unshuffled board so tests can address slots by entry index.
    #[cfg(test)]
    pub fn rigged(bank: WordBank) -> Self {
        Self {
            board: Board::rig(bank.entries()),
            bank,
            picks: Vec::new(),
            score: 0,
            elapsed_secs: 0,
            matched_slots: 0,
            finished: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Attempts to select one displayed word. Columns must be picked in the
    /// order English, pinyin, hanzi; the third accepted pick validates the
    /// triple synchronously and clears it regardless of the result.
    pub fn select(&mut self, slot: SlotRef) -> Outcome {
        if self.finished {
            return Outcome::Finished;
        }
        let expected = Column::ORDER[self.picks.len()];
        if slot.column != expected {
            return Outcome::OutOfOrder { expected };
        }
        // Out-of-range picks are ignored the same way re-selections are.
        let Some(current) = self.board.slot(slot) else {
            return Outcome::AlreadySelected;
        };
        if current.state != SlotState::Unselected {
            return Outcome::AlreadySelected;
        }
        let text = current.text.clone();
        self.board.set_state(slot, SlotState::Selected);
        self.picks.push(Pick { text, slot });
        if self.picks.len() < Column::ORDER.len() {
            return Outcome::Picked;
        }
        self.check_match()
    }

    fn check_match(&mut self) -> Outcome {
        let picks = std::mem::take(&mut self.picks);
        let slots = [picks[0].slot, picks[1].slot, picks[2].slot];
        let matched = self
            .bank
            .find_match(&picks[0].text, &picks[1].text, &picks[2].text)
            .is_some();
        if matched {
            for slot in slots {
                self.board.set_state(slot, SlotState::Correct);
            }
            self.score += MATCH_REWARD;
            self.matched_slots += slots.len();
            let game_over = self.matched_slots == Column::ORDER.len() * self.board.round_size();
            if game_over {
                self.finished = true;
            }
            Outcome::Matched { game_over }
        } else {
            for slot in slots {
                self.board.set_state(slot, SlotState::Incorrect);
            }
            self.score -= MISMATCH_PENALTY;
            Outcome::Mismatched { slots }
        }
    }

    /// Clears the incorrect highlight from a failed triple, making the words
    /// selectable again. Only slots still marked incorrect are touched, so a
    /// reversion firing late cannot clobber a fresh board.
    pub fn revert(&mut self, slots: [SlotRef; 3]) {
        for slot in slots {
            if self
                .board
                .slot(slot)
                .is_some_and(|slot| slot.state == SlotState::Incorrect)
            {
                self.board.set_state(slot, SlotState::Unselected);
            }
        }
    }

    /// One second of play time. Stops counting once the round is over.
    pub fn tick(&mut self) {
        if !self.finished {
            self.elapsed_secs += 1;
        }
    }

    /// Zeroes the counters and deals a fresh round from the current bank.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.board = Board::generate(&self.bank).ok_or(GameError::EmptyBank)?;
        self.picks.clear();
        self.score = 0;
        self.elapsed_secs = 0;
        self.matched_slots = 0;
        self.finished = false;
        Ok(())
    }

    pub fn add_entry(&mut self, entry: VocabularyEntry) {
        self.bank.append(entry);
    }

    /// Import path: installs the parsed entries and restarts. An empty
    /// document is rejected before anything is replaced, leaving both the
    /// bank and the running round untouched.
    pub fn replace_bank(&mut self, entries: Vec<VocabularyEntry>) -> Result<(), GameError> {
        if entries.is_empty() {
            return Err(GameError::EmptyBank);
        }
        self.bank.replace_all(entries);
        self.restart()
    }
}
