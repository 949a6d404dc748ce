use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use wordbank::{Column, VocabularyEntry, WordBank, BANK_FILENAME};

use crate::board::{SlotRef, SlotState};
use crate::game::{Game, Outcome, MATCH_REWARD, MISMATCH_PENALTY};
use crate::utilities::{closest_index, input};

mod board;
mod game;
mod utilities;

const MISMATCH_REVERT_DELAY: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let game = Arc::new(Mutex::new(Game::new(WordBank::seed())?));
    let mut round_token = CancellationToken::new();
    start_tick(&game, &round_token);

    print_help();
    print_board(&*game.lock().await);
    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                    break;
                }
                "pick" | "select" | "p" => {
                    let args = command_parts.collect::<Vec<&str>>();
                    pick_word(&game, &round_token, &args).await;
                }
                "board" | "show" | "b" => {
                    print_board(&*game.lock().await);
                }
                "add" => {
                    add_word(&game).await?;
                }
                "download" | "export" => {
                    let path = command_parts.next().unwrap_or(BANK_FILENAME);
                    download_words(&game, path).await;
                }
                "upload" | "import" => match command_parts.next() {
                    Some(path) => upload_words(&game, &mut round_token, path).await,
                    None => println!("Usage: upload <file>"),
                },
                "restart" => {
                    restart_game(&game, &mut round_token).await;
                }
                "help" | "h" => {
                    print_help();
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    round_token.cancel();
    Ok(())
}

/// One repeating tick per round; stops when the round token is cancelled.
fn start_tick(game: &Arc<Mutex<Game>>, round_token: &CancellationToken) {
    let game = game.clone();
    let token = round_token.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // the first tick completes immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = interval.tick() => game.lock().await.tick(),
            }
        }
    });
}

/// Clears the incorrect highlight from a failed triple after the delay,
/// unless the round is torn down first.
fn schedule_revert(game: Arc<Mutex<Game>>, round_token: CancellationToken, slots: [SlotRef; 3]) {
    tokio::spawn(async move {
        tokio::select! {
            _ = round_token.cancelled() => {}
            _ = tokio::time::sleep(MISMATCH_REVERT_DELAY) => {
                game.lock().await.revert(slots);
            }
        }
    });
}

async fn pick_word(game: &Arc<Mutex<Game>>, round_token: &CancellationToken, args: &[&str]) {
    let Some((&column_arg, word_args)) = args.split_first() else {
        println!("Usage: pick <english|pinyin|hanzi> <word or number>");
        return;
    };
    let Some(column) = parse_column(column_arg) else {
        println!("Unknown column {column_arg}. Use english, pinyin or hanzi.");
        return;
    };
    if word_args.is_empty() {
        println!("Usage: pick <english|pinyin|hanzi> <word or number>");
        return;
    }
    let word = word_args.join(" ");

    let mut game_guard = game.lock().await;
    let Some(slot) = resolve_slot(&game_guard, column, &word) else {
        println!("Couldn't find '{word}' in the {column} column.");
        return;
    };
    match game_guard.select(slot) {
        Outcome::Picked => {
            let picked = game_guard
                .board()
                .slot(slot)
                .map(|slot| &slot.text[..])
                .unwrap_or(&word);
            println!("Selected '{picked}'.");
        }
        Outcome::OutOfOrder { expected } => {
            println!(
                "Please select a word from the {expected} column {}.",
                order_hint(expected)
            );
        }
        Outcome::AlreadySelected => {}
        Outcome::Matched { game_over } => {
            println!("Correct match! +{MATCH_REWARD} points.");
            if game_over {
                round_token.cancel();
                println!("Game Over! Your final score is {}", game_guard.score());
            } else {
                println!("Score: {}", game_guard.score());
            }
        }
        Outcome::Mismatched { slots } => {
            println!("Not a match. -{MISMATCH_PENALTY} points.");
            println!("Score: {}", game_guard.score());
            schedule_revert(game.clone(), round_token.clone(), slots);
        }
        Outcome::Finished => {
            println!("The round is over. Type restart to play again.");
        }
    }
}

/// A pick argument may be the 1-based row number, the exact word, or close
/// enough to one word that it cannot mean another.
fn resolve_slot(game: &Game, column: Column, word: &str) -> Option<SlotRef> {
    let slots = game.board().column(column);
    if let Ok(number) = word.parse::<usize>() {
        if (1..=slots.len()).contains(&number) {
            return Some(SlotRef {
                column,
                index: number - 1,
            });
        }
        return None;
    }
    if let Some(slot) = game.board().find_slot(column, word) {
        return Some(slot);
    }
    let texts = slots.iter().map(|slot| &slot.text[..]).collect::<Vec<&str>>();
    closest_index(&texts, word).map(|index| SlotRef { column, index })
}

fn parse_column(text: &str) -> Option<Column> {
    match text.to_lowercase().as_str() {
        "english" | "en" | "e" => Some(Column::English),
        "pinyin" | "py" | "p" => Some(Column::Pinyin),
        "hanzi" | "characters" | "hz" | "h" | "c" => Some(Column::Hanzi),
        _ => None,
    }
}

fn order_hint(column: Column) -> &'static str {
    match column {
        Column::English => "first",
        Column::Pinyin => "next",
        Column::Hanzi => "last",
    }
}

async fn restart_game(game: &Arc<Mutex<Game>>, round_token: &mut CancellationToken) {
    // Tears down the tick and any pending mismatch reversions.
    round_token.cancel();
    *round_token = CancellationToken::new();
    let mut game_guard = game.lock().await;
    match game_guard.restart() {
        Ok(()) => {
            start_tick(game, round_token);
            print_board(&game_guard);
        }
        Err(error) => {
            println!("Can't start a round: {error}.");
        }
    }
}

async fn add_word(game: &Arc<Mutex<Game>>) -> anyhow::Result<()> {
    let Some(english) = prompt_field("Enter the English word: ")? else {
        return Ok(());
    };
    let Some(pinyin) = prompt_field("Enter the Chinese (Pinyin): ")? else {
        return Ok(());
    };
    let Some(hanzi) = prompt_field("Enter the Chinese Characters: ")? else {
        return Ok(());
    };
    game.lock()
        .await
        .add_entry(VocabularyEntry::new(english, pinyin, hanzi));
    println!("New word added to the database!");
    Ok(())
}

/// Leaving any field empty aborts the whole addition without mutation.
fn prompt_field(prompt: &str) -> anyhow::Result<Option<String>> {
    let value = input(prompt)?;
    let value = value.trim();
    if value.is_empty() {
        println!("Cancelled, no word was added.");
        Ok(None)
    } else {
        Ok(Some(value.to_owned()))
    }
}

async fn download_words(game: &Arc<Mutex<Game>>, path: &str) {
    let json = match game.lock().await.bank().to_json() {
        Ok(json) => json,
        Err(error) => {
            eprintln!("Failed to serialize the word database: {error}");
            return;
        }
    };
    match tokio::fs::write(path, json).await {
        Ok(()) => println!("Saved the word database to {path}."),
        Err(error) => eprintln!("Failed to write {path}: {error}"),
    }
}

async fn upload_words(game: &Arc<Mutex<Game>>, round_token: &mut CancellationToken, path: &str) {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(error) => {
            println!("Couldn't read {path}: {error}");
            return;
        }
    };
    let entries = match WordBank::parse(&text) {
        Ok(entries) => entries,
        Err(error) => {
            println!("{error}. The word database was left unchanged.");
            return;
        }
    };
    let mut game_guard = game.lock().await;
    if let Err(error) = game_guard.replace_bank(entries) {
        println!("Import rejected: {error}. The word database was left unchanged.");
        return;
    }
    round_token.cancel();
    *round_token = CancellationToken::new();
    start_tick(game, round_token);
    println!("Words database updated!");
    print_board(&game_guard);
}

fn print_board(game: &Game) {
    println!("Time: {}s    Score: {}", game.elapsed_secs(), game.score());
    for column in Column::ORDER {
        println!("{column}:");
        for (index, slot) in game.board().column(column).iter().enumerate() {
            let marker = match slot.state {
                SlotState::Unselected => ' ',
                SlotState::Selected => '*',
                SlotState::Correct => '+',
                SlotState::Incorrect => 'x',
            };
            println!("  [{marker}] {}. {}", index + 1, slot.text);
        }
    }
    if game.finished() {
        println!("The round is over. Type restart to play again.");
    }
}

fn print_help() {
    println!("Match each English word with its pinyin and characters.");
    println!("Commands:");
    println!("  pick <english|pinyin|hanzi> <word or number>");
    println!("  board                show the columns, time and score");
    println!("  add                  add a new word to the database");
    println!("  download [file]      save the word database (default {BANK_FILENAME})");
    println!("  upload <file>        load a word database and restart");
    println!("  restart              start a new round");
    println!("  exit                 leave the game");
}
