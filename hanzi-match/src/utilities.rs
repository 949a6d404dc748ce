use std::io::{self, Write};

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Resolves typed text against a list of displayed words. Accepts only a
/// clear winner: an exact hit, or a close match well ahead of the runner-up.
pub fn closest_index(options: &[&str], typed: &str) -> Option<usize> {
    let typed = typed.to_lowercase();
    let mut scored = options
        .iter()
        .map(|option| strsim::jaro(&option.to_lowercase(), &typed))
        .enumerate()
        .collect::<Vec<(usize, f64)>>();
    // most similar at the start
    scored.sort_unstable_by(|(_, a), (_, b)| (-a).partial_cmp(&-b).unwrap());
    let (best, best_score) = *scored.first()?;
    if best_score == 1.0 {
        return Some(best);
    }
    let runner_up = scored.get(1).map(|(_, score)| *score).unwrap_or(0.0);
    if best_score > 0.9 && best_score - runner_up > 0.25 {
        Some(best)
    } else {
        None
    }
}
