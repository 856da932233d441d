//! Plain-text bracket rendering.
//!
//! The first round is drawn from the pairing in the order the matcher
//! returned it. Later rounds pair the winners of consecutive matches until
//! a final is reached.

use std::fmt::Write;

use bracketforge_core::Pairing;

/// Renders `pairing` as a connector tree.
///
/// # Example
///
/// ```
/// use bracketforge_core::{Matchup, Pairing, Team};
/// use bracketforge_console::render_bracket;
///
/// let a = Team::new("Team A", "D1", 10).unwrap();
/// let b = Team::new("Team B", "D2", 15).unwrap();
/// let text = render_bracket(&Pairing::new(vec![Matchup::new(&b, &a)]));
///
/// assert!(text.starts_with("Final\n"));
/// assert!(text.contains("├── Match 1"));
/// ```
pub fn render_bracket(pairing: &Pairing<'_>) -> String {
    let mut out = String::new();
    if pairing.is_empty() {
        return out;
    }

    let entrants: Vec<(String, String)> = pairing
        .iter()
        .map(|m| (m.home().to_string(), m.away().to_string()))
        .collect();

    let mut next_match = 1;
    let mut winners = draw_round(&mut out, 1, &entrants, &mut next_match);
    let mut round = 2;

    while winners.len() > 1 {
        if winners.len() % 2 != 0 {
            let _ = writeln!(out, "{} winners advance", winners.len());
            break;
        }

        let pairs: Vec<(String, String)> = winners
            .chunks(2)
            .map(|pair| (winner_label(pair[0]), winner_label(pair[1])))
            .collect();

        out.push('\n');
        winners = draw_round(&mut out, round, &pairs, &mut next_match);
        round += 1;
    }

    out
}

/// Draws one round and returns the numbers of its matches.
fn draw_round(
    out: &mut String,
    round: usize,
    pairs: &[(String, String)],
    next_match: &mut usize,
) -> Vec<usize> {
    let title = if pairs.len() == 1 {
        "Final".to_string()
    } else {
        format!("Round {}", round)
    };
    let _ = writeln!(out, "{}", title);

    let width = pairs
        .iter()
        .flat_map(|(home, away)| [home, away])
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut numbers = Vec::with_capacity(pairs.len());
    for (i, (home, away)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let number = *next_match;
        *next_match += 1;
        numbers.push(number);

        let _ = writeln!(out, "{:<width$} ──┐", home, width = width);
        let _ = writeln!(out, "{:<width$}   ├── Match {}", "", number, width = width);
        let _ = writeln!(out, "{:<width$} ──┘", away, width = width);
    }

    numbers
}

fn winner_label(number: usize) -> String {
    format!("Winner of Match {}", number)
}
