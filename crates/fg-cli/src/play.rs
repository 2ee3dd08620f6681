//! Interactive quiz loop over any line-based input and output.

use crate::error::{CliError, Result as CliResult};

use fg_core::GameRound;

use std::io::{BufRead, Write};

use rand::Rng;

/// Play `round` to the end, reading one answer per line.
///
/// Answers are 1-based. Lines that are not a number in range are rejected
/// and the question is asked again. End of input abandons the round.
pub fn play_round<R, I, O>(round: &mut GameRound<R>, input: &mut I, output: &mut O) -> CliResult<i64>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "Guess the Flag")?;

    while !round.is_finished() {
        let question = round.question();
        let answer = question.answer();
        writeln!(output)?;
        writeln!(
            output,
            "Question {} of {}",
            round.current_question(),
            round.total_questions()
        )?;
        writeln!(output, "Tap the flag of {}", answer.name())?;
        for (i, country) in question.choices.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, country.flag())?;
        }

        let choice = read_choice(input, output, question.choices.len())?;
        let picked = question.choices[choice];
        let outcome = round.answer(choice)?;

        if outcome.correct {
            writeln!(output, "Correct")?;
        } else {
            writeln!(
                output,
                "Wrong! That was the flag of {}, you were asked for {}",
                picked.name(),
                answer.name()
            )?;
        }

        if outcome.finished {
            writeln!(output, "Your final score is {}", outcome.score)?;
        } else {
            writeln!(output, "Your score is {}", outcome.score)?;
        }
    }

    Ok(round.score())
}

fn read_choice<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    available: usize,
) -> CliResult<usize> {
    let mut line = String::new();
    loop {
        write!(output, "Your answer (1-{available}): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(CliError::Abandoned);
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=available).contains(&n) => return Ok(n - 1),
            _ => writeln!(output, "Pick a flag between 1 and {available}.")?,
        }
    }
}
