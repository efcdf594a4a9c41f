//! Interactive quiz loop
//!
//! Asks each question in turn, reading answers line by line. Every question
//! has its own deadline; when it passes the question closes unanswered.

use colored::Colorize;
use cosmos_domain::{AnswerOutcome, DomainError, QuizSession, QuizSummary};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::time::Instant;

/// Plays a [`QuizSession`] over a line-based input and a writer
pub struct QuizRunner<R, W> {
    input: Lines<R>,
    output: W,
    time_limit: Duration,
}

impl<R, W> QuizRunner<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W, time_limit: Duration) -> Self {
        Self {
            input: input.lines(),
            output,
            time_limit,
        }
    }

    /// Play every remaining question and return the tally.
    ///
    /// If the input closes mid-quiz the remaining questions count as timed out.
    pub async fn run(&mut self, session: &mut QuizSession) -> io::Result<QuizSummary> {
        let mut input_closed = false;

        while let Some(question) = session.current() {
            let number = session.current_index() + 1;
            let total = session.len();

            if input_closed {
                Self::close(session.time_up())?;
                continue;
            }

            writeln!(
                self.output,
                "\n{} {}",
                format!("Question {} of {}", number, total).cyan().bold(),
                format!(
                    "[{}, {} pt{}]",
                    question.difficulty,
                    question.difficulty.points(),
                    if question.difficulty.points() == 1 { "" } else { "s" }
                )
                .dimmed()
            )?;
            writeln!(self.output, "{}", question.question.bold())?;
            for (i, option) in question.options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, option)?;
            }

            // Limits too large to represent as an instant mean no deadline
            let deadline = Instant::now().checked_add(self.time_limit);
            let outcome = loop {
                write!(
                    self.output,
                    "Your answer (1-{}, {}s): ",
                    question.options.len(),
                    self.time_limit.as_secs()
                )?;
                self.output.flush()?;

                let line = match deadline {
                    Some(deadline) => {
                        tokio::time::timeout_at(deadline, self.input.next_line()).await
                    }
                    None => Ok(self.input.next_line().await),
                };

                match line {
                    Err(_) => {
                        writeln!(self.output)?;
                        writeln!(self.output, "{}", "Time's up!".yellow().bold())?;
                        break Self::close(session.time_up())?;
                    }
                    Ok(Ok(None)) => {
                        writeln!(self.output)?;
                        input_closed = true;
                        break Self::close(session.time_up())?;
                    }
                    Ok(Err(e)) => return Err(e),
                    Ok(Ok(Some(line))) => match session.resolve_answer(&line) {
                        Some(choice) => break Self::close(session.answer(&choice))?,
                        None => writeln!(
                            self.output,
                            "{}",
                            "Enter an option number or the option text.".dimmed()
                        )?,
                    },
                }
            };

            self.show_outcome(&outcome)?;
        }

        Ok(session.summary())
    }

    /// Ask for a line of free text, e.g. the player's name
    pub async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let line = self.input.next_line().await?;
        Ok(line
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn show_outcome(&mut self, outcome: &AnswerOutcome) -> io::Result<()> {
        if outcome.correct {
            writeln!(
                self.output,
                "{} +{}",
                "Correct!".green().bold(),
                outcome.points
            )?;
        } else {
            writeln!(
                self.output,
                "{} The answer was {}.",
                "Not quite.".red().bold(),
                outcome.correct_answer.bold()
            )?;
        }
        if !outcome.explanation.is_empty() {
            writeln!(self.output, "{}", outcome.explanation.dimmed())?;
        }
        Ok(())
    }

    fn close(result: Result<AnswerOutcome, DomainError>) -> io::Result<AnswerOutcome> {
        result.map_err(io::Error::other)
    }
}
