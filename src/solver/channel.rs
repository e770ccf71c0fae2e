//! Feedback channels
//!
//! The solve loop only needs to emit a word and receive one line of feedback.
//! Abstracting that exchange keeps the loop testable without a terminal.

use std::io::{self, BufRead, Write};

use super::engine::Proposal;
use crate::core::{Feedback, Word};
use crate::error::SolverError;

/// The two-way exchange with whoever knows the answer
pub trait FeedbackChannel {
    /// Present a proposed word
    ///
    /// # Errors
    /// Returns an error if the word cannot be delivered.
    fn emit(&mut self, proposal: &Proposal) -> Result<(), SolverError>;

    /// Wait for one line of feedback for the last emitted word
    ///
    /// # Errors
    /// Returns an error if no feedback can be obtained.
    fn receive(&mut self) -> Result<String, SolverError>;
}

/// Line-oriented channel over any reader and writer
///
/// Writes the word on its own line followed by a `> ` prompt, then reads a
/// single line. Trailing whitespace is stripped from the input.
pub struct LineChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineChannel<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> FeedbackChannel for LineChannel<R, W> {
    fn emit(&mut self, proposal: &Proposal) -> Result<(), SolverError> {
        writeln!(self.writer, "{}", proposal.word)?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<String, SolverError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end().to_string())
    }
}

/// One exchange recorded by [`TruthfulOracle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub proposal: Proposal,
    pub feedback: Feedback,
}

/// Answers every proposal with truthful feedback for a known target
#[derive(Debug, Clone)]
pub struct TruthfulOracle {
    target: Word,
    last: Option<Proposal>,
    transcript: Vec<Step>,
}

impl TruthfulOracle {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            last: None,
            transcript: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Every proposal answered so far, in order
    #[must_use]
    pub fn transcript(&self) -> &[Step] {
        &self.transcript
    }

    #[must_use]
    pub fn into_transcript(self) -> Vec<Step> {
        self.transcript
    }
}

impl FeedbackChannel for TruthfulOracle {
    fn emit(&mut self, proposal: &Proposal) -> Result<(), SolverError> {
        self.last = Some(proposal.clone());
        Ok(())
    }

    fn receive(&mut self) -> Result<String, SolverError> {
        let proposal = self.last.take().ok_or(SolverError::NoPendingGuess)?;
        let feedback = Feedback::score(&proposal.word, &self.target);
        let line = feedback.to_string();
        self.transcript.push(Step { proposal, feedback });
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRules;
    use std::io::Cursor;

    fn proposal(text: &str) -> Proposal {
        Proposal {
            word: Word::new(text, &WordRules::default()).unwrap(),
            round: 1,
            candidates: 10,
        }
    }

    #[test]
    fn line_channel_writes_word_and_reads_line() {
        let mut channel = LineChannel::new(Cursor::new("x?..x\r\n"), Vec::new());

        channel.emit(&proposal("crane")).unwrap();
        assert_eq!(channel.receive().unwrap(), "x?..x");

        let (_, written) = channel.into_inner();
        assert_eq!(String::from_utf8(written).unwrap(), "crane\n> ");
    }

    #[test]
    fn line_channel_reports_closed_input() {
        let mut channel = LineChannel::new(Cursor::new(""), Vec::new());
        assert!(matches!(channel.receive(), Err(SolverError::Io(_))));
    }

    #[test]
    fn oracle_scores_against_target() {
        let target = Word::new("angle", &WordRules::default()).unwrap();
        let mut oracle = TruthfulOracle::new(target);

        oracle.emit(&proposal("apple")).unwrap();
        assert_eq!(oracle.receive().unwrap(), ".xx..");
        assert_eq!(oracle.transcript().len(), 1);
        assert_eq!(oracle.transcript()[0].proposal.word.text(), "apple");
    }

    #[test]
    fn oracle_needs_a_proposal_first() {
        let target = Word::new("angle", &WordRules::default()).unwrap();
        let mut oracle = TruthfulOracle::new(target);
        assert!(matches!(oracle.receive(), Err(SolverError::NoPendingGuess)));
    }
}
