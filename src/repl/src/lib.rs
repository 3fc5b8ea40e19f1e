//! Line-by-line prompt loop that answers whether each entered number is prime.

use {
    derive_more::Display,
    log::{debug, info},
    primality::Verdict,
    std::io::{self, BufRead, Write},
};

pub const PROMPT: &str = "-> ";
pub const QUIT_TOKEN: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// A single line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Number(i64),
    Malformed,
}

impl From<&str> for Input {
    fn from(line: &str) -> Self {
        let line = line.trim();
        if line == QUIT_TOKEN {
            Input::Quit
        } else {
            line.parse().map_or(Input::Malformed, Input::Number)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Reply {
    #[display("Please enter a whole number!")]
    Malformed,
    #[display("{_0}")]
    Checked(Verdict),
}

impl From<Verdict> for Reply {
    fn from(verdict: Verdict) -> Self {
        Reply::Checked(verdict)
    }
}

/// What to print for `input`, or `None` if it ends the session.
pub fn reply(input: Input) -> Option<Reply> {
    match input {
        Input::Quit => None,
        Input::Number(n) => Some(primality::check(n).into()),
        Input::Malformed => Some(Reply::Malformed),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Replied(Reply),
    Quit,
    EndOfInput,
}

impl Turn {
    pub fn state(&self) -> State {
        match self {
            Turn::Replied(_) => State::Running,
            Turn::Quit | Turn::EndOfInput => State::Terminated,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Turn::Replied(reply) => reply.to_string(),
            Turn::Quit | Turn::EndOfInput => String::new(),
        }
    }
}

pub fn prompt(stdout: &mut impl Write) -> io::Result<()> {
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.flush()
}

/// Reads one line from `stdin` and decides what it means. Does not write
/// anything.
pub fn check_numbers(stdin: &mut impl BufRead) -> io::Result<Turn> {
    let mut buf = Vec::new();
    if stdin.read_until(b'\n', &mut buf)? == 0 {
        debug!("end of input");
        return Ok(Turn::EndOfInput);
    }
    // invalid UTF-8 never parses as a number, so lossy decoding only ever
    // turns it into malformed input
    let decoded = String::from_utf8_lossy(&buf);
    let line = decoded
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(&*decoded);
    debug!("read line {line:?}");
    let input = Input::from(line);
    Ok(match reply(input) {
        Some(reply) => {
            debug!("{input:?} -> {reply:?}");
            Turn::Replied(reply)
        }
        None => Turn::Quit,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub lines: usize,
    pub checked: usize,
    pub primes: usize,
    pub quit: bool,
}

impl Summary {
    fn record(&mut self, turn: &Turn) {
        match turn {
            Turn::Replied(reply) => {
                self.lines += 1;
                if let Reply::Checked(verdict) = reply {
                    self.checked += 1;
                    if verdict.is_prime() {
                        self.primes += 1;
                    }
                }
            }
            Turn::Quit => {
                self.lines += 1;
                self.quit = true;
            }
            Turn::EndOfInput => {}
        }
    }
}

/// Prompts, reads and answers lines until the quit token or end of input.
pub fn run(stdin: &mut impl BufRead, stdout: &mut impl Write) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut state = State::Running;
    while state == State::Running {
        prompt(stdout)?;
        let turn = check_numbers(stdin)?;
        summary.record(&turn);
        if let Turn::Replied(reply) = turn {
            writeln!(stdout, "{reply}")?;
            stdout.flush()?;
        }
        state = turn.state();
    }
    info!(
        "session ended by {}: {} lines, {} numbers checked, {} primes",
        if summary.quit { "quit" } else { "end of input" },
        summary.lines,
        summary.checked,
        summary.primes
    );
    Ok(summary)
}
