//! Whitespace-delimited integer reader for the interactive transcript format.
//!
//! Layout, in order: the process count `n`, the `n x R` maximum matrix, the
//! `n x R` allocated matrix, then the `R` available units. Each prompt is
//! written (and flushed) before the values it asks for are read, so the
//! transcript looks the same whether stdin is a terminal or a pipe.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::config::BankerConfig;
use crate::domain::SystemState;
use crate::error::{BankerError, Result};
use crate::validation;

pub const PROMPT_PROCESS_COUNT: &str = "Enter number of processes:";
pub const PROMPT_MAXIMUM: &str = "Enter maximum requirement:\n";
pub const PROMPT_ALLOCATED: &str = "Enter allocated matrix:\n";
pub const PROMPT_AVAILABLE: &str = "Resource Vector:";

/// Pulls whitespace-separated tokens out of a reader one line at a time.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token as a non-negative integer; `what` names the value in errors.
    pub fn next_u64(&mut self, what: &str) -> Result<u64> {
        match self.next_token()? {
            None => Err(BankerError::InvalidInput(format!(
                "expected {what}, found end of input"
            ))),
            Some(tok) => tok.parse::<u64>().map_err(|_| {
                BankerError::InvalidInput(format!(
                    "expected {what} as a non-negative integer, found `{tok}`"
                ))
            }),
        }
    }

    fn next_row(&mut self, width: usize, what: &str) -> Result<Vec<u64>> {
        (0..width)
            .map(|j| self.next_u64(&format!("{what}[{j}]")))
            .collect()
    }

    fn next_matrix(&mut self, rows: usize, width: usize, name: &str) -> Result<Vec<Vec<u64>>> {
        (0..rows)
            .map(|i| self.next_row(width, &format!("{name}[{i}]")))
            .collect()
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Read a full allocation state, writing prompts to `prompts` as it goes.
///
/// Pass [`std::io::sink`] for `prompts` to read silently.
pub fn read_state<R: BufRead, W: Write>(
    input: R,
    prompts: &mut W,
    cfg: &BankerConfig,
) -> Result<SystemState> {
    let mut tokens = TokenReader::new(input);
    let width = cfg.resource_count;

    prompt(prompts, PROMPT_PROCESS_COUNT)?;
    let n = tokens.next_u64("number of processes")?;
    let n = usize::try_from(n).map_err(|_| {
        BankerError::InvalidInput(format!("number of processes {n} is not addressable"))
    })?;
    validation::validate_capacity(n, cfg.max_processes)?;

    prompt(prompts, PROMPT_MAXIMUM)?;
    let max = tokens.next_matrix(n, width, "max")?;

    prompt(prompts, PROMPT_ALLOCATED)?;
    let allocated = tokens.next_matrix(n, width, "allocated")?;

    prompt(prompts, PROMPT_AVAILABLE)?;
    let available = tokens.next_row(width, "available")?;

    log::debug!("read {n} processes over {width} resource types");
    SystemState::new(width, max, allocated, available)
}
