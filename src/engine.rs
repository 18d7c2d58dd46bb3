//! Command dispatch: one inbound line in, one reply out, never a failure.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use strsim::levenshtein;

use crate::commands::{self, Command, KEYWORDS};
use crate::config::Config;
use crate::errors::{EngineError, ParseError, StoreError};
use crate::ledger::{Expense, LedgerStore};
use crate::reply::ReplyFormatter;
use crate::report::{filter, summarize};

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

/// Synchronous command engine over a single ledger store.
pub struct Engine {
    store: LedgerStore,
    replies: ReplyFormatter,
}

impl Engine {
    pub fn new(store: LedgerStore, config: &Config) -> Self {
        Self {
            store,
            replies: ReplyFormatter::new(config.currency.clone()),
        }
    }

    pub fn ledger_path(&self) -> &Path {
        self.store.path()
    }

    /// Handles one chat line with the wall clock as reference time.
    pub fn handle(&self, line: &str) -> String {
        self.handle_at(line, Local::now().naive_local())
    }

    /// Handles one chat line against an explicit reference time. Every
    /// failure becomes a guidance reply; nothing propagates.
    pub fn handle_at(&self, line: &str, now: NaiveDateTime) -> String {
        match commands::parse(line, now) {
            Ok(command) => {
                tracing::info!(?command, "dispatching command");
                self.dispatch(command, now).unwrap_or_else(|err| {
                    tracing::warn!("command failed: {err}");
                    self.replies.guidance(&err)
                })
            }
            Err(ParseError::UnknownCommand(raw)) => {
                tracing::info!(line = %raw, "unknown command");
                self.replies.unknown(suggest(&raw))
            }
            Err(err) => {
                tracing::info!("rejected command line: {err}");
                self.replies.guidance(&EngineError::Parse(err))
            }
        }
    }

    fn dispatch(&self, command: Command, now: NaiveDateTime) -> Result<String, EngineError> {
        match command {
            Command::Greeting => Ok(self.replies.greeting()),
            Command::ListRecent => {
                let ledger = self.store.load();
                if ledger.is_empty() {
                    return Ok(self.replies.empty_ledger());
                }
                Ok(self.replies.list(&summarize(&ledger)))
            }
            Command::Total => {
                let ledger = self.store.load();
                Ok(self.replies.total(summarize(&ledger).total))
            }
            Command::Add {
                description,
                amount,
                category,
                date,
            } => {
                let expense = Expense::new(&description, amount, category.as_deref(), date);
                let saved = self.store.append(expense)?;
                Ok(self.replies.added(&saved))
            }
            // Emptiness is decided by remove_last itself, under the store
            // lock; a separate load-then-check would race a concurrent
            // cancel into an out-of-bounds reply.
            Command::Cancel => match self.store.remove_last() {
                Ok(removed) => Ok(self.replies.cancelled(&removed)),
                Err(StoreError::OutOfBounds { len: 0, .. }) => Ok(self.replies.empty_ledger()),
                Err(err) => Err(err.into()),
            },
            Command::Delete { index } => {
                let removed = self.store.remove_at(index)?;
                Ok(self.replies.deleted(index, &removed))
            }
            Command::Modify {
                index,
                amount,
                category,
            } => {
                let updated = self.store.update_at(index, amount, category)?;
                Ok(self.replies.modified(index, &updated))
            }
            Command::Report { period } => {
                let ledger = self.store.load();
                let matched = filter(&period, &ledger, now)?;
                Ok(self.replies.report(&period, &summarize(&matched)))
            }
        }
    }
}

/// Nearest known keyword to the first word of an unrecognized line.
fn suggest(raw: &str) -> Option<&'static str> {
    let first_word = raw.split_whitespace().next()?.to_lowercase();
    KEYWORDS
        .iter()
        .map(|keyword| (levenshtein(keyword.trim_end_matches(':'), &first_word), *keyword))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, keyword)| keyword)
}
