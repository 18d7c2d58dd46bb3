use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::errors::StoreError;
use crate::ledger::Expense;
use crate::utils::{ensure_dir, ledger_file};

const TMP_SUFFIX: &str = "tmp";

type Result<T> = std::result::Result<T, StoreError>;

/// Owner of the persisted expense ledger.
///
/// Every mutation runs a full load-modify-save cycle under the internal
/// mutex, so concurrent callers cannot drop each other's updates. Saves go
/// through a temp file and a rename, keeping each mutation all-or-nothing
/// on disk.
pub struct LedgerStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Store backed by the default data directory (`~/.depensier`).
    pub fn open_default() -> Result<Self> {
        let path = ledger_file();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full ledger. A missing file means a fresh ledger; an
    /// unreadable or corrupt file degrades to an empty ledger and is
    /// logged, so the caller never sees a read failure.
    pub fn load(&self) -> Vec<Expense> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!("ledger at {} unreadable, treating as empty: {err}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(expenses) => expenses,
            Err(err) => {
                tracing::warn!("ledger at {} corrupt, treating as empty: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Appends a record and persists the whole sequence.
    pub fn append(&self, expense: Expense) -> Result<Expense> {
        let _guard = self.lock.lock().expect("ledger lock poisoned");
        let mut expenses = self.load();
        expenses.push(expense.clone());
        self.persist(&expenses)?;
        Ok(expense)
    }

    /// Removes the record at a 1-based position.
    pub fn remove_at(&self, index: usize) -> Result<Expense> {
        let _guard = self.lock.lock().expect("ledger lock poisoned");
        let mut expenses = self.load();
        check_bounds(index, expenses.len())?;
        let removed = expenses.remove(index - 1);
        self.persist(&expenses)?;
        Ok(removed)
    }

    /// Removes the most recently inserted record (index = length).
    pub fn remove_last(&self) -> Result<Expense> {
        let _guard = self.lock.lock().expect("ledger lock poisoned");
        let mut expenses = self.load();
        check_bounds(expenses.len(), expenses.len())?;
        let removed = expenses.pop().expect("bounds checked above");
        self.persist(&expenses)?;
        Ok(removed)
    }

    /// Updates only the supplied fields of the record at a 1-based
    /// position. Date and description are immutable after creation.
    pub fn update_at(
        &self,
        index: usize,
        amount: Option<f64>,
        category: Option<String>,
    ) -> Result<Expense> {
        let _guard = self.lock.lock().expect("ledger lock poisoned");
        let mut expenses = self.load();
        check_bounds(index, expenses.len())?;
        let expense = &mut expenses[index - 1];
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = category {
            expense.category = category;
        }
        let updated = expense.clone();
        self.persist(&expenses)?;
        Ok(updated)
    }

    /// Replaces the persisted sequence wholesale.
    pub fn replace_all(&self, expenses: Vec<Expense>) -> Result<()> {
        let _guard = self.lock.lock().expect("ledger lock poisoned");
        self.persist(&expenses)
    }

    fn persist(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(expenses)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index == 0 || index > len {
        return Err(StoreError::OutOfBounds { index, len });
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
