use std::{
    env, fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{Datelike, Local, NaiveDate};

use crate::{
    domain::{LedgerDocument, Transaction, TransactionKind},
    errors::LedgerError,
};

use super::{LedgerStore, Result};

const DEFAULT_DIR_NAME: &str = ".crimson_ledger";
const LEDGER_FILE: &str = "crimson_ledger_v1.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.crimson_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CRIMSON_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-backed store for the ledger document, one pretty-printed JSON file.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
    ledger_file: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let ledger_file = root.join(LEDGER_FILE);
        Ok(Self { root, ledger_file })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_file
    }
}

impl LedgerStore for JsonStore {
    fn load(&self) -> LedgerDocument {
        if !self.ledger_file.exists() {
            return LedgerDocument::default();
        }
        let raw = match fs::read_to_string(&self.ledger_file) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(
                    path = %self.ledger_file.display(),
                    %err,
                    "failed to read ledger file, starting empty"
                );
                return LedgerDocument::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::error!(
                    path = %self.ledger_file.display(),
                    %err,
                    "failed to parse ledger file, starting empty"
                );
                LedgerDocument::default()
            }
        }
    }

    fn save(&self, doc: &LedgerDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        let tmp = tmp_path(&self.ledger_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.ledger_file)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.ledger_file.exists() {
            fs::remove_file(&self.ledger_file)?;
        }
        Ok(())
    }

    fn seed_if_empty(&self) -> LedgerDocument {
        let doc = self.load();
        if !doc.is_empty() {
            return doc;
        }
        let seeded = LedgerDocument {
            transactions: sample_transactions(Local::now().date_naive()),
        };
        if let Err(err) = self.save(&seeded) {
            tracing::error!(%err, "failed to persist seed data");
        }
        seeded
    }

    fn export_to_path(&self, doc: &LedgerDocument, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        write_atomic(path, &json)?;
        Ok(())
    }

    fn import_from_path(&self, path: &Path) -> Result<LedgerDocument> {
        let raw = fs::read_to_string(path)
            .map_err(|err| LedgerError::Import(format!("cannot read `{}`: {err}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|err| LedgerError::Import(format!("invalid ledger file: {err}")))
    }
}

/// Demo data written on first run, dated inside the current month.
fn sample_transactions(today: NaiveDate) -> Vec<Transaction> {
    let on = |day: u32| today.with_day(day).unwrap_or(today);
    let sample = |id, kind, category: &str, amount, day, note: &str| Transaction {
        id,
        kind,
        category: category.into(),
        amount,
        date: on(day),
        note: note.into(),
    };
    vec![
        sample(1, TransactionKind::Income, "Salary", 2500.0, 1, "Monthly salary"),
        sample(2, TransactionKind::Expense, "Rent", 900.0, 3, "Apartment rent"),
        sample(3, TransactionKind::Expense, "Groceries", 160.45, 7, "Weekly groceries"),
        sample(4, TransactionKind::Expense, "Transport", 45.2, 9, "Gas and rides"),
        sample(5, TransactionKind::Income, "Freelance", 400.0, 12, "Side project"),
    ]
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
