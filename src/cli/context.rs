use crate::{
    cli::{commands, output},
    config::ConfigManager,
    core::AppState,
    currency::CurrencyFormat,
    domain::{LedgerDocument, Transaction, TransactionDraft},
    errors::{CliError, LedgerError},
    storage::{JsonStore, LedgerStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Shared CLI runtime state: the store, the in-memory ledger, and formatting.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    store: JsonStore,
    state: AppState,
    currency: CurrencyFormat,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let store = JsonStore::new_default()?;
        let config = ConfigManager::new()?.load()?;
        let currency = CurrencyFormat::for_currency(&config.currency);
        let doc = store.seed_if_empty();
        Ok(Self {
            mode,
            running: true,
            store,
            state: AppState::new(doc),
            currency,
        })
    }

    pub fn prompt(&self) -> String {
        "crimson> ".to_string()
    }

    pub fn command_names() -> Vec<&'static str> {
        commands::COMMANDS.iter().map(|c| c.name).collect()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn store(&self) -> &dyn LedgerStore {
        &self.store
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Mutation entry points borrow the store and state together so the
    /// persistence call always sees the freshly mutated document.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<u64, LedgerError> {
        let Self { store, state, .. } = self;
        state.add(&*store, draft)
    }

    pub fn remove_transaction(&mut self, id: u64) -> Result<Transaction, LedgerError> {
        let Self { store, state, .. } = self;
        state.remove(&*store, id)
    }

    pub fn import_document(&mut self, doc: LedgerDocument) {
        let Self { store, state, .. } = self;
        state.replace_document(&*store, doc);
    }

    /// Drops the in-memory document after the persisted one has been cleared.
    pub fn reset_state(&mut self) {
        self.state = AppState::new(LedgerDocument::default());
    }

    pub fn report_error(&self, err: CliError) {
        output::error(err);
    }
}
