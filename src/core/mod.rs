pub mod journal_manager;

pub use journal_manager::JournalManager;
