//! History domain module

mod ledger;
mod translation;

pub use ledger::{HistoryLedger, HISTORY_CAPACITY};
pub use translation::{Translation, TranslationId, ID_LENGTH};
