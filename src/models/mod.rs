mod book;
mod category;
mod entry;

pub use book::Book;
pub use category::Category;
pub use entry::LedgerEntry;
