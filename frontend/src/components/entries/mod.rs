pub mod entries_page;
pub mod entry_form;
pub mod entry_table;

pub use entries_page::EntriesPage;
pub use entry_form::EntryForm;
pub use entry_table::EntryTable;
