pub mod employee;
pub mod entry;
pub mod summary;

pub use employee::Employee;
pub use entry::{Entry, EntrySubmission, WorkDetails};
pub use summary::{Totals, TokenSummary};
