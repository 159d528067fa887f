mod account;
pub use self::account::AccountRecord;

mod page;
pub use self::page::{PageLinks, PageResponse};
