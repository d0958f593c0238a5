//! Contact directory: the store intake forms hand accepted records to.

mod in_memory;
mod traits;

pub use in_memory::InMemoryDirectory;
pub use traits::ContactDirectory;
