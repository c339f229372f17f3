pub mod client;
mod msg;
mod primitives;

pub use msg::ExecuteMsg;
pub use primitives::{Error, RelayCommand, COMMAND_SELECTOR_LEN};
