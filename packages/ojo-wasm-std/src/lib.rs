pub use crate::error::ContractError;
pub use crate::fn_ext::FnExt;
#[cfg(feature = "derive")]
pub use ojo_wasm_std_derive::IntoContractError;

pub mod address;
pub mod error;
mod fn_ext;
pub mod loggable;
pub mod nonempty;
pub mod response;
