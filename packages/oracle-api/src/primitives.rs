use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, HexBinary};
use error_stack::{ensure, Result};
use ojo_wasm_std::IntoContractError;

/// Length in bytes of the command selector tag.
pub const COMMAND_SELECTOR_LEN: usize = 4;

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error("denoms must not be empty")]
    EmptyDenoms,
    #[error("denom must not be an empty string")]
    EmptyDenom,
    #[error("client contract address must not be empty")]
    EmptyClientContractAddress,
    #[error("ojo contract address must not be empty")]
    EmptyOjoContractAddress,
    #[error("command selector must be exactly 4 bytes, found {0}")]
    InvalidCommandSelector(usize),
    #[error("timestamp must not be negative, found {0}")]
    NegativeTimestamp(i64),
    #[error("token denom must not be empty")]
    EmptyTokenDenom,
}

/// A price-relay instruction for the oracle: which denoms to publish, to which
/// client contract on which chain, and the raw command the client expects.
#[cw_serde]
pub struct RelayCommand {
    /// External address that submitted the originating message.
    pub relayer: String,
    /// Chain the relayed prices are destined for, i.e. the chain the request came from.
    pub destination_chain: String,
    /// Hex encoding of the price-consuming contract on the destination chain.
    pub client_contract_address: String,
    /// Counterpart contract address on this chain.
    pub ojo_contract_address: String,
    pub denoms: Vec<String>,
    pub command_selector: HexBinary,
    pub command_params: HexBinary,
    pub timestamp: i64,
    /// Funds attached to the originating message, if any.
    pub token: Option<Coin>,
}

impl RelayCommand {
    /// Structural checks a command must pass before it may be dispatched.
    /// Every violation names the offending field; nothing is coerced.
    pub fn validate(&self) -> Result<(), Error> {
        ensure!(!self.denoms.is_empty(), Error::EmptyDenoms);
        ensure!(
            self.denoms.iter().all(|denom| !denom.is_empty()),
            Error::EmptyDenom
        );
        ensure!(
            !self.client_contract_address.is_empty(),
            Error::EmptyClientContractAddress
        );
        ensure!(
            !self.ojo_contract_address.is_empty(),
            Error::EmptyOjoContractAddress
        );
        ensure!(
            self.command_selector.len() == COMMAND_SELECTOR_LEN,
            Error::InvalidCommandSelector(self.command_selector.len())
        );
        ensure!(
            self.timestamp >= 0,
            Error::NegativeTimestamp(self.timestamp)
        );

        // a token amount is unsigned by construction, only its denom can be malformed
        if let Some(token) = &self.token {
            ensure!(!token.denom.is_empty(), Error::EmptyTokenDenom);
        }

        Ok(())
    }
}
