use alloy_primitives::U256;
use alloy_sol_types::{sol, SolValue};
use cosmwasm_std::HexBinary;
use error_stack::{ensure, Result, ResultExt};
use ojo_wasm_std::IntoContractError;

/// Hard cap on the denom list, so a hostile payload cannot claim an absurd
/// element count.
pub const DENOM_LIMIT: usize = 100;

/// The five fixed head words of the encoding.
const MIN_PAYLOAD_LEN: usize = 160;

// Wire format of a price request, fixed as the ABI params encoding of this
// struct. Requesting contracts on the source chains encode with `abi.encode`,
// so both sides must agree byte-exactly.
sol! {
    struct PriceRequest {
        address contractAddress;
        string[] denoms;
        bytes4 commandSelector;
        bytes commandParams;
        uint256 timestamp;
    }
}

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error("insufficient payload length")]
    InsufficientPayloadLength,
    #[error("payload is not the canonical encoding of its message")]
    NonCanonicalPayload,
    #[error("too many denoms, found {0}")]
    TooManyDenoms(usize),
    #[error("timestamp does not fit into 64 signed bits")]
    TimestampOutOfRange,
    #[error(transparent)]
    AbiDecodeFailed(#[from] alloy_sol_types::Error),
}

/// A fully decoded general message requesting a price relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GmpMessage {
    pub contract_address: alloy_primitives::Address,
    pub denoms: Vec<String>,
    pub command_selector: [u8; 4],
    pub command_params: HexBinary,
    pub timestamp: i64,
}

pub fn message_abi_decode(payload: &[u8]) -> Result<GmpMessage, Error> {
    ensure!(
        payload.len() >= MIN_PAYLOAD_LEN,
        Error::InsufficientPayloadLength
    );

    let decoded =
        PriceRequest::abi_decode_params(payload, true).map_err(Error::AbiDecodeFailed)?;

    // only the canonical encoding is accepted, and it must be consumed
    // exactly: distinct payloads never alias to the same message
    ensure!(
        decoded.abi_encode_params() == payload,
        Error::NonCanonicalPayload
    );

    ensure!(
        decoded.denoms.len() <= DENOM_LIMIT,
        Error::TooManyDenoms(decoded.denoms.len())
    );

    let timestamp = u64::try_from(decoded.timestamp)
        .change_context(Error::TimestampOutOfRange)?;
    let timestamp = i64::try_from(timestamp).change_context(Error::TimestampOutOfRange)?;

    Ok(GmpMessage {
        contract_address: decoded.contractAddress,
        denoms: decoded.denoms,
        command_selector: decoded.commandSelector.into(),
        command_params: decoded.commandParams.to_vec().into(),
        timestamp,
    })
}

pub fn message_abi_encode(message: GmpMessage) -> Result<HexBinary, Error> {
    let timestamp = u64::try_from(message.timestamp).change_context(Error::TimestampOutOfRange)?;

    Ok(PriceRequest {
        contractAddress: message.contract_address,
        denoms: message.denoms,
        commandSelector: message.command_selector.into(),
        commandParams: message.command_params.to_vec().into(),
        timestamp: U256::from(timestamp),
    }
    .abi_encode_params()
    .into())
}
