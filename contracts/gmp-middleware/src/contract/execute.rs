use cosmwasm_std::{Coin, DepsMut, HexBinary, MessageInfo, Response};
use error_stack::{ensure, Result, ResultExt};
use ojo_wasm_std::IntoContractError;
use oracle_api::client::Oracle;
use oracle_api::RelayCommand;

use crate::abi::{self, GmpMessage};
use crate::events::GmpMiddlewareEvent;
use crate::msg::Params;
use crate::state;

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error("caller is not the gateway")]
    CallerNotGateway,
    #[error("caller is not governance")]
    CallerNotGovernance,
    #[error("sender {0} is not an authorized gmp address")]
    UntrustedSender(String),
    #[error("channel {0} is not the authorized gmp channel")]
    UntrustedChannel(String),
    #[error("failed to decode payload")]
    InvalidPayload,
    #[error("relay command failed validation")]
    InvalidCommand,
    #[error("failed to access middleware storage")]
    StoreAccess,
}

/// Channel metadata of an incoming general message: where it came from, who
/// submitted it and which transport path it took.
pub(crate) struct GmpCall {
    pub source_chain: String,
    pub source_address: String,
    pub receiver: String,
    pub sender: String,
    pub channel: String,
}

/// The single message pipeline. Both entry points funnel through here; the
/// token variant only differs in the attached funds. Any failing stage aborts
/// the call before the oracle message is built into the response.
pub(crate) fn handle_message(
    deps: DepsMut,
    info: MessageInfo,
    call: GmpCall,
    payload: HexBinary,
    token: Option<Coin>,
) -> Result<Response, Error> {
    let config = state::load_config(deps.storage).change_context(Error::StoreAccess)?;
    ensure!(info.sender == config.gateway, Error::CallerNotGateway);

    let params = state::load_params(deps.storage).change_context(Error::StoreAccess)?;
    verify_trusted_source(&params, &call)?;

    let message = abi::message_abi_decode(payload.as_slice()).change_context(Error::InvalidPayload)?;

    let command = build_command(message, &call, token.clone());
    command.validate().change_context(Error::InvalidCommand)?;

    Ok(Response::new()
        .add_message(Oracle::new(config.oracle).relay_price(command))
        .add_event(
            GmpMiddlewareEvent::MessageReceived {
                source_chain: call.source_chain,
                source_address: call.source_address,
                receiver: call.receiver,
                payload,
                token,
            },
        ))
}

pub(crate) fn update_params(
    deps: DepsMut,
    info: MessageInfo,
    params: Params,
) -> Result<Response, Error> {
    let config = state::load_config(deps.storage).change_context(Error::StoreAccess)?;
    ensure!(info.sender == config.governance, Error::CallerNotGovernance);

    state::save_params(deps.storage, &params).change_context(Error::StoreAccess)?;

    Ok(Response::new().add_event(GmpMiddlewareEvent::ParamsUpdated { params }))
}

/// Pure check of the claimed sender identity and channel against the
/// configured allow-list. Matches are exact, nothing is normalized.
fn verify_trusted_source(params: &Params, call: &GmpCall) -> Result<(), Error> {
    ensure!(
        params
            .gmp_addresses
            .iter()
            .any(|address| **address == call.sender),
        Error::UntrustedSender(call.sender.clone())
    );
    ensure!(
        *params.gmp_channel == call.channel,
        Error::UntrustedChannel(call.channel.clone())
    );

    Ok(())
}

/// Field mapping only; structural checks live in [`RelayCommand::validate`].
fn build_command(message: GmpMessage, call: &GmpCall, token: Option<Coin>) -> RelayCommand {
    RelayCommand {
        relayer: call.source_address.clone(),
        destination_chain: call.source_chain.clone(),
        client_contract_address: message.contract_address.to_string(),
        // the submitting relayer's address doubles as the local contract address
        ojo_contract_address: call.source_address.clone(),
        denoms: message.denoms,
        command_selector: message.command_selector.to_vec().into(),
        command_params: message.command_params,
        timestamp: message.timestamp,
        token,
    }
}

#[cfg(test)]
mod tests {
    use ojo_wasm_std::assert_err_contains;

    use super::{verify_trusted_source, Error, GmpCall};
    use crate::msg::Params;

    fn trusted_params() -> Params {
        Params {
            gmp_addresses: vec!["relayerA".try_into().unwrap()],
            gmp_channel: "channel-7".try_into().unwrap(),
        }
    }

    fn call(sender: &str, channel: &str) -> GmpCall {
        GmpCall {
            source_chain: "ethereum".to_string(),
            source_address: "0xSource".to_string(),
            receiver: "receiver".to_string(),
            sender: sender.to_string(),
            channel: channel.to_string(),
        }
    }

    #[test]
    fn exact_sender_and_channel_pass() {
        assert!(verify_trusted_source(&trusted_params(), &call("relayerA", "channel-7")).is_ok());
    }

    #[test]
    fn unknown_sender_fails() {
        assert_err_contains!(
            verify_trusted_source(&trusted_params(), &call("relayerB", "channel-7")),
            Error,
            Error::UntrustedSender(..)
        );
    }

    #[test]
    fn unknown_channel_fails() {
        assert_err_contains!(
            verify_trusted_source(&trusted_params(), &call("relayerA", "channel-8")),
            Error,
            Error::UntrustedChannel(..)
        );
    }

    #[test]
    fn near_matches_fail() {
        for sender in ["relayera", "relayerA ", " relayerA", "relayer"] {
            assert_err_contains!(
                verify_trusted_source(&trusted_params(), &call(sender, "channel-7")),
                Error,
                Error::UntrustedSender(..)
            );
        }
    }
}
