use cosmwasm_std::testing::{message_info, mock_env, MockApi};
use cosmwasm_std::{Coin, DepsMut, HexBinary, Response};
use gmp_middleware::contract;
use gmp_middleware::msg::{ExecuteMsg, Params};
use ojo_wasm_std::error::ContractError;

use crate::utils::messages::{RECEIVER, SOURCE_ADDRESS, SOURCE_CHAIN};
use crate::utils::params;

pub fn handle_message(deps: DepsMut, payload: HexBinary) -> Result<Response, ContractError> {
    handle_message_from(
        deps,
        params::GATEWAY,
        params::GMP_ADDRESS,
        params::GMP_CHANNEL,
        payload,
    )
}

pub fn handle_message_from(
    deps: DepsMut,
    caller: &str,
    sender: &str,
    channel: &str,
    payload: HexBinary,
) -> Result<Response, ContractError> {
    let api = MockApi::default();

    contract::execute(
        deps,
        mock_env(),
        message_info(&api.addr_make(caller), &[]),
        ExecuteMsg::HandleMessage {
            source_chain: SOURCE_CHAIN.to_string(),
            source_address: SOURCE_ADDRESS.to_string(),
            receiver: RECEIVER.to_string(),
            payload,
            sender: sender.to_string(),
            channel: channel.to_string(),
        },
    )
}

pub fn handle_message_with_token(
    deps: DepsMut,
    payload: HexBinary,
    token: Coin,
) -> Result<Response, ContractError> {
    let api = MockApi::default();

    contract::execute(
        deps,
        mock_env(),
        message_info(&api.addr_make(params::GATEWAY), &[]),
        ExecuteMsg::HandleMessageWithToken {
            source_chain: SOURCE_CHAIN.to_string(),
            source_address: SOURCE_ADDRESS.to_string(),
            receiver: RECEIVER.to_string(),
            payload,
            sender: params::GMP_ADDRESS.to_string(),
            channel: params::GMP_CHANNEL.to_string(),
            token,
        },
    )
}

pub fn update_params(
    deps: DepsMut,
    caller: &str,
    params: Params,
) -> Result<Response, ContractError> {
    let api = MockApi::default();

    contract::execute(
        deps,
        mock_env(),
        message_info(&api.addr_make(caller), &[]),
        ExecuteMsg::UpdateParams(params),
    )
}
