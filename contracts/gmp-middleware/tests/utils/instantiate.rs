use cosmwasm_std::testing::{message_info, mock_env, MockApi};
use cosmwasm_std::{DepsMut, Response};
use gmp_middleware::contract;
use gmp_middleware::msg::{InstantiateMsg, Params};
use ojo_wasm_std::error::ContractError;

use crate::utils::params;

pub fn instantiate_contract(deps: DepsMut) -> Result<Response, ContractError> {
    let api = MockApi::default();

    contract::instantiate(
        deps,
        mock_env(),
        message_info(&api.addr_make("instantiator"), &[]),
        InstantiateMsg {
            governance_address: api.addr_make(params::GOVERNANCE).to_string(),
            gateway_address: api.addr_make(params::GATEWAY).to_string(),
            oracle_address: api.addr_make(params::ORACLE).to_string(),
            params: trusted_params(),
        },
    )
}

pub fn trusted_params() -> Params {
    Params {
        gmp_addresses: vec![params::GMP_ADDRESS.try_into().unwrap()],
        gmp_channel: params::GMP_CHANNEL.try_into().unwrap(),
    }
}
