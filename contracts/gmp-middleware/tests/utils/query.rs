use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{from_json, Deps};
use gmp_middleware::contract;
use gmp_middleware::msg::{Params, QueryMsg};
use ojo_wasm_std::error::ContractError;

pub fn query_params(deps: Deps) -> Result<Params, ContractError> {
    let bin = contract::query(deps, mock_env(), QueryMsg::Params)?;
    Ok(from_json(bin)?)
}
