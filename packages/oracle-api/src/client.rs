use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, WasmMsg};

use crate::msg::ExecuteMsg;
use crate::primitives::RelayCommand;

/// Thin client for contracts that dispatch commands to the oracle.
pub struct Oracle {
    pub address: Addr,
}

impl Oracle {
    pub fn new(address: Addr) -> Self {
        Oracle { address }
    }

    pub fn relay_price(&self, command: RelayCommand) -> CosmosMsg {
        WasmMsg::Execute {
            contract_addr: self.address.to_string(),
            msg: to_json_binary(&ExecuteMsg::RelayPrice(command))
                .expect("msg should always be serializable"),
            funds: vec![],
        }
        .into()
    }
}
