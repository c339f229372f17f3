use cosmwasm_std::HexBinary;
use gmp_middleware::abi::{message_abi_encode, GmpMessage};

pub const SOURCE_CHAIN: &str = "ethereum";
pub const SOURCE_ADDRESS: &str = "0xCE16E1a9e0037018820e6b55a55bCb1ba0fDD4DB";
pub const RECEIVER: &str = "ojo1receiver";

pub fn dummy_message() -> GmpMessage {
    GmpMessage {
        contract_address: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
            .parse()
            .unwrap(),
        denoms: vec!["ujuno".to_string(), "uojo".to_string()],
        command_selector: [0x01, 0x02, 0x03, 0x04],
        command_params: vec![0u8; 12].into(),
        timestamp: 1700000000,
    }
}

pub fn dummy_payload() -> HexBinary {
    message_abi_encode(dummy_message()).unwrap()
}

pub fn payload_with_denoms(denoms: Vec<String>) -> HexBinary {
    message_abi_encode(GmpMessage {
        denoms,
        ..dummy_message()
    })
    .unwrap()
}
