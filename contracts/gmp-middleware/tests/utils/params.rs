pub const GOVERNANCE: &str = "governance";
pub const GATEWAY: &str = "gateway";
pub const ORACLE: &str = "oracle";

pub const GMP_ADDRESS: &str = "axelar1dv4u5k73pzqrxlzujxg3qp8kvc3pje7jtdvu72npnt5zhq05ejcsn5qme5";
pub const GMP_CHANNEL: &str = "channel-7";
