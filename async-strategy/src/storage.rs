use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

const RECEIPT_KEY: &str = "Receipt";
const ORACLE_KEY: &str = "Oracle";
const OPERATOR_KEY: &str = "Operator";
const PRICE_TS_KEY: &str = "PriceTs";
const RECEIPTS_HELD_KEY: &str = "RcptHeld";

fn get_address(e: &Env, key: &str) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, key))
        .unwrap_optimized()
}

fn set_address(e: &Env, key: &str, address: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, key), address);
}

/// Fetch the token the operator issues for settled deposits
pub fn get_receipt_token(e: &Env) -> Address {
    get_address(e, RECEIPT_KEY)
}

pub fn set_receipt_token(e: &Env, receipt_token: &Address) {
    set_address(e, RECEIPT_KEY, receipt_token);
}

pub fn get_oracle(e: &Env) -> Address {
    get_address(e, ORACLE_KEY)
}

pub fn set_oracle(e: &Env, oracle: &Address) {
    set_address(e, ORACLE_KEY, oracle);
}

/// Fetch the address new operations are sent to
pub fn get_operator(e: &Env) -> Address {
    get_address(e, OPERATOR_KEY)
}

pub fn set_operator(e: &Env, operator: &Address) {
    set_address(e, OPERATOR_KEY, operator);
}

/// Fetch the timestamp of the newest accepted oracle price, 0 if none
pub fn get_last_price_timestamp(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get::<Symbol, u64>(&Symbol::new(e, PRICE_TS_KEY))
        .unwrap_or(0)
}

pub fn set_last_price_timestamp(e: &Env, timestamp: u64) {
    e.storage()
        .instance()
        .set::<Symbol, u64>(&Symbol::new(e, PRICE_TS_KEY), &timestamp);
}

/// Fetch the receipt tokens owned through finished deposits, 0 if none
pub fn get_receipts_held(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, RECEIPTS_HELD_KEY))
        .unwrap_or(0)
}

pub fn set_receipts_held(e: &Env, receipts: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, RECEIPTS_HELD_KEY), &receipts);
}
