use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

const POOL_KEY: &str = "Pool";

pub fn get_pool(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, POOL_KEY))
        .unwrap_optimized()
}

pub fn set_pool(e: &Env, pool: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, POOL_KEY), pool);
}
