use soroban_sdk::{Address, Env, Symbol};

pub struct AsyncStrategyEvents {}

impl AsyncStrategyEvents {
    /// Emitted when the settlement operator is replaced
    ///
    /// - topics - `["set_operator"]`
    /// - data - `operator: Address`
    pub fn set_operator(e: &Env, operator: Address) {
        let topics = (Symbol::new(e, "set_operator"),);
        e.events().publish(topics, operator);
    }

    /// Emitted when the receipt price oracle is replaced
    ///
    /// - topics - `["set_oracle"]`
    /// - data - `oracle: Address`
    pub fn set_oracle(e: &Env, oracle: Address) {
        let topics = (Symbol::new(e, "set_oracle"),);
        e.events().publish(topics, oracle);
    }
}
