use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env};
use strategy::constants::MAX_PRICE_AGE;
use strategy::StrategyError;

use crate::storage;

/// Oracle price of one receipt token in underlying
#[derive(Clone)]
pub struct ReceiptPrice {
    pub price: i128,
    pub scalar: i128,
    pub timestamp: u64,
}

impl ReceiptPrice {
    /// Load the receipt token price and check it can be used
    ///
    /// ### Panics
    /// - `PriceNotFound` if the oracle has no price for the receipt token
    /// - `InvalidPrice` if the price is not positive or carries no timestamp
    /// - `StalePrice` if the price is older than the last accepted one or
    ///   than `MAX_PRICE_AGE`
    pub fn load(e: &Env) -> Self {
        let oracle = PriceFeedClient::new(e, &storage::get_oracle(e));
        let asset = Asset::Stellar(storage::get_receipt_token(e));
        let price_data = match oracle.lastprice(&asset) {
            Some(price) => price,
            None => panic_with_error!(e, StrategyError::PriceNotFound),
        };
        if price_data.price <= 0 || price_data.timestamp == 0 {
            panic_with_error!(e, StrategyError::InvalidPrice);
        }
        if price_data.timestamp < storage::get_last_price_timestamp(e)
            || price_data.timestamp + MAX_PRICE_AGE < e.ledger().timestamp()
        {
            panic_with_error!(e, StrategyError::StalePrice);
        }

        ReceiptPrice {
            price: price_data.price,
            scalar: 10i128.pow(oracle.decimals()),
            timestamp: price_data.timestamp,
        }
    }

    /// Record this price as the newest accepted one
    pub fn accept(&self, e: &Env) {
        if self.timestamp > storage::get_last_price_timestamp(e) {
            storage::set_last_price_timestamp(e, self.timestamp);
        }
    }

    pub fn to_underlying(&self, e: &Env, receipts: i128) -> i128 {
        receipts.fixed_mul_floor(e, &self.price, &self.scalar)
    }

    /// Receipt tokens needed to redeem at least `underlying`
    pub fn to_receipts_ceil(&self, e: &Env, underlying: i128) -> i128 {
        underlying.fixed_mul_ceil(e, &self.scalar, &self.price)
    }
}

/// Loads the receipt price on first use only
#[derive(Default)]
pub struct PriceCache {
    price: Option<ReceiptPrice>,
}

impl PriceCache {
    pub fn get(&mut self, e: &Env) -> ReceiptPrice {
        if let Some(price) = &self.price {
            return price.clone();
        }
        let price = ReceiptPrice::load(e);
        self.price = Some(price.clone());
        price
    }
}
