mod pool;
pub use pool::Client as PoolClient;
