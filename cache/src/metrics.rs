use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    pub static ref EVENTS: IntCounterVec =
        register_int_counter_vec!("cache_events", "Gateway events applied to the cache", &["event"])
            .expect("Failed to register cache events counter");
}
