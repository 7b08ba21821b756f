//! Event emission patterns and utilities

use soroban_sdk::{Env, IntoVal, Symbol, Topics, Val};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: IntoVal<Env, Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit an event keyed by a topic symbol and a numeric record id
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic
    /// * `id` - The record the event belongs to
    /// * `data` - The event data
    pub fn emit_for_id<U>(e: &Env, topic: Symbol, id: u64, data: U)
    where
        U: IntoVal<Env, Val>,
    {
        Self::emit_with_topics(e, (topic, id), data);
    }
}
