//! Buildforce application: the persisted product store, its configuration and the
//! context the CLI runs against.

pub mod catalog;
pub mod config;
pub mod context;
pub mod storage;

#[cfg(test)]
mod test;

mod ids;
