#![forbid(unsafe_code)]

//! Persistence for the one piece of durable client state: the bearer token.

pub mod repository;
pub mod sqlite;
