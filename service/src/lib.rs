// catalog_service/src/lib.rs

//! HTTP front end for the product catalog: configuration, the PostgreSQL
//! store, and the actix-web routes over [`catalog_core::Catalog`].

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;
