//! # Policyfront Library
//!
//! Store-based front-end core for an insurance storefront: role sessions,
//! order assignment, appointment booking, product catalog, and the admin
//! dashboard, each running as its own store on [`store_runtime`].

pub mod admin;
pub mod api;
pub mod assignment;
pub mod booking;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod geo;
pub mod lifecycle;
pub mod model;
pub mod session;
