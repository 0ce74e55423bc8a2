//! Shared test harness: config builder, demo routes, and a real server

#![allow(dead_code)]

pub mod app;
pub mod config;
pub mod server;
