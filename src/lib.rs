//! Stickerboard - server side of an infinite-canvas sticker board
//!
//! # Architecture
//! - `api`: HTTP middleware (PocketBase request hook, cross-origin isolation,
//!   request ids) and route handlers
//! - `canvas`: logical/device coordinate model, hit-testing and selection
//! - `image`: the persisted `StoredImage` record
//! - `pocketbase`: thin PocketBase client
//! - `services`: image catalog and sticker commands
//! - `config`: static configuration (TOML + environment)
//! - `runtime`: startup, server mode and shutdown
//! - `system`: logging

pub mod api;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod errors;
pub mod image;
pub mod pocketbase;
pub mod runtime;
pub mod services;
pub mod system;
