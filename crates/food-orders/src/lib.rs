//! # Campus Food Orders
//!
//! Order placement and lifecycle engine for campus food points, built on `actor-framework`.
//!
//! Students place orders against per-item stock; cooks update menus and move orders through
//! `PREPARING → PREPARED → PICKED_UP`. Every change is broadcast to connected listeners.
//!
//! Start everything with [`lifecycle::FoodSystem::start`] and work through its
//! [`engine`](engine::OrderEngine).

pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod notifications;
pub mod order_actor;
