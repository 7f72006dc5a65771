//! Core types shared across discodiff facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error and logging facilities, so that every crate in the workspace
//! emits structured events with the same field keys and event names.

pub mod schema;
