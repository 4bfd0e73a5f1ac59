//! JSON API handlers

pub mod health;
pub mod openapi;
pub mod visitors;
