//! Hot-seat terminal front end. Holds no game rules: it renders `Game` state
//! and forwards player decisions through [`crate::engine::GameEngine`].

pub mod app;
pub mod controller;
pub mod ui;
