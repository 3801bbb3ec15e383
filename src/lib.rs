//! Terminal client for the Picto Lingua vocabulary backend.
//!
//! A learner picks a theme, browses its photos, and studies the theme's
//! vocabulary with flashcards. State lives in [`model::AppModel`], key
//! handling in [`controller::AppController`], drawing in [`view::AppView`].

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
