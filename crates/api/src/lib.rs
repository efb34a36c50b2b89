//! `foodlab-api` — HTTP adapter over the in-memory repository.

pub mod app;
