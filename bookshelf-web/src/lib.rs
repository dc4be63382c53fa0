//! Bookshelf web client: login form and user session store.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;

#[cfg(test)]
mod routes_test;
