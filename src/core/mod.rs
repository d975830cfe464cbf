pub mod search;
pub mod tmdb;
pub mod weather;
pub mod webhook;
