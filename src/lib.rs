//! Client-side list management for the shop admin back-office.
//!
//! Admin screens fetch whole collections from the storefront API and let the
//! user search, filter, sort and page through them locally. The [`engine`]
//! module holds that logic as a pure function of a collection and a
//! [`domain::query::Query`].

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod engine;
#[cfg(feature = "app")]
pub mod forms;
#[cfg(feature = "app")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

/// Records per page when a screen does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Pages shown on each side of the current page in the pager.
pub const DEFAULT_WINDOW_DELTA: usize = 2;
