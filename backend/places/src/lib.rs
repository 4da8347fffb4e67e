//! # Places
//!
//! Shared domain types for the Stockholm places service.
//!
//! Both the server and the CLI client depend on this crate so the record
//! shape, the category set and the wire payloads only exist once.
//!
//!
//!
//! ## Record
//! - `Place`: a user-submitted point of interest, stored as one JSON document
//! - Fields: name, description, category, location (address, coordinates, optional place id),
//!   images, submittedBy (default "Anonymous"), createdAt, updatedAt
//! - Places are never edited in place, only created and deleted
//!
//!
//!
//! ## Client State
//! - [`filter::CategoryFilter`]: which categories are shown on the map, and the derived marker set
//! - [`form::PlaceForm`]: presence/length checks run before anything is sent to the server

pub mod category;
pub mod filter;
pub mod form;
pub mod payloads;
pub mod place;

pub use category::Category;
pub use place::{Coordinates, Location, NewPlace, Place};
