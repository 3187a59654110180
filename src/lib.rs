//! # Campus Atlas
//!
//! A campus building directory and wayfinding toolkit.
//!
//! Campus Atlas loads a building feed (name, abbreviation, category,
//! coordinates, description/image URLs) from a remote API or a local file,
//! validates it into an immutable in-memory directory, derives an alphabetic
//! first-letter index, and exposes the data through the `atlas` CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌────────────┐
//! │   Source    │──▶│  Directory   │──▶│ Alphabetic │
//! │  HTTP/File  │   │ parse+verify │   │   Index    │
//! └─────────────┘   └──────┬───────┘   └─────┬──────┘
//!                          │                 │
//!            ┌─────────┬───┴─────┬───────────┤
//!            ▼         ▼         ▼           ▼
//!          show       map     nearest      list
//!                    route
//! ```
//!
//! The load is one-shot: it either publishes a fully-validated directory or
//! fails with a [`directory::LoadError`] naming the exact cause. Every
//! command reads the directory; nothing mutates it afterwards.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`source`] | Building feed sources (HTTP, file) |
//! | [`directory`] | Feed validation and the immutable directory |
//! | [`index`] | First-letter index over the sorted names |
//! | [`geo`] | Great-circle distance, bearing, compass points |
//! | [`list`] | Sectioned alphabetic listing |
//! | [`info`] | Building detail and description fetch |
//! | [`map`] | Campus region summary |
//! | [`nearest`] | Distance ranking from a position |
//! | [`route`] | Point-to-point travel estimates |
//! | [`geocode`] | Forward geocoding of addresses |

pub mod config;
pub mod directory;
pub mod geo;
pub mod geocode;
pub mod index;
pub mod info;
pub mod list;
pub mod map;
pub mod models;
pub mod nearest;
pub mod route;
pub mod source;
pub mod sources;
