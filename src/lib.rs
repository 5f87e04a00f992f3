//! gitprof stores named Git identity profiles (name + email) in a plain
//! text file in the user's home directory and applies a chosen profile as
//! the global Git identity via `git config --global`.
//!
//! # Architecture
//!
//! - **Profiles**: `(key, name, email)` records, unique by key.
//! - **Codec**: parser/serializer for the block-based profiles file.
//! - **Store**: CRUD over the backing file, re-read on every operation.
//! - **Applier**: pushes a profile's fields into Git's global config.

pub mod cli;
pub mod codec;
pub mod error;
pub mod git;
pub mod menu;
pub mod profile;
pub mod store;
