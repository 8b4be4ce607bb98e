//! Flutter-facing FFI surface for SynergySphere core.

pub mod api;
