//! Shared helpers for the unit tests of every module.
