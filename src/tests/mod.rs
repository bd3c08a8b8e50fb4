//! Whole deck parsing tests.
mod adeck;
