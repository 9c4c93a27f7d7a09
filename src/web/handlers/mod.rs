//! HTTP request handlers for the activities API.

pub mod activities;
