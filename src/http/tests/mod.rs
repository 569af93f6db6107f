//! Unit tests for the HTTP error mapping.
