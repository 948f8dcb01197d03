//! End-to-end tests for scrivener live under `tests/`
