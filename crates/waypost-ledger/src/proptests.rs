//! Property-based tests for the account tree transforms.
