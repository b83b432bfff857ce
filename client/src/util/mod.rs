//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept free of browser APIs so both front ends and the native
//! test suite can use them.

pub mod format;
