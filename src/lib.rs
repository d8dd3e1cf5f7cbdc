pub mod docs;
pub mod runtime;

// Re-export the eo_builtin macro for convenience
pub use eo_builtin_macros::eo_builtin;
