/// Stores are for loading/storing catalog data.
///
/// Example store backends:
/// * Builtin (compiled in).
/// * Files (e.g. CSV).
pub mod builtin;
pub mod csv;
pub mod parts;
