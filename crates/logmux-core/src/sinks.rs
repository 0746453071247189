//! Built-in sinks.
//!
//! Every sink implements [`logmux_types::Sink`]. The factory registers each
//! of them under the name returned by its `kind()`.

pub mod null;
pub mod console;
pub mod file;
pub mod composite;

pub use null::NullSink;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use composite::CompositeSink;
