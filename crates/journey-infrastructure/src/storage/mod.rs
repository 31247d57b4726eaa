//! Atomic on-disk storage shared by the config file and the exporters.

mod atomic_file;

pub use atomic_file::{StorageError, TomlStore, write_atomic};
