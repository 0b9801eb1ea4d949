//! Name Shuffler splits a list of names into random, balanced groups and
//! prints them as a grid of colored cards sized to the terminal.
//!
//! # Quick start
//!
//! ```
//! use name_shuffler::grid::render_plain;
//! use name_shuffler::partition::partition;
//!
//! let names: Vec<String> = ["Ann", "Bob", "Cid", "Dee"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let groups = partition(&names, 2).unwrap();
//! for line in render_plain(&groups, 80) {
//!     println!("{line}");
//! }
//! ```

pub mod error;
pub mod flow;
pub mod grid;
pub mod input;
pub mod partition;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;
