//! Terminal interaction seam.
//!
//! The core never reads stdin directly; it asks a [`Prompter`]. The CLI supplies
//! a `dialoguer`-backed implementation, tests supply a scripted one.

use crate::error::Result;

pub trait Prompter {
    /// Ask for a line of free text. An empty answer is allowed.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question. Anything but an explicit yes counts as no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}
