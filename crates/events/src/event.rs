//! Event payload contract.

/// A domain-agnostic event payload.
///
/// Each implementing type is one category of occurrence: the type fixes the
/// payload shape at compile time, and `NAME` gives it a stable label for
/// logs and diagnostics (e.g. `"task.created"`). The bus keys its
/// registration table on the payload *type*, so two event types can never
/// share handlers even if their `NAME`s collide.
pub trait Event: core::fmt::Debug + 'static {
    /// Stable event name (e.g. "task.created").
    const NAME: &'static str;
}
