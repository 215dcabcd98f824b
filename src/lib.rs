//! A headless, exclusive accordion view-model.
//!
//! An accordion here is a wrapper element holding repeated anchor/content pairs. Clicking an
//! anchor opens its content panel and closes the previously open one, with animated heights and
//! scroll compensation so the clicked anchor does not jump out of view when a long panel above it
//! collapses.
//!
//! It is UI-agnostic. An adapter is expected to provide:
//! - a [`Dom`] implementation (element queries, attribute/style writes, geometry)
//! - anchor clicks, via [`AccordionController::handle_click`] or [`Accordion::click`]
//! - a frame clock, by calling `tick(now_ms)` while it returns `true`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod accordion;
mod controller;
mod dom;
mod emitter;
mod error;
mod options;
mod state;
mod transition;
mod tween;
mod types;
mod watched;


pub use accordion::Accordion;
pub use controller::AccordionController;
pub use dom::Dom;
pub use emitter::{EventEmitter, Listener};
pub use error::{AccordionError, ConfigError};
pub use options::{AccordionOptions, FilterClick, ScrollOffset};
pub use state::AccordionState;
pub use tween::{ACCORDION_EASING, Easing, Tween};
pub use types::{
    AccordionEvent, Bounds, ClickEvent, ClickOutcome, Display, EventKind, MouseButton,
};
pub use watched::Watched;
