use alloc::string::String;

use thiserror::Error;

/// Invalid [`crate::AccordionOptions`] or a wrapper that does not match them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the `{0}` selector is empty")]
    MissingSelector(&'static str),
    #[error("found {anchors} anchors but {contents} contents")]
    ItemCountMismatch { anchors: usize, contents: usize },
    #[error("scroll target `{0}` matched no element inside the wrapper")]
    ScrollTargetNotFound(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccordionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("index {index} is out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },
}
