use alloc::string::String;
use alloc::sync::Arc;

use crate::tween::ACCORDION_EASING;
use crate::{ConfigError, Easing};

/// A predicate consulted before a click is turned into a `select`/`deselect` event.
pub type FilterClick = Arc<dyn Fn() -> bool + Send + Sync>;

/// Extra offset added to the compensated scroll position.
#[derive(Clone)]
pub enum ScrollOffset {
    /// A fixed offset.
    Value(f32),
    /// A lazily evaluated offset (called on every compensation, e.g. for a header whose height
    /// depends on the breakpoint).
    Provider(Arc<dyn Fn() -> f32 + Send + Sync>),
}

impl ScrollOffset {
    pub(crate) fn resolve(&self) -> f32 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for ScrollOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::AccordionController`].
///
/// Callbacks are stored in `Arc`s so options stay cheap to clone.
#[derive(Clone)]
pub struct AccordionOptions {
    /// Selector of the elements that toggle a panel.
    pub anchor: String,
    /// Selector of the panels, paired with anchors by position.
    pub content: String,
    /// Skips scroll compensation entirely.
    pub disable_scroll: bool,
    /// Selector of a scrollable descendant of the wrapper. Defaults to the page scroller.
    pub scroll_target: Option<String>,
    pub scroll_offset: ScrollOffset,
    /// Anchor attribute holding `"true"`/`"false"`.
    pub selected_attr: String,
    /// Content attribute holding `"true"`/`"false"`.
    pub expanded_attr: String,
    pub filter_click: Option<FilterClick>,
    /// Duration of the open/close height animation.
    pub transition_ms: u64,
    /// Duration of the compensating scroll animation.
    pub scroll_duration_ms: u64,
    /// Easing shared by height and scroll animations so both finish together.
    pub easing: Easing,
}

impl AccordionOptions {
    pub fn new(anchor: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            content: content.into(),
            disable_scroll: false,
            scroll_target: None,
            scroll_offset: ScrollOffset::default(),
            selected_attr: String::from("selected"),
            expanded_attr: String::from("expanded"),
            filter_click: None,
            transition_ms: 500,
            scroll_duration_ms: 500,
            easing: ACCORDION_EASING,
        }
    }

    pub fn with_disable_scroll(mut self, disable_scroll: bool) -> Self {
        self.disable_scroll = disable_scroll;
        self
    }

    pub fn with_scroll_target(mut self, scroll_target: Option<impl Into<String>>) -> Self {
        self.scroll_target = scroll_target.map(Into::into);
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: ScrollOffset) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_scroll_offset_value(mut self, scroll_offset: f32) -> Self {
        self.scroll_offset = ScrollOffset::Value(scroll_offset);
        self
    }

    pub fn with_scroll_offset_provider(
        mut self,
        scroll_offset: impl Fn() -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.scroll_offset = ScrollOffset::Provider(Arc::new(scroll_offset));
        self
    }

    /// Sets the attribute names, e.g. `("aria-selected", "aria-expanded")`.
    pub fn with_attrs(
        mut self,
        selected_attr: impl Into<String>,
        expanded_attr: impl Into<String>,
    ) -> Self {
        self.selected_attr = selected_attr.into();
        self.expanded_attr = expanded_attr.into();
        self
    }

    pub fn with_filter_click(
        mut self,
        filter_click: Option<impl Fn() -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.filter_click = filter_click.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_scroll_duration_ms(mut self, scroll_duration_ms: u64) -> Self {
        self.scroll_duration_ms = scroll_duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchor.trim().is_empty() {
            return Err(ConfigError::MissingSelector("anchor"));
        }
        if self.content.trim().is_empty() {
            return Err(ConfigError::MissingSelector("content"));
        }
        Ok(())
    }

    pub(crate) fn accepts_click(&self) -> bool {
        self.filter_click.as_ref().is_none_or(|f| f())
    }
}

impl core::fmt::Debug for AccordionOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccordionOptions")
            .field("anchor", &self.anchor)
            .field("content", &self.content)
            .field("disable_scroll", &self.disable_scroll)
            .field("scroll_target", &self.scroll_target)
            .field("scroll_offset", &self.scroll_offset)
            .field("selected_attr", &self.selected_attr)
            .field("expanded_attr", &self.expanded_attr)
            .field("transition_ms", &self.transition_ms)
            .field("scroll_duration_ms", &self.scroll_duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
