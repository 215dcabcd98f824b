/// Events emitted by [`crate::AccordionController`].
///
/// `Select`/`Deselect` are click intents; the controller does not act on them itself. The
/// remaining events describe the open/close lifecycle of a single panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccordionEvent {
    Select(usize),
    Deselect,
    BeforeOpen(usize),
    Opened(usize),
    BeforeClose(usize),
    Closed(usize),
}

impl AccordionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Select(_) => EventKind::Select,
            Self::Deselect => EventKind::Deselect,
            Self::BeforeOpen(_) => EventKind::BeforeOpen,
            Self::Opened(_) => EventKind::Opened,
            Self::BeforeClose(_) => EventKind::BeforeClose,
            Self::Closed(_) => EventKind::Closed,
        }
    }

    /// The item index carried by the event, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Deselect => None,
            Self::Select(i)
            | Self::BeforeOpen(i)
            | Self::Opened(i)
            | Self::BeforeClose(i)
            | Self::Closed(i) => Some(i),
        }
    }
}

/// Event names used to subscribe listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Select,
    Deselect,
    BeforeOpen,
    Opened,
    BeforeClose,
    Closed,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::Select,
        EventKind::Deselect,
        EventKind::BeforeOpen,
        EventKind::Opened,
        EventKind::BeforeClose,
        EventKind::Closed,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl MouseButton {
    /// Maps a DOM `MouseEvent.button` code.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// A click delivered to an anchor element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent<N> {
    /// The anchor the click was delegated to (DOM `currentTarget`).
    pub target: N,
    pub button: MouseButton,
}

impl<N> ClickEvent<N> {
    pub fn primary(target: N) -> Self {
        Self {
            target,
            button: MouseButton::Primary,
        }
    }
}

/// What the controller made of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Select(usize),
    Deselect,
}

impl ClickOutcome {
    /// Whether the adapter should suppress the anchor's default navigation.
    pub fn prevent_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Inline `display` overrides used while measuring the post-animation layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Display {
    None,
    Block,
}

/// An axis-aligned box in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Returns `true` when `inner` lies entirely inside `self` on all four edges.
    pub fn contains(&self, inner: &Bounds) -> bool {
        self.left <= inner.left
            && self.top <= inner.top
            && self.right() >= inner.right()
            && self.bottom() >= inner.bottom()
    }
}
