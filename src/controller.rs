use alloc::vec::Vec;
use core::fmt;

use crate::dom::{is_true, write_bool};
use crate::transition::{Direction, PanelTransition, ScrollAnimation, Step};
use crate::{
    AccordionError, AccordionEvent, AccordionOptions, AccordionState, ClickEvent, ClickOutcome,
    ConfigError, Display, Dom, EventEmitter, EventKind, MouseButton, Watched,
};

/// An exclusive accordion over a wrapper element containing anchor/content pairs.
///
/// At most one panel is open at a time. Opening a panel closes the previous one, and when the
/// collapse would push the relevant anchor out of view the scroll container is animated so the
/// anchor stays visible.
///
/// This type does not own a frame loop. Adapters drive it by calling:
/// - `handle_click` for clicks on anchors (or use [`crate::Accordion`] to also apply them)
/// - `select` / `disable` / `enable` from page code
/// - `tick(now_ms)` each frame while `tick` keeps returning `true`
pub struct AccordionController<D: Dom> {
    dom: D,
    wrapper: D::Node,
    options: AccordionOptions,
    scroll_container: D::Node,

    opened_index: Watched<Option<usize>>,
    disabled: Watched<bool>,

    transitions: Vec<PanelTransition>,
    scroll: Option<ScrollAnimation>,
    events: EventEmitter,
}

impl<D: Dom> AccordionController<D> {
    /// Binds a controller to `wrapper`.
    ///
    /// The initially selected anchor (selected attribute `"true"`) becomes the open item; every
    /// other anchor and content is normalized to `"false"`. No events fire during this sync.
    pub fn new(
        dom: D,
        wrapper: D::Node,
        options: AccordionOptions,
    ) -> Result<Self, AccordionError> {
        options.validate()?;

        let anchors = dom.query_all(&wrapper, &options.anchor);
        let contents = dom.query_all(&wrapper, &options.content);
        if anchors.len() != contents.len() {
            awarn!(
                anchors = anchors.len(),
                contents = contents.len(),
                "AccordionController::new: anchor/content count mismatch"
            );
            return Err(ConfigError::ItemCountMismatch {
                anchors: anchors.len(),
                contents: contents.len(),
            }
            .into());
        }

        let scroll_container = match &options.scroll_target {
            Some(selector) => dom
                .query_all(&wrapper, selector)
                .into_iter()
                .next()
                .ok_or_else(|| ConfigError::ScrollTargetNotFound(selector.clone()))?,
            None => dom.default_scroll_container(),
        };

        let mut c = Self {
            dom,
            wrapper,
            options,
            scroll_container,
            opened_index: Watched::new(None),
            disabled: Watched::new(false),
            transitions: Vec::new(),
            scroll: None,
            events: EventEmitter::new(),
        };
        c.sync_initial_state(&anchors, &contents);
        adebug!(
            items = anchors.len(),
            opened = ?c.opened_index.get(),
            "AccordionController::new"
        );
        Ok(c)
    }

    fn sync_initial_state(&mut self, anchors: &[D::Node], contents: &[D::Node]) {
        let selected = anchors
            .iter()
            .position(|a| is_true(&self.dom, a, &self.options.selected_attr));

        for a in anchors {
            write_bool(&mut self.dom, a, &self.options.selected_attr, false);
        }
        for c in contents {
            write_bool(&mut self.dom, c, &self.options.expanded_attr, false);
        }

        if let Some(i) = selected {
            write_bool(&mut self.dom, &anchors[i], &self.options.selected_attr, true);
            write_bool(&mut self.dom, &contents[i], &self.options.expanded_attr, true);
        }
        self.opened_index.set_silently(selected);
    }

    pub fn options(&self) -> &AccordionOptions {
        &self.options
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    pub fn wrapper(&self) -> &D::Node {
        &self.wrapper
    }

    pub fn scroll_container(&self) -> &D::Node {
        &self.scroll_container
    }

    pub fn opened_index(&self) -> Option<usize> {
        self.opened_index.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Whether any panel is mid-animation.
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Whether a compensating scroll is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    pub fn item_count(&self) -> usize {
        self.anchors().len().min(self.contents().len())
    }

    pub fn state(&self) -> AccordionState {
        AccordionState {
            opened_index: self.opened_index.get(),
            disabled: self.disabled.get(),
        }
    }

    /// Subscribes `listener` to events of `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl Fn(AccordionEvent) + Send + Sync + 'static,
    ) {
        self.events.on(kind, listener);
    }

    /// Removes every listener for `kind`.
    pub fn off(&mut self, kind: EventKind) {
        self.events.off(kind);
    }

    fn anchors(&self) -> Vec<D::Node> {
        self.dom.query_all(&self.wrapper, &self.options.anchor)
    }

    fn contents(&self) -> Vec<D::Node> {
        self.dom.query_all(&self.wrapper, &self.options.content)
    }

    /// Opens the panel at `index`, or closes the open one with `None`.
    ///
    /// Does nothing while disabled. Selecting the already open index is a no-op; callers that
    /// want toggle semantics check [`Self::opened_index`] first (the click path does).
    pub fn select(&mut self, index: Option<usize>) -> Result<(), AccordionError> {
        if self.disabled.get() {
            atrace!(?index, "select ignored: disabled");
            return Ok(());
        }
        if let Some(i) = index {
            let count = self.item_count();
            if i >= count {
                awarn!(index = i, count, "select: index out of range");
                return Err(AccordionError::IndexOutOfRange { index: i, count });
            }
        }
        if let Some(old) = self.opened_index.set(index) {
            adebug!(?old, new = ?index, "opened index changed");
            self.on_opened_index_change(index, old);
        }
        Ok(())
    }

    /// Expands every panel and ignores selection until [`Self::enable`].
    pub fn disable(&mut self) {
        if self.disabled.set(true).is_some() {
            self.on_disabled_change(true);
        }
    }

    /// Restores exclusive mode; only the panel at [`Self::opened_index`] stays expanded.
    pub fn enable(&mut self) {
        if self.disabled.set(false).is_some() {
            self.on_disabled_change(false);
        }
    }

    /// Applies a snapshot by writing attributes directly, without animating.
    ///
    /// In-flight animations are completed first, so their `Opened`/`Closed` events still fire.
    pub fn restore_state(&mut self, state: AccordionState) -> Result<(), AccordionError> {
        if let Some(i) = state.opened_index {
            let count = self.item_count();
            if i >= count {
                return Err(AccordionError::IndexOutOfRange { index: i, count });
            }
        }
        self.finish_transitions();
        self.opened_index.set_silently(state.opened_index);
        self.disabled.set_silently(state.disabled);

        let anchors = self.anchors();
        let contents = self.contents();
        for (i, (a, c)) in anchors.iter().zip(&contents).enumerate() {
            let open = state.opened_index == Some(i);
            write_bool(&mut self.dom, a, &self.options.selected_attr, open);
            write_bool(
                &mut self.dom,
                c,
                &self.options.expanded_attr,
                open || state.disabled,
            );
        }
        Ok(())
    }

    /// Interprets a click delegated to an anchor.
    ///
    /// Emits `Deselect` when the anchor is already selected and `Select(index)` otherwise. The
    /// controller does not change its own state here, so listeners may veto the selection.
    pub fn handle_click(&self, event: &ClickEvent<D::Node>) -> ClickOutcome {
        if self.disabled.get() || !self.options.accepts_click() {
            return ClickOutcome::Ignored;
        }
        if event.button != MouseButton::Primary {
            return ClickOutcome::Ignored;
        }

        let anchors = self.anchors();
        let Some(index) = anchors.iter().position(|a| *a == event.target) else {
            atrace!(node = ?event.target, "click on a non-anchor element");
            return ClickOutcome::Ignored;
        };

        if is_true(&self.dom, &event.target, &self.options.selected_attr) {
            self.events.emit(AccordionEvent::Deselect);
            ClickOutcome::Deselect
        } else {
            self.events.emit(AccordionEvent::Select(index));
            ClickOutcome::Select(index)
        }
    }

    /// Advances running animations by one frame.
    ///
    /// Returns `true` while anything is still animating; adapters stop requesting frames once it
    /// returns `false`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.transitions.is_empty() {
            let contents = self.contents();
            let mut i = 0;
            while i < self.transitions.len() {
                let step = self.transitions[i].advance(
                    now_ms,
                    self.options.transition_ms,
                    self.options.easing,
                );
                match step {
                    Step::Height(h) => {
                        if let Some(node) = contents.get(self.transitions[i].index) {
                            self.dom.set_height(node, Some(h));
                        }
                        i += 1;
                    }
                    Step::Done => {
                        let t = self.transitions.remove(i);
                        self.complete(t, &contents);
                    }
                }
            }
            self.dom.dispatch_scroll();
        }

        if let Some(mut scroll) = self.scroll.take() {
            let current = self.dom.scroll_top(&self.scroll_container);
            let (top, done) = scroll.advance(
                now_ms,
                current,
                self.options.scroll_duration_ms,
                self.options.easing,
            );
            self.dom.set_scroll_top(&self.scroll_container, top);
            if !done {
                self.scroll = Some(scroll);
            }
        }

        self.is_animating() || self.is_scrolling()
    }

    /// Completes every in-flight animation immediately, firing pending `Opened`/`Closed` events.
    pub fn finish_transitions(&mut self) {
        if !self.transitions.is_empty() {
            let contents = self.contents();
            for t in core::mem::take(&mut self.transitions) {
                self.complete(t, &contents);
            }
            self.dom.dispatch_scroll();
        }
        if let Some(scroll) = self.scroll.take() {
            self.dom.set_scroll_top(&self.scroll_container, scroll.to);
        }
    }

    fn on_disabled_change(&mut self, disabled: bool) {
        adebug!(disabled, "disabled changed");
        self.finish_transitions();

        let contents = self.contents();
        if disabled {
            for c in &contents {
                write_bool(&mut self.dom, c, &self.options.expanded_attr, true);
            }
            return;
        }

        for c in &contents {
            write_bool(&mut self.dom, c, &self.options.expanded_attr, false);
        }
        if let Some(c) = self.opened_index.get().and_then(|i| contents.get(i)) {
            write_bool(&mut self.dom, c, &self.options.expanded_attr, true);
        }
    }

    fn on_opened_index_change(&mut self, new: Option<usize>, old: Option<usize>) {
        if let Some(old) = old {
            if !self.options.disable_scroll {
                self.adjust_scroll(new.unwrap_or(old), new, old);
            }
            self.hide_content(old);
        }
        if let Some(new) = new {
            self.show_content(new);
        }
    }

    fn hide_content(&mut self, index: usize) {
        let anchors = self.anchors();
        let contents = self.contents();
        self.preempt(index, &contents);
        let (Some(anchor), Some(content)) = (anchors.get(index), contents.get(index)) else {
            awarn!(index, "hide_content: item disappeared");
            return;
        };

        self.events.emit(AccordionEvent::BeforeClose(index));
        write_bool(&mut self.dom, anchor, &self.options.selected_attr, false);

        self.dom.set_height(content, None);
        let from = self.dom.content_height(content);
        self.dom.set_height(content, Some(from));

        atrace!(index, from, "close transition scheduled");
        self.transitions
            .push(PanelTransition::new(index, Direction::Close, from, 0.0));
        self.dom.dispatch_scroll();
    }

    fn show_content(&mut self, index: usize) {
        let anchors = self.anchors();
        let contents = self.contents();
        self.preempt(index, &contents);
        let (Some(anchor), Some(content)) = (anchors.get(index), contents.get(index)) else {
            awarn!(index, "show_content: item disappeared");
            return;
        };

        self.events.emit(AccordionEvent::BeforeOpen(index));
        // The opening panel overlaps the closing one while both animate.
        self.dom.set_z_index(content, Some(1));
        write_bool(&mut self.dom, content, &self.options.expanded_attr, true);
        write_bool(&mut self.dom, anchor, &self.options.selected_attr, true);

        self.dom.set_height(content, None);
        let to = self.dom.content_height(content);
        self.dom.set_height(content, Some(0.0));

        atrace!(index, to, "open transition scheduled");
        self.transitions
            .push(PanelTransition::new(index, Direction::Open, 0.0, to));
        self.dom.dispatch_scroll();
    }

    /// Runs the completion of a live transition on panel `index`, if any.
    fn preempt(&mut self, index: usize, contents: &[D::Node]) {
        if let Some(pos) = self.transitions.iter().position(|t| t.index == index) {
            let t = self.transitions.remove(pos);
            atrace!(index, direction = ?t.direction, "preempting transition");
            self.complete(t, contents);
        }
    }

    fn complete(&mut self, t: PanelTransition, contents: &[D::Node]) {
        let Some(content) = contents.get(t.index) else {
            return;
        };
        self.dom.set_height(content, None);
        match t.direction {
            Direction::Open => {
                self.dom.set_z_index(content, None);
                self.events.emit(AccordionEvent::Opened(t.index));
            }
            Direction::Close => {
                write_bool(&mut self.dom, content, &self.options.expanded_attr, false);
                self.events.emit(AccordionEvent::Closed(t.index));
            }
        }
    }

    /// Scrolls so the anchor at `target` stays visible once the panels have settled.
    fn adjust_scroll(&mut self, target: usize, next: Option<usize>, prev: usize) {
        let anchors = self.anchors();
        let contents = self.contents();
        let (Some(anchor), Some(prev_content)) = (anchors.get(target), contents.get(prev)) else {
            return;
        };
        let next_content = next.and_then(|i| contents.get(i));
        // Panels still collapsing from an earlier selection end up closed as well.
        let closing: Vec<D::Node> = self
            .transitions
            .iter()
            .filter(|t| {
                t.direction == Direction::Close && t.index != prev && Some(t.index) != next
            })
            .filter_map(|t| contents.get(t.index).cloned())
            .collect();

        // Measure the layout as it will be after the animations.
        self.dom.set_display(prev_content, Some(Display::None));
        for c in &closing {
            self.dom.set_display(c, Some(Display::None));
        }
        if let Some(n) = next_content {
            self.dom.set_display(n, Some(Display::Block));
        }

        let to = self.compensated_scroll_top(anchor);

        self.dom.set_display(prev_content, None);
        for c in &closing {
            self.dom.set_display(c, None);
        }
        if let Some(n) = next_content {
            self.dom.set_display(n, None);
        }

        if let Some(to) = to {
            adebug!(anchor = target, to, "scroll compensation");
            self.scroll = Some(ScrollAnimation::new(to));
        }
    }

    fn compensated_scroll_top(&self, anchor: &D::Node) -> Option<f32> {
        let container = &self.scroll_container;
        let bounds = self.dom.bounds(anchor);
        if self.dom.viewport(container).contains(&bounds) {
            return None;
        }

        let mut top = bounds.top - self.dom.bounds(container).top;
        if *container != self.dom.default_scroll_container() {
            // Nested scroller: anchor bounds move with the container's own scroll position.
            top += self.dom.scroll_top(container);
        }
        Some((top + self.options.scroll_offset.resolve()).max(0.0))
    }
}

impl<D: Dom + fmt::Debug> fmt::Debug for AccordionController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccordionController")
            .field("dom", &self.dom)
            .field("wrapper", &self.wrapper)
            .field("options", &self.options)
            .field("scroll_container", &self.scroll_container)
            .field("opened_index", &self.opened_index.get())
            .field("disabled", &self.disabled.get())
            .field("transitions", &self.transitions)
            .field("scroll", &self.scroll)
            .field("events", &self.events)
            .finish()
    }
}
