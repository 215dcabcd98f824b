use crate::{AccordionController, AccordionError, AccordionOptions, ClickEvent, ClickOutcome, Dom};

/// An accordion that applies its own click intents.
///
/// [`AccordionController::handle_click`] only reports what a click means. This wrapper turns a
/// `Select(i)` outcome into `select(Some(i))` and `Deselect` into `select(None)`, which is what
/// most pages want. Use the bare controller when selections need to be intercepted.
#[derive(Debug)]
pub struct Accordion<D: Dom> {
    c: AccordionController<D>,
}

impl<D: Dom> Accordion<D> {
    pub fn new(
        dom: D,
        wrapper: D::Node,
        options: AccordionOptions,
    ) -> Result<Self, AccordionError> {
        AccordionController::new(dom, wrapper, options).map(Self::from_controller)
    }

    pub fn from_controller(c: AccordionController<D>) -> Self {
        Self { c }
    }

    pub fn controller(&self) -> &AccordionController<D> {
        &self.c
    }

    pub fn controller_mut(&mut self) -> &mut AccordionController<D> {
        &mut self.c
    }

    pub fn into_controller(self) -> AccordionController<D> {
        self.c
    }

    /// Handles a click on an anchor and applies the resulting selection.
    pub fn click(&mut self, event: &ClickEvent<D::Node>) -> Result<ClickOutcome, AccordionError> {
        let outcome = self.c.handle_click(event);
        match outcome {
            ClickOutcome::Select(index) => self.c.select(Some(index))?,
            ClickOutcome::Deselect => self.c.select(None)?,
            ClickOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// See [`AccordionController::tick`].
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.c.tick(now_ms)
    }
}
