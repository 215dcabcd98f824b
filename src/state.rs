/// A lightweight, serializable snapshot of the accordion state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// This is useful for restoring which panel was open across page transitions without coupling
/// the controller to any storage mechanism.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccordionState {
    pub opened_index: Option<usize>,
    pub disabled: bool,
}
