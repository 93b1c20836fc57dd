/// UI intents produced by the key handler and applied against the current
/// view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NextTab,
    PreviousTab,
    SelectTab(usize),
    FocusNext,
    FocusPrevious,
    Press,
    Quit,
}
