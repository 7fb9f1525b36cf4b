/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Persist the current settings.
    SaveConfig,
    Quit,
}
