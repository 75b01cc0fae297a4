#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run one asynchronous fetch against the listings service.
    StartFetch,
}
