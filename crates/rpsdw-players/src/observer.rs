use super::*;

/// Hook invoked after every decision a [`Selector`] makes.
///
/// Observers see the decision and the memory it was drawn from. They
/// cannot influence the choice.
pub trait Observer: Send {
    fn decided(&mut self, decision: &Decision, memory: &Memory);
}

/// Writes one debug line per decision through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Observer for Logger {
    fn decided(&mut self, decision: &Decision, memory: &Memory) {
        log::debug!("{} | {}", decision, memory);
    }
}
