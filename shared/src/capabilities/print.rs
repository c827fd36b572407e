use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Hands the print view to the host print facility after a short delay.
pub struct Printer<E> {
    context: CapabilityContext<PrintOperation, E>,
}

impl<E> Clone for Printer<E> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
        }
    }
}

impl<Ev> Capability<Ev> for Printer<Ev> {
    type Operation = PrintOperation;
    type MappedSelf<MappedEv> = Printer<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Printer::new(self.context.map_event(f))
    }
}

impl<E> Printer<E> {
    pub fn new(context: CapabilityContext<PrintOperation, E>) -> Self {
        Self { context }
    }
}

impl<E> Printer<E>
where
    E: Send + 'static,
{
    /// Fire and forget: printing never feeds an event back.
    pub fn print(&self, delay_ms: u64) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(PrintOperation { delay_ms }).await;
        });
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintOperation {
    /// The shell waits this long before printing so layout can settle.
    pub delay_ms: u64,
}

impl Operation for PrintOperation {
    type Output = ();
}
