mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::{ExportRequest, WorkflowEvent};
pub use handlers::{ExportHandler, ExportOutcome, ExportReport, LogHandler};

pub trait EventHandler {
    fn handle_event(&mut self, event: &WorkflowEvent);
}
