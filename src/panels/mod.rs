mod compose_panel;
mod describe_panel;
mod export_panel;
mod nav_panel;

pub use compose_panel::compose_panel;
pub use describe_panel::describe_panel;
pub use export_panel::export_panel;
pub use nav_panel::{NavAction, nav_panel, steps_panel};
