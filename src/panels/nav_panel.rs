use eframe::egui;

use crate::workflow::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Next,
}

/// Numbered step list, the current step highlighted
pub fn steps_panel(ui: &mut egui::Ui, current: Step) {
    ui.horizontal(|ui| {
        for step in Step::ALL {
            let text = format!("{}. {}", step.index() + 1, step.label());
            if step == current {
                ui.strong(text);
            } else {
                ui.weak(text);
            }
            if !step.is_last() {
                ui.label("›");
            }
        }
    });
}

/// Back / Next buttons. On the last step "Next" reads "Download".
pub fn nav_panel(ui: &mut egui::Ui, current: Step) -> Option<NavAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let can_go_back = current.prev().is_some();
        if ui.add_enabled(can_go_back, egui::Button::new("Back")).clicked() {
            action = Some(NavAction::Back);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if current.is_last() { "Download" } else { "Next" };
            if ui.button(label).clicked() {
                action = Some(NavAction::Next);
            }
        });
    });
    action
}
