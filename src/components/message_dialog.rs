use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

/// A centered, non-collapsible window with a message and one or two buttons
pub struct MessageDialog<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub confirm: &'a str,
    pub cancel: Option<&'a str>,
}

impl<'a> MessageDialog<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            confirm: "OK",
            cancel: None,
        }
    }

    pub fn confirm_text(mut self, text: &'a str) -> Self {
        self.confirm = text;
        self
    }

    pub fn cancel_text(mut self, text: &'a str) -> Self {
        self.cancel = Some(text);
        self
    }

    pub fn show(&self, ctx: &egui::Context) -> Option<DialogChoice> {
        egui::Window::new(self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(self.body);
                ui.add_space(8.0);

                let mut choice = None;
                ui.horizontal(|ui| {
                    if let Some(cancel) = self.cancel {
                        if ui.button(cancel).clicked() {
                            choice = Some(DialogChoice::Cancel);
                        }
                    }
                    if ui.button(self.confirm).clicked() {
                        choice = Some(DialogChoice::Confirm);
                    }
                });
                choice
            })
            .and_then(|response| response.inner)
            .flatten()
    }
}
