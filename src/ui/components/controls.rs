use eframe::egui;

#[derive(Default)]
pub struct ControlActions {
    pub end_conversation: bool,
    pub reset: bool,
}

pub fn render(ui: &mut egui::Ui) -> ControlActions {
    let mut actions = ControlActions::default();

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("Reset").clicked() {
            actions.reset = true;
        }
        if ui.button("End conversation").clicked() {
            actions.end_conversation = true;
        }
    });

    actions
}
