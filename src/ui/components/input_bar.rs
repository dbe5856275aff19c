use eframe::egui;

const SEND_BUTTON_WIDTH: f32 = 64.0;

/// Returns `true` when the user asked to send, by button or by Enter.
/// The input itself is only read by the caller.
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    send_enabled: bool,
    focus_input: &mut bool,
) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let width = (ui.available_width() - SEND_BUTTON_WIDTH).max(0.0);
        let response = ui.add_sized(
            [width, 28.0],
            egui::TextEdit::singleline(input_text).hint_text("Type a message..."),
        );

        if std::mem::take(focus_input) {
            response.request_focus();
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }

        if ui
            .add_enabled(send_enabled, egui::Button::new("Send"))
            .clicked()
        {
            send = true;
        }
    });

    send
}
