use eframe::egui::{self, Align, Layout, RichText};

use crate::common::{Message, Role};
use crate::ui::palette::Palette;

pub fn render(ui: &mut egui::Ui, messages: &[Message], palette: &Palette) {
    egui::ScrollArea::vertical()
        .id_salt("transcript")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                ui.push_id(message.id, |ui| bubble(ui, message, palette));
                ui.add_space(6.0);
            }
        });
}

fn bubble(ui: &mut egui::Ui, message: &Message, palette: &Palette) {
    let (align, fill, text_color) = match message.role {
        Role::User => (Align::Max, palette.user_bubble, egui::Color32::WHITE),
        Role::Bot => (Align::Min, palette.bot_bubble, egui::Color32::from_gray(30)),
    };
    let max_width = ui.available_width() * 0.75;

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(RichText::new(&message.text).color(text_color));
            });
        ui.label(
            RichText::new(message.sent_at.format("%H:%M").to_string())
                .small()
                .color(palette.text_muted),
        );
    });
}
