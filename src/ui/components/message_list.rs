use eframe::egui::{self, Align, Color32, Layout, RichText};

use crate::common::ScoredMessage;
use crate::ui::palette::Palette;
use crate::ui::state::EMPTY_LIST_PLACEHOLDER;

pub fn render(ui: &mut egui::Ui, entries: &[ScoredMessage], palette: &Palette) {
    ui.heading("Message sentiment");
    ui.separator();

    if entries.is_empty() {
        ui.label(
            RichText::new(EMPTY_LIST_PLACEHOLDER)
                .italics()
                .color(palette.text_muted),
        );
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("sentiment_list")
        .auto_shrink([false, true])
        .max_height(ui.available_height() * 0.6)
        .show(ui, |ui| {
            for entry in entries {
                entry_row(ui, entry, palette);
                ui.add_space(4.0);
            }
        });
}

fn entry_row(ui: &mut egui::Ui, entry: &ScoredMessage, palette: &Palette) {
    let accent = palette.accent(entry.sentiment.category());

    egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(8, 6))
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                // Left accent bar.
                let (rect, _) = ui.allocate_exact_size(egui::vec2(4.0, 18.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, accent);

                ui.label(RichText::new(entry.preview()).color(palette.text_muted));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    badge(ui, &entry.sentiment.label, accent);
                });
            });
        });
}

/// Label only; scores are never shown on a badge.
fn badge(ui: &mut egui::Ui, label: &str, accent: Color32) {
    egui::Frame::new()
        .fill(accent)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().strong().color(Color32::WHITE));
        });
}
