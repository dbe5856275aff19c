use eframe::egui::{self, RichText};

use crate::common::ConversationSentiment;
use crate::ui::palette::Palette;

pub fn render(ui: &mut egui::Ui, summary: &ConversationSentiment, palette: &Palette) {
    ui.heading("Conversation sentiment");
    ui.separator();

    ui.label(
        RichText::new(&summary.label)
            .size(22.0)
            .strong()
            .color(palette.accent(summary.category())),
    );
    ui.label(RichText::new(summary.score_text()).color(palette.text_muted));

    if let Some(trend) = &summary.trend {
        ui.label(
            RichText::new(format!("Trend: {trend}"))
                .small()
                .color(palette.text_muted),
        );
    }
}
