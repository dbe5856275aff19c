use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};
use crate::network::error::PROCESSING_ERROR_NOTICE;

use super::components::{chat_area, controls, input_bar, message_list, summary_panel};
use super::palette::Palette;
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    palette: Palette,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl ChatApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        palette: Palette,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_channels(palette, command_sender, event_receiver)
    }

    fn with_channels(
        palette: Palette,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            palette,
            command_sender,
            event_receiver,
        }
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ApiEvent::ReplyReceived {
                    text,
                    reply,
                    sentiment,
                } => self.state.apply_reply(text, reply, sentiment),
                ApiEvent::SendFailed { text, notice } => {
                    log::debug!("Message left unscored: {text}");
                    self.state.apply_send_failure(notice);
                }
                ApiEvent::ConversationEnded(summary) => self.state.show_summary(summary),
            }
        }
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        match self.command_sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send command to API worker: {err}");
                false
            }
        }
    }

    fn send_message(&mut self) {
        let Some(text) = self.state.begin_send() else {
            return;
        };
        if !self.send_command(ApiCommand::SendMessage(text)) {
            self.state
                .apply_send_failure(PROCESSING_ERROR_NOTICE.to_string());
        }
    }

    fn end_conversation(&mut self) {
        self.send_command(ApiCommand::EndConversation);
    }

    fn reset(&mut self) {
        self.state.reset();
        self.send_command(ApiCommand::Reset);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Sentiment Chat");
                let actions = controls::render(ui);
                if actions.end_conversation {
                    self.end_conversation();
                }
                if actions.reset {
                    self.reset();
                }
            });
        });

        egui::SidePanel::right("sentiment_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                message_list::render(ui, &self.state.scored_messages, &self.palette);

                if let Some(summary) = &self.state.summary {
                    ui.add_space(12.0);
                    summary_panel::render(ui, summary, &self.palette);
                }
            });

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            let send_enabled = self.state.send_enabled();
            let send = input_bar::render(
                ui,
                &mut self.state.input_text,
                send_enabled,
                &mut self.state.focus_input,
            );
            if send {
                self.send_message();
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, &self.state.messages, &self.palette);
        });

        // Worker events arrive off-frame.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
