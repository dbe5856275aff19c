pub mod chat_area;
pub mod controls;
pub mod input_bar;
pub mod message_list;
pub mod summary_panel;
