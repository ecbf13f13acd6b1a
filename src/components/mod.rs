pub mod history_table;
pub mod image_picker;
pub mod result_card;
pub mod severity_label;
