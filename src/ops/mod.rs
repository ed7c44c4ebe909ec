pub mod participant_ops;
pub mod group_ops;
pub mod list_ops;
pub mod settings_ops;
