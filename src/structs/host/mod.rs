pub mod settings;
pub mod rule_key;
pub mod active_rule;
pub mod input_file;
pub mod text_range;
pub mod new_issue;
pub mod sensor_descriptor;
