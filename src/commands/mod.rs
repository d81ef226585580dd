pub mod config;
pub(crate) mod context;
pub mod init;
pub mod render;
pub mod select;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{run_render, run_render_impl};
pub use select::{run_select, run_select_impl};
