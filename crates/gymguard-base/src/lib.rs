pub mod logging;
pub mod vec2;

pub use logging::{
    init_file_logger, init_stdout_logger, level_from_env, FileLogger, StdoutLogger, LOG_LEVEL_ENV,
};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use gymguard_base::log::*
pub use log;
