//! Seller console - product registration core
//!
//! # Overview
//!
//! - **Options** (`options`): option group validation, combination
//!   generation and the staleness check before submit
//! - **Form** (`form`): form store with change notifications, option editor,
//!   combination table and the registration session
//! - **Checks** (`checks`): debounced validation, duplication lookups
//! - **Confirm** (`confirm`): injected confirmation dialogs
//!
//! # Layout
//!
//! ```text
//! seller-console/src/
//! ├── core/          # configuration
//! ├── options/       # option groups → variant combinations
//! ├── form/          # form store, editing actions, payload
//! ├── checks/        # debounce, duplication cache
//! ├── confirm.rs     # confirmation service
//! └── utils/         # logging, field validation
//! ```

pub mod checks;
pub mod confirm;
pub mod core;
pub mod form;
pub mod options;
pub mod utils;

pub use checks::{Debouncer, DuplicationChecker, DuplicationKind, DuplicationSource};
pub use confirm::{ConfirmRequest, ConfirmService, StaticConfirm};
pub use core::Config;
pub use form::{FormChange, FormError, FormField, FormResult, FormStore, ProductForm, RegistrationSession};
pub use options::{OptionError, build_combinations};
pub use utils::logger::{init_logger, init_logger_with_file};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Load `.env` and start logging. Returns the loaded configuration.
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}
