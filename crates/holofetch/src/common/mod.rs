pub mod telemetry;

pub use holofetch_common::Colors;
pub use holofetch_common::ErrorCategory;
pub use holofetch_common::color_init;
pub use holofetch_common::color_is_disabled;
