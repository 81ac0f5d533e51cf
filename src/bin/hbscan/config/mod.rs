mod hbond;
mod logging;
mod scheme;

pub use hbond::{StateLabels, build_hbond_config};
pub use logging::init_logging;
pub use scheme::{SchemeKind, load_scheme};
