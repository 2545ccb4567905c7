mod model;
mod persistence;
mod theme;

pub use model::{BarAlign, NavBarConfig};
pub use persistence::{load_config, load_config_or_default, save_config};
pub use theme::{ColorScheme, SchemeChoice};
