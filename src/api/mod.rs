mod frame_builder;
mod locale;
mod style;
mod writer;

pub use frame_builder::build_punch_card_frame;
pub use locale::{CustomWeekdayNames, EnglishWeekdayNames, WeekdayNames};
pub use style::PunchCardStyle;
#[cfg(feature = "cairo-backend")]
pub use writer::PunchCardWriter;
pub use writer::{PunchCardConfig, default_output_path};
