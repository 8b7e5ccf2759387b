use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{PUNCH_CARD_HEIGHT, PUNCH_CARD_WIDTH, Viewport};
use crate::error::{PunchCardError, PunchCardResult};

use super::PunchCardStyle;

/// Punch-card output setup: canvas size, target file, visual style.
///
/// Serializable so host applications can persist/load their setup. There is no
/// process-wide instance; callers construct a config and hand it to a
/// [`PunchCardWriter`] explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchCardConfig {
    pub viewport: Viewport,
    pub output_path: PathBuf,
    #[serde(default)]
    pub style: PunchCardStyle,
}

impl PunchCardConfig {
    /// Creates the stock setup: a 600x150 card written to
    /// `<home>/.config/time-tracker/punchCard.png`.
    pub fn new() -> PunchCardResult<Self> {
        Ok(Self {
            viewport: Viewport::new(PUNCH_CARD_WIDTH, PUNCH_CARD_HEIGHT),
            output_path: default_output_path()?,
            style: PunchCardStyle::default(),
        })
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PunchCardStyle) -> Self {
        self.style = style;
        self
    }
}

/// Well-known punch-card location under the user's home directory.
pub fn default_output_path() -> PunchCardResult<PathBuf> {
    let home = dirs_next::home_dir().ok_or(PunchCardError::HomeDirUnavailable)?;
    Ok(home
        .join(".config")
        .join("time-tracker")
        .join("punchCard.png"))
}

#[cfg(feature = "cairo-backend")]
pub use cairo_writer::PunchCardWriter;

#[cfg(feature = "cairo-backend")]
mod cairo_writer {
    use std::fs::{self, File};
    use std::path::Path;

    use chrono::Weekday;
    use tracing::debug;

    use crate::api::{EnglishWeekdayNames, WeekdayNames, build_punch_card_frame};
    use crate::core::{Event, WeeklyProfile};
    use crate::error::{PunchCardError, PunchCardResult};
    use crate::render::{CairoRenderer, Renderer};

    use super::PunchCardConfig;

    /// Orchestrates one full punch-card pass: aggregate, draw, encode, write.
    ///
    /// Each call is a single synchronous unit of work; the writer holds no
    /// mutable state between calls.
    #[derive(Debug)]
    pub struct PunchCardWriter<N: WeekdayNames = EnglishWeekdayNames> {
        config: PunchCardConfig,
        names: N,
    }

    impl PunchCardWriter<EnglishWeekdayNames> {
        #[must_use]
        pub fn new(config: PunchCardConfig) -> Self {
            Self::with_names(config, EnglishWeekdayNames)
        }
    }

    impl<N: WeekdayNames> PunchCardWriter<N> {
        #[must_use]
        pub fn with_names(config: PunchCardConfig, names: N) -> Self {
            Self { config, names }
        }

        #[must_use]
        pub fn config(&self) -> &PunchCardConfig {
            &self.config
        }

        /// Renders the events and writes the card to the configured path.
        ///
        /// Returns the busiest weekday of the aggregated profile; all-zero
        /// profiles resolve to Monday.
        pub fn save_punch_card(&self, events: &[Event]) -> PunchCardResult<Weekday> {
            self.save_to(events, &self.config.output_path)
        }

        /// Like [`PunchCardWriter::save_punch_card`] with an explicit target
        /// path. Missing parent directories are created; an existing file is
        /// fully overwritten.
        pub fn save_to(&self, events: &[Event], path: &Path) -> PunchCardResult<Weekday> {
            let profile = WeeklyProfile::from_events(events)?;
            let renderer = self.render_profile(&profile)?;

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| PunchCardError::Io {
                    action: "create directory",
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            let mut file = File::create(path).map_err(|source| PunchCardError::Io {
                action: "create file",
                path: path.to_path_buf(),
                source,
            })?;
            renderer
                .surface()
                .write_to_png(&mut file)
                .map_err(|err| match err {
                    cairo::IoError::Io(source) => PunchCardError::Io {
                        action: "write png",
                        path: path.to_path_buf(),
                        source,
                    },
                    cairo::IoError::Cairo(err) => {
                        PunchCardError::InvalidData(format!("failed to encode png: {err}"))
                    }
                })?;

            debug!(path = %path.display(), "punch card written");
            Ok(profile.busiest_weekday())
        }

        /// Renders the events and returns the encoded PNG bytes without
        /// touching the filesystem.
        pub fn render_png_bytes(&self, events: &[Event]) -> PunchCardResult<Vec<u8>> {
            let profile = WeeklyProfile::from_events(events)?;
            let renderer = self.render_profile(&profile)?;

            let mut bytes = Vec::new();
            renderer
                .surface()
                .write_to_png(&mut bytes)
                .map_err(|err| {
                    PunchCardError::InvalidData(format!("failed to encode png: {err}"))
                })?;
            Ok(bytes)
        }

        fn render_profile(&self, profile: &WeeklyProfile) -> PunchCardResult<CairoRenderer> {
            let frame = build_punch_card_frame(
                profile,
                self.config.viewport,
                &self.config.style,
                &self.names,
            )?;

            let width = i32::try_from(self.config.viewport.width).map_err(|_| {
                PunchCardError::InvalidData("viewport width overflows i32".to_owned())
            })?;
            let height = i32::try_from(self.config.viewport.height).map_err(|_| {
                PunchCardError::InvalidData("viewport height overflows i32".to_owned())
            })?;

            let mut renderer = CairoRenderer::new(width, height)?;
            renderer.set_clear_color(self.config.style.background_color)?;
            renderer.render(&frame)?;
            Ok(renderer)
        }
    }
}
