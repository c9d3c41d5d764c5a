//! # Media Capability
//!
//! The gallery the user picks supplier images from is a device capability,
//! not registry logic. It sits behind the [`MediaAccess`] trait so the core
//! stays testable without a real picker.
//!
//! ## Implementations
//!
//! - [`FileMedia`]: production picker for the terminal client. The
//!   "gallery" is a directory; permission is being able to read it, and
//!   picking is typing a path (blank input cancels).
//! - [`fixtures::ScriptedMedia`]: canned outcomes for tests.
//!
//! Denied permission and user cancellation are outcomes the command layer
//! interprets; implementations only report them.

use crate::error::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Outcome of one image selection. Cancellation is a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Cancelled,
    /// URI of the chosen image.
    Selected(String),
}

/// Abstract gallery access: ask for permission, then pick one image.
///
/// Callers must not attempt a pick when permission was not granted.
pub trait MediaAccess {
    fn request_permission(&mut self) -> Result<bool>;
    fn pick_image(&mut self) -> Result<Pick>;
}

/// Filesystem-backed picker used by the CLI client.
pub struct FileMedia {
    gallery: PathBuf,
}

impl FileMedia {
    pub fn new<P: Into<PathBuf>>(gallery: P) -> Self {
        Self {
            gallery: gallery.into(),
        }
    }
}

impl MediaAccess for FileMedia {
    fn request_permission(&mut self) -> Result<bool> {
        // Permission here means the gallery directory is readable.
        Ok(fs::read_dir(&self.gallery).is_ok())
    }

    fn pick_image(&mut self) -> Result<Pick> {
        // The terminal stands in for the device picker: prompt for a path
        // relative to the gallery, blank input cancels.
        print!("image path (blank to cancel): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(Pick::Cancelled);
        }

        let input = input.trim();
        if input.is_empty() {
            return Ok(Pick::Cancelled);
        }

        let path = if Path::new(input).is_absolute() {
            PathBuf::from(input)
        } else {
            self.gallery.join(input)
        };
        // Surfaces a not-found/unreadable path immediately as an IO error.
        let path = fs::canonicalize(&path)?;
        Ok(Pick::Selected(format!("file://{}", path.display())))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted media capability: a fixed permission answer and a queue of
    /// pick outcomes. An exhausted queue cancels.
    pub struct ScriptedMedia {
        granted: bool,
        picks: VecDeque<Pick>,
    }

    impl ScriptedMedia {
        pub fn granting() -> Self {
            Self {
                granted: true,
                picks: VecDeque::new(),
            }
        }

        pub fn denying() -> Self {
            Self {
                granted: false,
                picks: VecDeque::new(),
            }
        }

        pub fn with_pick(mut self, pick: Pick) -> Self {
            self.picks.push_back(pick);
            self
        }
    }

    impl MediaAccess for ScriptedMedia {
        fn request_permission(&mut self) -> Result<bool> {
            Ok(self.granted)
        }

        fn pick_image(&mut self) -> Result<Pick> {
            Ok(self.picks.pop_front().unwrap_or(Pick::Cancelled))
        }
    }
}
