//! Application state for the leave-desk API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::context::DataContext;
use crate::export::{DirectorySink, Exporter};
use crate::holidays::{HolidayScreen, Notifier, StubImporter};

/// The holiday screen as shared between handlers.
pub type SharedScreen = Arc<RwLock<HolidayScreen<DataContext>>>;

/// Shared application state.
///
/// Handlers mutate holidays through the screen under a write lock and build
/// reports from a read lock on the same data context.
#[derive(Clone)]
pub struct AppState {
    screen: SharedScreen,
    exporter: Arc<Exporter>,
    archive: Arc<DirectorySink>,
}

impl AppState {
    /// Creates the state from the loaded configuration, the seeded data
    /// context and the notifier that receives import toasts.
    ///
    /// The configuration is split into the importer, exporter and archive
    /// settings here; handlers never read it directly.
    pub fn new(config: ConfigLoader, context: DataContext, notifier: Arc<dyn Notifier>) -> Self {
        let importer = StubImporter::new(config.import().clone(), notifier);
        let exporter = Exporter::new(config.export().clone());
        let archive = DirectorySink::new(config.export().output_dir.clone());

        Self {
            screen: Arc::new(RwLock::new(HolidayScreen::new(context, importer))),
            exporter: Arc::new(exporter),
            archive: Arc::new(archive),
        }
    }

    /// Returns the shared holiday screen.
    pub fn screen(&self) -> &SharedScreen {
        &self.screen
    }

    /// Returns the report exporter.
    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    /// Returns the sink that saves exports into the output directory.
    pub fn archive(&self) -> &DirectorySink {
        &self.archive
    }
}
