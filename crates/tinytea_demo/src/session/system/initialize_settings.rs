use bevy::prelude::*;

use crate::session::settings::{Settings, SettingsFile};

/// Loads the demo settings unless they were already inserted by the host app.
///
/// A [`SettingsFile`] resource overrides the default file location. A file
/// that cannot be read, parsed or validated ends the app with an error exit.
pub(crate) fn initialize_settings(
    mut commands: Commands,
    existing: Option<Res<Settings>>,
    file: Option<Res<SettingsFile>>,
    mut exit: MessageWriter<AppExit>,
) {
    if existing.is_some() {
        debug!("Demo settings already present, skipping configuration file.");
        return;
    }

    let loaded = match file {
        Some(file) => Settings::load_or_default_from(&file.0),
        None => Settings::load_or_default(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(err) => {
            error!("Failed to load TEA demo settings: {:#}", err);
            exit.write(AppExit::error());
            return;
        }
    };

    commands.insert_resource(settings);

    info!("Demo settings initialized successfully.");
}
