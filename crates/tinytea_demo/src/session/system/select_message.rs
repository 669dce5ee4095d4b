use bevy::prelude::*;
use bytes::Bytes;
use std::io;

use crate::session::{menu::read_option, settings::Settings, state::SelectedMessage};

/// Picks the demo message, prompting on standard input when the menu is interactive.
pub(crate) fn select_message(
    mut commands: Commands,
    settings: Res<Settings>,
    mut exit: MessageWriter<AppExit>,
) {
    info!("=== TEA CIPHER (each block = 2 words of 32 bits) ===");

    let default_option = settings.menu.default_option;

    let option = if settings.menu.interactive {
        for (index, message) in settings.messages.iter().enumerate() {
            info!("  {}) \"{}\"", index + 1, message);
        }

        read_option(
            io::stdin().lock(),
            io::stdout().lock(),
            settings.messages.len(),
            default_option,
        )
        .unwrap_or_else(|err| {
            warn!(
                "Failed to read menu option, using default {}: {}",
                default_option, err
            );
            default_option
        })
    } else {
        debug!("Menu is not interactive, using option {}", default_option);
        default_option
    };

    let Some(message) = settings.message(option) else {
        error!(
            "Option {} does not name one of the {} configured messages",
            option,
            settings.messages.len()
        );
        exit.write(AppExit::error());
        return;
    };

    info!("Selected option {}: \"{}\"", option, message);

    commands.insert_resource(SelectedMessage {
        option,
        text: Bytes::copy_from_slice(message.as_bytes()),
    });
}
