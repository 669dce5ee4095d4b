use bevy::prelude::*;
use tinytea_cipher::Direction;

use crate::session::{pipeline::process_session, settings::Settings, state::Session};

/// Encrypts every block of the session buffer in place.
pub(crate) fn encrypt_blocks(
    settings: Res<Settings>,
    session: Option<ResMut<Session>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(mut session) = session else {
        trace!("No session to encrypt");
        return;
    };

    if let Err(err) = process_session(&mut session, &settings, Direction::Encrypt) {
        error!("Failed to encrypt session blocks: {}", err);
        exit.write(AppExit::error());
    }
}
