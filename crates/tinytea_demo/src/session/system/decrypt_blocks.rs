use bevy::prelude::*;
use tinytea_cipher::Direction;

use crate::session::{
    pipeline::process_session,
    settings::Settings,
    state::{Session, Stage},
};

/// Decrypts every block of the session buffer in place.
///
/// Only runs on a buffer that went through encryption.
pub(crate) fn decrypt_blocks(
    settings: Res<Settings>,
    session: Option<ResMut<Session>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(mut session) = session else {
        trace!("No session to decrypt");
        return;
    };

    if session.stage != Stage::Encrypted {
        warn!(
            "Skipping decryption of a session in stage {:?}",
            session.stage
        );
        return;
    }

    if let Err(err) = process_session(&mut session, &settings, Direction::Decrypt) {
        error!("Failed to decrypt session blocks: {}", err);
        exit.write(AppExit::error());
    }
}
