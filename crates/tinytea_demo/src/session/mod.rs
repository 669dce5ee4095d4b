use bevy::prelude::*;

use crate::session::{settings::Settings, system::*};

pub mod menu;
pub mod pipeline;
pub mod settings;
pub mod state;
pub mod system;

/// Runs one pad, encrypt, decrypt and verify session at startup.
pub(crate) struct DemoSessionPlugin;

impl Plugin for DemoSessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, initialize_settings).add_systems(
            Startup,
            (
                select_message,
                pad_message,
                encrypt_blocks,
                decrypt_blocks,
                verify_round_trip,
            )
                .chain()
                .run_if(resource_exists::<Settings>),
        );
    }
}
