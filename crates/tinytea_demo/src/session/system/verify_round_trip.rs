use bevy::prelude::*;
use tinytea_report::TextPreview;

use crate::session::state::{RoundTrip, Session, Stage};

/// Checks that decryption restored the copied message and zero padding.
pub(crate) fn verify_round_trip(
    mut commands: Commands,
    session: Option<Res<Session>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(session) = session else {
        trace!("No session to verify");
        return;
    };

    let payload_matches = session.buffer.payload() == session.expected_payload();
    let padding_is_zero = session.buffer.padding().iter().all(|&byte| byte == 0);
    let verified = session.stage == Stage::Decrypted && payload_matches && padding_is_zero;

    info!(
        "Final decrypted text: {}",
        TextPreview(session.buffer.as_bytes())
    );

    commands.insert_resource(RoundTrip {
        verified,
        original_len: session.original.len(),
        block_count: session.buffer.block_count(),
    });

    if !verified {
        error!(
            "Round trip failed (stage {:?}, payload matches: {}, padding zero: {})",
            session.stage, payload_matches, padding_is_zero
        );
        exit.write(AppExit::error());
        return;
    }

    info!("=== SUMMARY ===");
    info!("- Each block processed: exactly 64 bits");
    info!("- Split into 2 words of 32 bits each");
    info!(
        "- {} block(s) encrypted and decrypted independently",
        session.buffer.block_count()
    );
    info!("- Padding applied when needed");
    info!("=== ROUND TRIP VERIFIED ===");
}
