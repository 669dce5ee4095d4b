use bevy::{
    prelude::*,
    tasks::{ComputeTaskPool, ParallelSliceMut, TaskPool},
};
use tinytea_cipher::{Direction, TEA_BLOCK_SIZE, TeaError, TeaKey};
use tinytea_report::{BlockHex, BlockWords};

use crate::session::{
    settings::Settings,
    state::{Session, Stage},
};

/// Returns the shared compute pool, creating it when no plugin did.
pub(crate) fn compute_pool() -> &'static TaskPool {
    ComputeTaskPool::get_or_init(TaskPool::default)
}

/// Applies `direction` to every block of `buffer` in place.
///
/// With a `pool`, the buffer is split into chunks of `blocks_per_task` blocks
/// and the chunks run as separate tasks. Chunks never overlap and blocks are
/// independent, so the result is identical to the sequential pass.
///
/// # Errors
/// - [`TeaError::InvalidBlockSize`]: If the buffer is not block aligned.
///   Nothing is modified in that case.
pub fn transform_blocks<B: AsMut<[u8]>>(
    buffer: &mut B,
    key: &TeaKey,
    direction: Direction,
    pool: Option<&TaskPool>,
    blocks_per_task: usize,
) -> Result<(), TeaError> {
    let length = buffer.as_mut().len();

    let Some(pool) = pool else {
        return direction.apply_in_place(buffer.as_mut(), key);
    };

    if length % TEA_BLOCK_SIZE != 0 {
        return Err(TeaError::InvalidBlockSize { length });
    }

    let chunk_size = blocks_per_task.max(1) * TEA_BLOCK_SIZE;

    trace!(
        "Running {} over {} block(s) in chunks of {} bytes",
        direction,
        length / TEA_BLOCK_SIZE,
        chunk_size
    );

    buffer
        .par_chunk_map_mut(pool, chunk_size, |_, chunk| {
            direction.apply_in_place(chunk, key)
        })
        .into_iter()
        .collect()
}

/// Logs the session blocks, transforms them, and logs the result.
pub(crate) fn process_session(
    session: &mut Session,
    settings: &Settings,
    direction: Direction,
) -> Result<(), TeaError> {
    let (active, done) = match direction {
        Direction::Encrypt => ("Encrypting", "encrypted"),
        Direction::Decrypt => ("Decrypting", "decrypted"),
    };

    info!("=== {} (each block separately) ===", active.to_uppercase());

    for (index, block) in session.buffer.blocks().enumerate() {
        info!(
            "{} block {} - words in:\n{}",
            active,
            index + 1,
            BlockWords::from(block)
        );
    }

    let pool = settings.parallel.then(compute_pool);

    transform_blocks(
        &mut session.buffer,
        &settings.key,
        direction,
        pool,
        settings.blocks_per_task,
    )?;

    session.stage = match direction {
        Direction::Encrypt => Stage::Encrypted,
        Direction::Decrypt => Stage::Decrypted,
    };

    info!("=== {} BLOCKS ===", done.to_uppercase());

    for (index, block) in session.buffer.blocks().enumerate() {
        info!(
            "Block {} {}: {}\n{}",
            index + 1,
            done,
            BlockHex(block),
            BlockWords::from(block)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinytea_padding::pad;

    const SAMPLE_KEY: TeaKey = [0x12345678, 0x9ABCDEF0, 0xFEDCBA98, 0x76543210];

    fn sample_buffer() -> Vec<u8> {
        (0u8..=255).cycle().take(8 * 37).collect()
    }

    #[test]
    fn test_parallel_transform_matches_sequential() {
        let pool = TaskPool::new();

        for blocks_per_task in [1, 2, 5, 64] {
            let mut sequential = sample_buffer();
            let mut parallel = sample_buffer();

            transform_blocks(&mut sequential, &SAMPLE_KEY, Direction::Encrypt, None, 1)
                .expect("aligned buffer");
            transform_blocks(
                &mut parallel,
                &SAMPLE_KEY,
                Direction::Encrypt,
                Some(&pool),
                blocks_per_task,
            )
            .expect("aligned buffer");

            assert_eq!(parallel, sequential, "blocks_per_task = {blocks_per_task}");
        }
    }

    #[test]
    fn test_parallel_round_trip_restores_buffer() {
        let pool = TaskPool::new();
        let original = sample_buffer();
        let mut buffer = original.clone();

        transform_blocks(&mut buffer, &SAMPLE_KEY, Direction::Encrypt, Some(&pool), 3)
            .expect("aligned buffer");
        assert_ne!(buffer, original);

        transform_blocks(&mut buffer, &SAMPLE_KEY, Direction::Decrypt, Some(&pool), 3)
            .expect("aligned buffer");
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_parallel_rejects_unaligned_buffer_untouched() {
        let pool = TaskPool::new();
        let mut buffer = vec![7u8; 12];

        let result = transform_blocks(&mut buffer, &SAMPLE_KEY, Direction::Encrypt, Some(&pool), 1);

        assert_eq!(result, Err(TeaError::InvalidBlockSize { length: 12 }));
        assert_eq!(buffer, vec![7u8; 12]);
    }

    #[test]
    fn test_process_session_updates_stage() {
        let settings = Settings::default();
        let buffer = pad(b"Texto", settings.max_input_len);
        let mut session = Session::new(bytes::Bytes::from_static(b"Texto"), buffer);

        process_session(&mut session, &settings, Direction::Encrypt).expect("aligned buffer");
        assert_eq!(session.stage, Stage::Encrypted);
        assert_ne!(session.buffer.payload(), b"Texto");

        process_session(&mut session, &settings, Direction::Decrypt).expect("aligned buffer");
        assert_eq!(session.stage, Stage::Decrypted);
        assert_eq!(session.buffer.payload(), session.expected_payload());
    }
}
