use rand::seq::SliceRandom;
use rand::Rng;

use super::constants::MIN_FIELD_SIZE;
use super::error::GameError;
use super::position::Position;

/// Random draws tried before scanning the interior for free cells
pub const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Pick a food position with the thread-local RNG.
///
/// See [`food_position_with_rng`].
pub fn get_food_position(field_size: usize, exclude: &[Position]) -> Result<Position, GameError> {
    food_position_with_rng(&mut rand::thread_rng(), field_size, exclude)
}

/// Pick a random interior position not present in `exclude`.
///
/// Both coordinates fall in `1..=field_size - 2`, so food never lands on the
/// outer ring of the board. Candidates are drawn uniformly; after
/// [`MAX_SAMPLING_ATTEMPTS`] collisions the free interior cells are listed
/// and one is chosen from them.
pub fn food_position_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    field_size: usize,
    exclude: &[Position],
) -> Result<Position, GameError> {
    if field_size < MIN_FIELD_SIZE {
        return Err(GameError::InvalidFieldSize {
            size: field_size,
            min: MIN_FIELD_SIZE,
        });
    }

    let max = i32::try_from(field_size - 2)
        .map_err(|_| GameError::FieldTooLarge { size: field_size })?;

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let x = rng.gen_range(1..=max);
        let y = rng.gen_range(1..=max);
        let pos = Position::new(x, y);

        if !exclude.contains(&pos) {
            return Ok(pos);
        }
    }

    log::debug!(
        "no free cell after {} draws on a {}x{} field, scanning interior",
        MAX_SAMPLING_ATTEMPTS,
        field_size,
        field_size
    );

    let free: Vec<Position> = (1..=max)
        .flat_map(|y| (1..=max).map(move |x| Position::new(x, y)))
        .filter(|pos| !exclude.contains(pos))
        .collect();

    match free.choose(rng) {
        Some(&pos) => Ok(pos),
        None => {
            log::warn!("{}x{} field interior is full", field_size, field_size);
            Err(GameError::NoFreeCell { size: field_size })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn interior(field_size: i32) -> Vec<Position> {
        (1..field_size - 1)
            .flat_map(|y| (1..field_size - 1).map(move |x| Position::new(x, y)))
            .collect()
    }

    #[test]
    fn test_food_stays_inside_walls() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let pos = food_position_with_rng(&mut rng, 10, &[]).unwrap();
            assert!((1..=8).contains(&pos.x), "x out of range: {pos:?}");
            assert!((1..=8).contains(&pos.y), "y out of range: {pos:?}");
        }
    }

    #[test]
    fn test_food_avoids_excluded_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        let exclude = [Position::new(1, 1), Position::new(1, 2), Position::new(2, 1)];

        for _ in 0..1000 {
            let pos = food_position_with_rng(&mut rng, 5, &exclude).unwrap();
            assert!(!exclude.contains(&pos));
        }
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let exclude = [Position::new(1, 1)];
        for _ in 0..100 {
            let pos = get_food_position(4, &exclude).unwrap();
            assert_ne!(pos, Position::new(1, 1));
            assert!((1..=2).contains(&pos.x) && (1..=2).contains(&pos.y));
        }
    }

    #[test]
    fn test_last_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let free = Position::new(4, 2);
        let exclude: Vec<Position> = interior(7).into_iter().filter(|p| *p != free).collect();

        for _ in 0..20 {
            assert_eq!(food_position_with_rng(&mut rng, 7, &exclude), Ok(free));
        }
    }

    #[test]
    fn test_full_interior_reports_no_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let exclude = interior(6);

        assert_eq!(
            food_position_with_rng(&mut rng, 6, &exclude),
            Err(GameError::NoFreeCell { size: 6 })
        );
    }

    #[test]
    fn test_smallest_field_has_one_choice() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(food_position_with_rng(&mut rng, 3, &[]), Ok(Position::new(1, 1)));
    }

    #[test]
    fn test_rejects_tiny_field() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            food_position_with_rng(&mut rng, 2, &[]),
            Err(GameError::InvalidFieldSize { size: 2, min: 3 })
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_rejects_field_beyond_i32_coordinates() {
        let mut rng = StdRng::seed_from_u64(1);
        let size = i32::MAX as usize + 3;
        assert_eq!(
            food_position_with_rng(&mut rng, size, &[]),
            Err(GameError::FieldTooLarge { size })
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_largest_addressable_field() {
        let mut rng = StdRng::seed_from_u64(5);
        let size = i32::MAX as usize + 2;
        let pos = food_position_with_rng(&mut rng, size, &[]).unwrap();
        assert!(pos.x >= 1 && pos.y >= 1);
    }

    #[test]
    fn test_same_seed_same_food() {
        let exclude = [Position::new(2, 2)];
        let first = food_position_with_rng(&mut StdRng::seed_from_u64(11), 12, &exclude);
        let second = food_position_with_rng(&mut StdRng::seed_from_u64(11), 12, &exclude);
        assert_eq!(first, second);
    }
}
