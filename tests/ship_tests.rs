use battleship_solver::{BoardSize, Cell, Orientation, Ship, ShipError};

fn c(x: usize, y: usize) -> Cell {
    Cell::new(x, y)
}

#[test]
fn test_new_normalizes_corners() -> Result<(), ShipError> {
    let ship = Ship::new(c(4, 5), c(2, 5))?;
    assert_eq!(ship.start(), c(2, 5));
    assert_eq!(ship.end(), c(4, 5));
    assert!(ship.is_horizontal());
    assert!(!ship.is_vertical());
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    Ok(())
}

#[test]
fn test_occupied_cells_and_length() -> Result<(), ShipError> {
    let ship = Ship::new(c(3, 3), c(5, 3))?;
    assert_eq!(ship.occupied_cells(), &[c(3, 3), c(4, 3), c(5, 3)]);
    assert_eq!(ship.length(), 3);

    let vertical = Ship::new(c(2, 6), c(2, 2))?;
    assert_eq!(vertical.orientation(), Orientation::Vertical);
    assert_eq!(
        vertical.occupied_cells(),
        &[c(2, 2), c(2, 3), c(2, 4), c(2, 5), c(2, 6)]
    );
    for &cell in vertical.occupied_cells() {
        assert!(vertical.contains(cell));
    }
    assert!(!vertical.contains(c(2, 7)));
    assert!(!vertical.contains(c(3, 4)));
    Ok(())
}

#[test]
fn test_diagonal_is_invalid() {
    let err = Ship::new(c(1, 1), c(3, 3)).unwrap_err();
    assert_eq!(
        err,
        ShipError::InvalidGeometry {
            start: c(1, 1),
            end: c(3, 3)
        }
    );
}

#[test]
fn test_single_cell_ship() -> Result<(), ShipError> {
    let mut ship = Ship::new(c(7, 7), c(7, 7))?;
    assert_eq!(ship.length(), 1);
    assert!(!ship.is_sunk());
    assert!(ship.apply_damage(c(7, 7)));
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_from_origin() -> Result<(), ShipError> {
    let ship = Ship::from_origin(c(2, 3), Orientation::Vertical, 4)?;
    assert_eq!(ship.start(), c(2, 3));
    assert_eq!(ship.end(), c(2, 6));
    assert_eq!(ship.length(), 4);

    let single = Ship::from_origin(c(5, 5), Orientation::Vertical, 1)?;
    assert_eq!(single.orientation(), Orientation::Vertical);

    assert_eq!(
        Ship::from_origin(c(1, 1), Orientation::Horizontal, 0).unwrap_err(),
        ShipError::ZeroLength
    );
    Ok(())
}

#[test]
fn test_damage_and_sink() -> Result<(), ShipError> {
    let mut ship = Ship::new(c(3, 3), c(5, 3))?;
    assert!(ship.apply_damage(c(4, 3)));
    assert!(ship.apply_damage(c(5, 3)));
    assert!(!ship.is_sunk());
    // repeated damage changes nothing
    assert!(ship.apply_damage(c(5, 3)));
    assert_eq!(ship.damage_count(), 2);
    assert!(ship.apply_damage(c(3, 3)));
    assert!(ship.is_sunk());
    // miss
    assert!(!ship.apply_damage(c(10, 3)));
    assert_eq!(ship.damage_count(), 3);
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_near_cell() -> Result<(), ShipError> {
    let ship = Ship::new(c(2, 2), c(4, 2))?;
    assert!(ship.is_near_cell(c(1, 3)));
    assert!(ship.is_near_cell(c(3, 3)));
    assert!(ship.is_near_cell(c(5, 1)));
    assert!(ship.is_near_cell(c(5, 2)));
    assert!(!ship.is_near_cell(c(6, 2)));
    assert!(!ship.is_near_cell(c(3, 4)));
    Ok(())
}

#[test]
fn test_adjacency() -> Result<(), ShipError> {
    let ship = Ship::new(c(3, 3), c(5, 3))?;
    assert!(ship.is_adjacent_to(&Ship::new(c(3, 4), c(5, 4))?));
    // corner touch counts
    assert!(ship.is_adjacent_to(&Ship::new(c(6, 4), c(6, 6))?));
    assert!(!ship.is_adjacent_to(&Ship::new(c(7, 3), c(7, 5))?));
    assert!(!ship.is_adjacent_to(&Ship::new(c(3, 5), c(5, 5))?));
    Ok(())
}

#[test]
fn test_fits_within() -> Result<(), ShipError> {
    let size = BoardSize::new(10, 10);
    assert!(Ship::new(c(8, 10), c(10, 10))?.fits_within(size));
    assert!(!Ship::new(c(9, 10), c(11, 10))?.fits_within(size));
    assert!(!Ship::new(c(0, 1), c(2, 1))?.fits_within(size));
    Ok(())
}
