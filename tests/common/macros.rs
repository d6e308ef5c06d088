/// Asserts that the population holds exactly the given number of cells.
#[macro_export]
macro_rules! assert_population {
    ($pop:expr, $count:expr) => {
        assert_eq!($pop.population(), $count, "Population count mismatch");
    };
}

/// Asserts that a cell's health, energy and size match the expected triple.
#[macro_export]
macro_rules! assert_vitals {
    ($cell:expr, $health:expr, $energy:expr, $size:expr) => {
        assert_eq!(
            ($cell.health, $cell.energy, $cell.size),
            ($health, $energy, $size),
            "Vitals (health, energy, size) mismatch for cell {}",
            $cell.id
        );
    };
}
