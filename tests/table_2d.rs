use approx::assert_abs_diff_eq;
use diffchain::prelude::*;

const LENGTH: f64 = 1.0;
const STATES: usize = 5;

fn standard_table(options: MonteCarloOptions) -> TransitionTable2D {
    let grid = Grid::new(LENGTH, STATES).unwrap();
    let process = Diffusion2D::standard();
    let dt = solve_dt(
        grid.dx(),
        process.max_volatility(&grid),
        CONTAINMENT_CONFIDENCE,
    )
    .unwrap();
    build_2d(&grid, &process, dt, &options).unwrap()
}

fn is_boundary(i: usize, j: usize) -> bool {
    i == 0 || i == STATES - 1 || j == 0 || j == STATES - 1
}

#[test]
fn frame_states_are_absorbing() {
    let table = standard_table(MonteCarloOptions::default().with_seed(1234));
    for i in 0..STATES {
        for j in 0..STATES {
            if is_boundary(i, j) {
                assert_eq!(
                    table.row(i, j).as_array(),
                    [0.0, 0.0, 0.0, 0.0, 1.0],
                    "state ({i}, {j})"
                );
            }
        }
    }
}

#[test]
fn interior_rows_are_normalized_and_bounded() {
    let table = standard_table(MonteCarloOptions::default().with_seed(1234));
    for i in 1..STATES - 1 {
        for j in 1..STATES - 1 {
            let row = table.row(i, j);
            assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-2);
            for p in row.as_array() {
                assert!(
                    (0.0..=1.0).contains(&p),
                    "state ({i}, {j}): {p} out of range"
                );
            }
        }
    }
}

#[test]
fn domain_center_is_symmetric_under_zero_drift() {
    let options = MonteCarloOptions::default()
        .with_samples(100_000)
        .with_seed(99);
    let table = standard_table(options);
    let center = table.row(2, 2);
    // Monte Carlo tolerance; the standard error at 1e5 samples is ~1e-3.
    assert_abs_diff_eq!(center.left, center.right, epsilon = 2e-2);
    assert_abs_diff_eq!(center.up, center.down, epsilon = 2e-2);
}

#[test]
fn same_seed_reproduces_the_whole_tensor() {
    let options = MonteCarloOptions::default().with_seed(7);
    let first = standard_table(options);
    let second = standard_table(options);
    for i in 0..STATES {
        for j in 0..STATES {
            assert_eq!(first.row(i, j), second.row(i, j), "state ({i}, {j})");
        }
    }
}

#[test]
fn different_seeds_yield_different_estimates() {
    let first = standard_table(MonteCarloOptions::default().with_seed(1));
    let second = standard_table(MonteCarloOptions::default().with_seed(2));
    let differs = (1..STATES - 1)
        .flat_map(|i| (1..STATES - 1).map(move |j| (i, j)))
        .any(|(i, j)| first.row(i, j) != second.row(i, j));
    assert!(differs, "independent seeds produced identical estimates");
}

#[test]
fn adjacent_seeds_do_not_share_cell_streams() {
    let first = standard_table(MonteCarloOptions::default().with_seed(1));
    let second = standard_table(MonteCarloOptions::default().with_seed(2));
    // Under zero drift and unit volatility every interior cell sees the
    // same relative geometry, so a sample stream reused one cell over
    // would reproduce the exact same hit counts there.
    for i in 1..STATES - 1 {
        for j in 1..STATES - 2 {
            assert_ne!(second.row(i, j), first.row(i, j + 1), "state ({i}, {j})");
        }
    }
}

#[test]
fn emitted_stream_is_row_major_with_five_values_per_state() {
    let table = standard_table(MonteCarloOptions::default().with_seed(1234));
    let mut buffer = Vec::new();
    table.write(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4 + STATES * STATES);
    assert_eq!(lines[1].parse::<usize>().unwrap(), STATES);

    for i in 0..STATES {
        for j in 0..STATES {
            let line = lines[4 + i * STATES + j];
            let values: Vec<f64> = line
                .split_whitespace()
                .map(|v| v.parse().unwrap())
                .collect();
            assert_eq!(values.len(), 5, "state ({i}, {j})");
            assert_eq!(
                values,
                table.row(i, j).as_array().to_vec(),
                "state ({i}, {j})"
            );
        }
    }
}

#[test]
fn zero_sample_configuration_is_rejected() {
    let grid = Grid::new(LENGTH, STATES).unwrap();
    let process = Diffusion2D::standard();
    let dt = solve_dt(grid.dx(), 1.0, CONTAINMENT_CONFIDENCE).unwrap();
    let options = MonteCarloOptions::default().with_samples(0);
    assert!(matches!(
        build_2d(&grid, &process, dt, &options),
        Err(DiffchainError::InvalidSampleCount)
    ));
}
