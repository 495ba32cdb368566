use approx::assert_relative_eq;
use bridge_fragility::prelude::*;
use std::io::{Cursor, Write};

const HEADER: &str = "test01 6.5 1.0 1.0 JAN 1 2020 00:00:00 GMT 0.0 0.0 2.0 2.0";

fn psa03_at(i: usize, j: usize) -> f64 {
    10.0 * (i * 3 + j + 1) as f64
}

fn psa10_at(i: usize, j: usize) -> f64 {
    psa03_at(i, j) / 2.0 + 1.0
}

fn pga_at(i: usize, j: usize) -> f64 {
    0.05 + 0.01 * (i * 3 + j) as f64
}

/// 3x3 grid over lat/lon 0..=2, written north row first like an upstream grid
fn grid_text(header: &str) -> String {
    let mut text = format!("{header}\n");
    for i in (0..3).rev() {
        for j in 0..3 {
            text.push_str(&format!(
                "{:.4} {:.4} {} 1.0 5.0 {} {} 2.0\n",
                j as f64,
                i as f64,
                pga_at(i, j),
                psa03_at(i, j),
                psa10_at(i, j)
            ));
        }
    }
    text
}

fn model_with(header: &str, options: EvaluationOptions) -> DamageModel {
    let file = parse_grid(Cursor::new(grid_text(header)), options.bounds_buffer).unwrap();
    DamageModel::from_grid_file(file, options).unwrap()
}

fn model() -> DamageModel {
    model_with(HEADER, EvaluationOptions::default())
}

fn line(id: &str, lat: f64, lon: f64) -> String {
    format!("{id}:BRIDGE {id}:{id}/1:{lat}:{lon}:1962:2:1:90:88:40")
}

#[test]
fn test_bridge_in_cell_uses_four_corners() {
    let m = model();
    let g = m.ground_motion(0.5, 0.5).unwrap();
    let corners = [(0, 0), (0, 1), (1, 0), (1, 1)];
    let mean = |f: fn(usize, usize) -> f64| corners.iter().map(|&(i, j)| f(i, j)).sum::<f64>() / 4.0;
    assert_relative_eq!(g.psa03, mean(psa03_at), epsilon = 1e-9);
    assert_relative_eq!(g.psa10, mean(psa10_at), epsilon = 1e-9);
    assert_relative_eq!(g.pga, mean(pga_at), epsilon = 1e-9);
}

#[test]
fn test_off_centre_bridge_uses_inverse_square_weights() {
    let m = model();
    let (lat, lon) = (0.25, 0.4);
    let g = m.ground_motion(lat, lon).unwrap();

    let corners = [(0usize, 0usize), (0, 1), (1, 0), (1, 1)];
    let mut wsum = 0.0;
    let mut acc = 0.0;
    for (i, j) in corners {
        let d2 = (lat - i as f64).powi(2) + (lon - j as f64).powi(2);
        let w = 1.0 / d2;
        wsum += w;
        acc += w * psa03_at(i, j);
    }
    assert_relative_eq!(g.psa03, acc / wsum, epsilon = 1e-9);
}

#[test]
fn test_bridge_on_node_takes_node_values() {
    let m = model();
    let g = m.ground_motion(1.0, 1.0).unwrap();
    assert_eq!(g.psa03, psa03_at(1, 1));
    assert_eq!(g.psa10, psa10_at(1, 1));
    assert_eq!(g.pga, pga_at(1, 1));
}

#[test]
fn test_every_node_is_returned_unmodified() {
    let m = model_with(
        "x 6.5 1.0 1.0 JAN 1 2020 00:00:00 GMT -1.0 -1.0 3.0 3.0",
        EvaluationOptions::default(),
    );
    for i in 0..3 {
        for j in 0..3 {
            let g = m.ground_motion(i as f64, j as f64).unwrap();
            assert_eq!(g.psa03, psa03_at(i, j));
        }
    }
}

#[test]
fn test_short_inventory_line_is_excluded_but_counted() {
    let m = model();
    let inventory = format!(
        "{}\n0002:SHORT:2/1:0.5:0.5:1962:2:1:90:88\n{}\n",
        line("0001", 0.5, 0.5),
        line("0003", 1.5, 1.5)
    );
    let mut bridges = parse_inventory(Cursor::new(inventory)).unwrap();
    let summary = m.evaluate(&mut bridges);

    assert_eq!(summary.input_bridges, 3);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.malformed, 1);
    assert_eq!(bridges[1], Bridge::placeholder(1));

    let text = m.report(&bridges).to_string();
    assert_eq!(text.lines().count(), 3);
    assert!(!text.contains("SHORT"));
}

#[test]
fn test_out_of_bounds_bridges_are_zeroed() {
    let m = model();
    let inventory = format!(
        "{}\n{}\n{}\n",
        line("0001", 0.01, 1.0),
        line("0002", 1.0, 2.5),
        line("0003", -4.0, -4.0)
    );
    let mut bridges = parse_inventory(Cursor::new(inventory)).unwrap();
    let summary = m.evaluate(&mut bridges);

    assert_eq!(summary.out_of_bounds, 3);
    for b in &bridges {
        assert_eq!(b.status, BridgeStatus::OutOfBounds);
        assert_eq!(b.uw_probability, 0.0);
        assert_eq!(b.hazus_probability, 0.0);
        assert_eq!(b.psa03, 0.0);
    }
    assert!(m.report(&bridges).is_empty());
}

#[test]
fn test_bridge_beyond_grid_rows_is_dropped() {
    // Header claims a wider map than the points cover
    let m = model_with(
        "x 6.5 1.0 1.0 JAN 1 2020 00:00:00 GMT 0.0 0.0 2.0 3.0",
        EvaluationOptions::default(),
    );
    let mut bridges = vec![parse_bridge_line(0, &line("0001", 2.5, 1.0))];
    let summary = m.evaluate(&mut bridges);
    assert_eq!(summary.dropped, 1);
    assert_eq!(bridges[0].status, BridgeStatus::Dropped);
    assert_eq!(bridges[0].latitude, 0.0);
}

#[test]
fn test_runs_are_identical() {
    let inventory: String = (0..20)
        .map(|k| {
            let lat = 0.05 + 0.09 * k as f64;
            let lon = 1.9 - 0.08 * k as f64;
            line(&format!("{k:04}"), lat, lon) + "\n"
        })
        .collect();

    let run = |options: EvaluationOptions| {
        let m = model_with(HEADER, options);
        let mut bridges = parse_inventory(Cursor::new(inventory.clone())).unwrap();
        m.evaluate(&mut bridges);
        m.report(&bridges).to_string()
    };

    let first = run(EvaluationOptions::default());
    let second = run(EvaluationOptions::default());
    assert_eq!(first, second);

    let parallel = run(EvaluationOptions::default().parallel());
    assert_eq!(first, parallel);

    let sorted = run(EvaluationOptions::default().with_report_order(ReportOrder::ByUwProbability));
    assert_eq!(sorted, run(EvaluationOptions::default().with_report_order(ReportOrder::ByUwProbability)));
    assert_eq!(sorted.lines().count(), first.lines().count());
}

#[test]
fn test_probabilities_match_models() {
    let m = model();
    let mut bridges = vec![parse_bridge_line(0, "0001:STEEL:1/1:1.0:1.0:1950:2:3:200:0:60")];
    m.evaluate(&mut bridges);
    let b = &bridges[0];

    assert_eq!(b.hazus_type, 12);
    assert_relative_eq!(
        b.uw_probability,
        uw_probability(1950, 2, psa03_at(1, 1)),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        b.hazus_probability,
        hazus_probability(HazusClass(12), psa03_at(1, 1), psa10_at(1, 1)),
        epsilon = 1e-12
    );
}

#[test]
fn test_too_few_points_is_fatal() {
    let text = format!(
        "{HEADER}\n0 0 0.1 1 5 10 5 1\n1 0 0.1 1 5 10 5 1\n0 1 0.1 1 5 10\n1 1 0.1 1 5 0 5 1\n"
    );
    let file = parse_grid(Cursor::new(text), 0.03).unwrap();
    let err = DamageModel::from_grid_file(file, EvaluationOptions::default()).unwrap_err();
    match err {
        FragilityError::InsufficientGrid { used, read } => {
            assert_eq!(used, 2);
            assert_eq!(read, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_from_files() {
    let mut grid = tempfile::NamedTempFile::new().unwrap();
    grid.write_all(grid_text(HEADER).as_bytes()).unwrap();
    let mut inventory = tempfile::NamedTempFile::new().unwrap();
    writeln!(inventory, "{}", line("0001", 0.5, 1.5)).unwrap();
    let mut options = tempfile::NamedTempFile::new().unwrap();
    write!(options, r#"{{ "report_order": "by_uw_probability", "parallel": true }}"#).unwrap();

    let options = EvaluationOptions::from_json_file(options.path()).unwrap();
    let m = DamageModel::load(grid.path(), options).unwrap();
    let mut bridges = read_inventory_file(inventory.path()).unwrap();
    let summary = m.evaluate(&mut bridges);

    assert_eq!(summary.grid_points_read, 9);
    assert_eq!(summary.grid_points_used, 9);
    assert_eq!(summary.processed, 1);
}

#[test]
fn test_missing_grid_file_is_io_error() {
    let err = DamageModel::load("/nonexistent/grid.xyz", EvaluationOptions::default()).unwrap_err();
    assert!(matches!(err, FragilityError::Io(_)));
}
