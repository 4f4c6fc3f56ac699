use super::{Color, ColorGrid, ColorStats, GridError, GridPos, Region};

fn color(text: &str) -> Color {
    Color::parse(text).expect("color")
}

fn sample_grid() -> ColorGrid {
    let cells = vec![
        vec![color("#ff0000"), color("#00ff00")],
        vec![color("#0000ff"), color("#ffff00")],
    ];
    ColorGrid::new(2, 2, cells).expect("grid")
}

#[test]
fn color_parse_canonicalizes_case_and_prefix() {
    assert_eq!(color("#FF00aa"), color("ff00AA"));
    assert_eq!(color("#FF00aa").to_string(), "#ff00aa");
    assert_eq!(color("#abcdef").channels(), [0xab, 0xcd, 0xef]);
}

#[test]
fn color_parse_rejects_malformed_input() {
    assert!(Color::parse("#ff000").is_err());
    assert!(Color::parse("#ff00000").is_err());
    assert!(Color::parse("red").is_err());
    assert!(Color::parse("#ff00zz").is_err());
    assert!(Color::parse("").is_err());
}

#[test]
fn color_rgb_display_matches_wire_format() {
    assert_eq!(color("#ff6b35").rgb().to_string(), "RGB(255,107,53)");
    assert_eq!(color("#000000").rgb().to_string(), "RGB(0,0,0)");
}

#[test]
fn color_serde_roundtrip_is_lowercase_hex() {
    let serialized = serde_json::to_string(&color("#A1B2C3")).expect("serialize");
    assert_eq!(serialized, "\"#a1b2c3\"");
    let restored: Color = serde_json::from_str(&serialized).expect("deserialize");
    assert_eq!(restored, color("#a1b2c3"));
}

#[test]
fn grid_derives_stats_on_construction() {
    let grid = sample_grid();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.stats().distinct(), 4);
    assert_eq!(grid.color_at(GridPos::new(0, 1)), Some(color("#00ff00")));
    assert_eq!(grid.stats().count(color("#ff0000")), 1);
}

#[test]
fn grid_rejects_ragged_rows() {
    let cells = vec![
        vec![color("#ff0000"), color("#00ff00")],
        vec![color("#0000ff")],
    ];
    assert!(matches!(
        ColorGrid::new(2, 2, cells),
        Err(GridError::RowLengthMismatch { row: 1, .. })
    ));
}

#[test]
fn grid_rejects_degenerate_shapes() {
    assert!(ColorGrid::new(0, 3, Vec::new()).is_err());
    assert!(ColorGrid::new(2, 0, vec![Vec::new(), Vec::new()]).is_err());
    let empty = ColorGrid::new(0, 0, Vec::new()).expect("empty grid");
    assert!(empty.is_empty());
    assert_eq!(empty.stats().distinct(), 0);
}

#[test]
fn grid_rejects_row_count_mismatch() {
    let cells = vec![vec![color("#ff0000"), color("#00ff00")]];
    assert!(matches!(
        ColorGrid::new(2, 2, cells),
        Err(GridError::RowCountMismatch { .. })
    ));
}

#[test]
fn set_cell_updates_stats_incrementally() {
    let mut grid = sample_grid();
    let changed = grid
        .set_cell(GridPos::new(0, 0), color("#00ff00"))
        .expect("set cell");
    assert!(changed);
    assert_eq!(grid.stats().count(color("#ff0000")), 0);
    assert!(!grid.stats().contains(color("#ff0000")));
    assert_eq!(grid.stats().count(color("#00ff00")), 2);
    assert_eq!(grid.stats().distinct(), 3);
}

#[test]
fn set_cell_same_color_is_noop() {
    let mut grid = sample_grid();
    let before = grid.clone();
    let changed = grid
        .set_cell(GridPos::new(0, 0), color("#ff0000"))
        .expect("set cell");
    assert!(!changed);
    assert_eq!(grid, before);
}

#[test]
fn set_cell_rejects_out_of_bounds() {
    let mut grid = sample_grid();
    assert!(matches!(
        grid.set_cell(GridPos::new(2, 0), color("#ffffff")),
        Err(GridError::OutOfBounds { .. })
    ));
}

#[test]
fn crop_to_full_bounds_leaves_grid_unchanged() {
    let mut grid = sample_grid();
    let before = grid.clone();
    grid.crop(Region {
        min_row: 0,
        max_row: 1,
        min_col: 0,
        max_col: 1,
    })
    .expect("crop");
    assert_eq!(grid, before);
}

#[test]
fn crop_recomputes_stats_from_surviving_cells() {
    let mut grid = sample_grid();
    grid.crop(Region {
        min_row: 0,
        max_row: 0,
        min_col: 0,
        max_col: 1,
    })
    .expect("crop");
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.stats().distinct(), 2);
    assert!(!grid.stats().contains(color("#0000ff")));
    assert_eq!(grid.color_at(GridPos::new(0, 1)), Some(color("#00ff00")));
}

#[test]
fn crop_rejects_out_of_bounds_region() {
    let mut grid = sample_grid();
    assert!(matches!(
        grid.crop(Region {
            min_row: 0,
            max_row: 2,
            min_col: 0,
            max_col: 1,
        }),
        Err(GridError::OutOfBounds { .. })
    ));
}

#[test]
fn crop_rejects_inverted_region() {
    let mut grid = sample_grid();
    assert!(matches!(
        grid.crop(Region {
            min_row: 1,
            max_row: 0,
            min_col: 0,
            max_col: 1,
        }),
        Err(GridError::InvalidRegion { .. })
    ));
}

#[test]
fn region_from_corners_normalizes_order() {
    let region = Region::from_corners(GridPos::new(2, 3), GridPos::new(0, 1));
    assert_eq!(region.min_row, 0);
    assert_eq!(region.max_row, 2);
    assert_eq!(region.min_col, 1);
    assert_eq!(region.max_col, 3);
    assert_eq!(region.rows(), 3);
    assert_eq!(region.cols(), 3);
}

#[test]
fn with_stats_accepts_consistent_counts() {
    let cells = vec![
        vec![color("#ff0000"), color("#00ff00")],
        vec![color("#0000ff"), color("#ffff00")],
    ];
    let declared = ColorStats::from_counts([
        (color("#ff0000"), 1),
        (color("#00ff00"), 1),
        (color("#0000ff"), 1),
        (color("#ffff00"), 1),
    ]);
    assert!(ColorGrid::with_stats(2, 2, cells, declared).is_ok());
}

#[test]
fn with_stats_rejects_disagreeing_counts() {
    let cells = vec![
        vec![color("#ff0000"), color("#00ff00")],
        vec![color("#0000ff"), color("#ffff00")],
    ];
    let declared = ColorStats::from_counts([
        (color("#ff0000"), 2),
        (color("#00ff00"), 1),
        (color("#0000ff"), 1),
        (color("#ffff00"), 1),
    ]);
    assert!(matches!(
        ColorGrid::with_stats(2, 2, cells, declared),
        Err(GridError::StatsMismatch { .. })
    ));
}

#[test]
fn with_stats_rejects_phantom_colors() {
    let cells = vec![vec![color("#ff0000")]];
    let declared =
        ColorStats::from_counts([(color("#ff0000"), 1), (color("#123456"), 1)]);
    assert!(matches!(
        ColorGrid::with_stats(1, 1, cells, declared),
        Err(GridError::StatsMismatch { .. })
    ));
}

#[test]
fn sorted_usage_orders_by_count_then_hex() {
    let cells = vec![
        vec![color("#0000ff"), color("#0000ff"), color("#ff0000")],
        vec![color("#00ff00"), color("#ff0000"), color("#0000ff")],
    ];
    let grid = ColorGrid::new(2, 3, cells).expect("grid");
    let usage = grid.stats().sorted_usage();
    assert_eq!(usage[0], (color("#0000ff"), 3));
    assert_eq!(usage[1], (color("#ff0000"), 2));
    assert_eq!(usage[2], (color("#00ff00"), 1));
}

#[test]
fn sorted_usage_breaks_ties_in_ascending_hex_order() {
    let cells = vec![vec![color("#cc0000"), color("#aa0000"), color("#bb0000")]];
    let grid = ColorGrid::new(1, 3, cells).expect("grid");
    let usage = grid.stats().sorted_usage();
    assert_eq!(
        usage,
        vec![
            (color("#aa0000"), 1),
            (color("#bb0000"), 1),
            (color("#cc0000"), 1),
        ]
    );
}

#[test]
fn summary_reports_palette_with_rgb_strings() {
    let grid = sample_grid();
    let summary = grid.summary();
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.cols, 2);
    assert_eq!(summary.total_colors, 4);
    assert_eq!(summary.palette.len(), 4);
    let red = summary
        .palette
        .iter()
        .find(|entry| entry.color == color("#ff0000"))
        .expect("red entry");
    assert_eq!(red.rgb, "RGB(255,0,0)");
    assert_eq!(red.count, 1);
}
