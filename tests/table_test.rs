use kart_results::*;

const TAB_TABLE: &str = "
#\tRacer\tBest Time\tBest Lap\tLaps\tAvg.\tGap\tK1RS
1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)
2\tLam Le\t28.857\t9\t12\t34.283\t0.013\t1584 (+40)
3\tIrl Strachan\t29.022\t5\t11\t39.160\t0.178\t1356 (+32)
";

#[test]
fn test_parse_tab_separated_row() {
    let row = parse_result_row("1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)").unwrap();

    assert_eq!(
        row,
        RaceResult {
            position: 1,
            racer: "Kevin Ruiz".into(),
            best_time: "28.844".into(),
            best_lap: Some(8),
            laps: Some(11),
            avg: "36.975".into(),
            gap: "0.000".into(),
            k1rs: "1244 (+44)".into(),
        }
    );
}

#[test]
fn test_parse_space_separated_row() {
    let row =
        parse_result_row("10   Giovanni Almanza   33.292  8  10  43.115  4.448  1204 (+4)").unwrap();

    assert_eq!(row.position, 10);
    assert_eq!(row.racer, "Giovanni Almanza");
    assert_eq!(row.gap, "4.448");
    assert_eq!(row.k1rs, "1204 (+4)");
}

#[test]
fn test_row_rejects_header_and_short_lines() {
    assert!(parse_result_row("#\tRacer\tBest Time\tBest Lap\tLaps\tAvg.\tGap\tK1RS").is_none());
    assert!(parse_result_row("1\tKevin Ruiz\t28.844").is_none());
    assert!(parse_result_row("").is_none());
    assert!(parse_result_row("Thanks for racing with us today!").is_none());
}

#[test]
fn test_row_keeps_non_numeric_laps_as_none() {
    let row = parse_result_row("12\tSlow Racer\t--\t--\t0\t--\t--\t1200 (+0)").unwrap();

    assert_eq!(row.position, 12);
    assert_eq!(row.racer, "Slow Racer");
    assert_eq!(row.best_time, "--");
    assert_eq!(row.best_lap, None);
    assert_eq!(row.laps, Some(0));
    assert!(row.best_time_seconds().is_none());

    let row = parse_result_row("1\tKevin Ruiz\t28.844\tn/a\tn/a\t36.975\t0.000\t1244 (+44)").unwrap();
    assert_eq!((row.best_lap, row.laps), (None, None));
}

#[test]
fn test_table_keeps_row_without_lap_counts() {
    let body = "1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)\n\
                12\tSlow Racer\t--\t--\t0\t--\t--\t1200 (+0)\n";
    let scan = scan_results_table(body);

    assert_eq!(scan.results.len(), 2);
    assert_eq!(scan.results[1].racer, "Slow Racer");
    assert!(scan.diagnostics.is_clean());
}

#[test]
fn test_row_does_not_cross_check_fields() {
    // best lap after the last lap is accepted as printed
    let row = parse_result_row("4\tSakal Strachan\t29.149\t15\t11\t37.985\t0.305\t1376 (+28)")
        .unwrap();
    assert_eq!(row.best_lap, Some(15));
    assert_eq!(row.laps, Some(11));
}

#[test]
fn test_parse_full_table_in_order() {
    let results = parse_results_table(TAB_TABLE);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].racer, "Kevin Ruiz");
    assert_eq!(results[1].racer, "Lam Le");
    assert_eq!(results[2].racer, "Irl Strachan");
    assert_eq!(
        results.iter().map(|r| r.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_empty_body() {
    assert!(parse_results_table("").is_empty());
}

#[test]
fn test_header_only_body() {
    let body = "\n\n#\tRacer\tBest Time\tBest Lap\tLaps\tAvg.\tGap\tK1RS\n\n   \n";
    assert!(parse_results_table(body).is_empty());
}

#[test]
fn test_space_delimited_header_never_emitted() {
    let body = "#   Racer   Best Time   Best Lap   Laps   Avg.   Gap   K1RS\n\
                1   Kevin Ruiz   28.844   8   11   36.975   0.000   1244 (+44)\n";
    let results = parse_results_table(body);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].racer, "Kevin Ruiz");
}

#[test]
fn test_skips_prose_and_footer() {
    let body = "
Some header text
More text here

#\tRacer\tBest Time\tBest Lap\tLaps\tAvg.\tGap\tK1RS
1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)

Footer text
Thanks for racing!
";
    let results = parse_results_table(body);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].racer, "Kevin Ruiz");
}

#[test]
fn test_crlf_lines() {
    let body = "1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)\r\n\
                2\tLam Le\t28.857\t9\t12\t34.283\t0.013\t1584 (+40)\r\n";
    let results = parse_results_table(body);

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].k1rs, "1584 (+40)");
}

#[test]
fn test_scan_reports_skipped_rows() {
    let body = "Race summary
#\tRacer\tBest Time\tBest Lap\tLaps\tAvg.\tGap\tK1RS
1\tKevin Ruiz\t28.844\t8\t11\t36.975\t0.000\t1244 (+44)
2\tLam Le\t28.857
3\tIrl Strachan\t29.022\t5\t11\t39.160\t0.178\t1356 (+32)
Thanks for racing!";
    let scan = scan_results_table(body);

    assert_eq!(scan.results.len(), 2);
    assert_eq!(scan.results[1].racer, "Irl Strachan");
    assert_eq!(
        scan.diagnostics.skipped,
        vec![SkippedRow {
            line_number: 4,
            line: "2\tLam Le\t28.857".into(),
        }]
    );
    assert_eq!(scan.diagnostics.ignored_lines, 2);
    assert!(!scan.diagnostics.is_clean());
}

#[test]
fn test_scan_clean_table() {
    let scan = scan_results_table(TAB_TABLE);

    assert_eq!(scan.results.len(), 3);
    assert!(scan.diagnostics.is_clean());
    assert_eq!(scan.diagnostics.ignored_lines, 0);
}
