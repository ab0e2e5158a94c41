// File: crates/chart-core/tests/config.rs
// Purpose: Attribute parsing, defaults and fail-soft numeric handling.

use chart_core::config::{parse_series, split_list};
use chart_core::theme::DEFAULT_HUES;
use chart_core::{Attributes, BarConfig, Chart, ChartKind, ConfigError, Palette, PieConfig, RadarConfig};

#[test]
fn pie_defaults_match_reference_constants() {
    let cfg = PieConfig::from_attrs(&Attributes::new().with("data", "1;2")).expect("pie config");
    assert_eq!(cfg.data, vec![1.0, 2.0]);
    assert_eq!(cfg.donut, 0.005);
    assert_eq!(cfg.gap, 0.015);
    assert!(cfg.labels.is_empty());
    assert_eq!(cfg.palette.len(), 7);
    assert_eq!(cfg.palette.color_at(0), DEFAULT_HUES[0]);
}

#[test]
fn pie_reads_tuning_and_lists() {
    let attrs = Attributes::from_pairs([
        "data=40;60",
        "donut=0.2",
        "gap=0.06",
        "colors=#111;#222",
        "labels=Down - 40.00;Up - 60.00",
    ])
    .expect("pairs");
    let cfg = PieConfig::from_attrs(&attrs).expect("pie config");
    assert_eq!(cfg.donut, 0.2);
    assert_eq!(cfg.gap, 0.06);
    assert_eq!(cfg.palette.colors(), &["#111".to_string(), "#222".to_string()]);
    assert_eq!(cfg.labels, vec!["Down - 40.00", "Up - 60.00"]);
}

#[test]
fn missing_series_is_an_error() {
    assert_eq!(
        BarConfig::from_attrs(&Attributes::new()).unwrap_err(),
        ConfigError::MissingAttribute("data")
    );
    assert_eq!(
        RadarConfig::from_attrs(&Attributes::new().with("data", "1")).unwrap_err(),
        ConfigError::MissingAttribute("scores")
    );
    assert!(Chart::from_attrs(ChartKind::Pie, &Attributes::new()).is_err());
}

#[test]
fn non_numeric_tokens_read_as_zero() {
    assert_eq!(parse_series("1;x;2.5; 4 ;NaN"), vec![1.0, 0.0, 2.5, 4.0, 0.0]);
    assert!(parse_series("").is_empty());
}

#[test]
fn split_keeps_empty_tokens() {
    assert_eq!(split_list("a;;b"), vec!["a", "", "b"]);
    assert!(split_list("").is_empty());
}

#[test]
fn radar_optional_fields() {
    let cfg = RadarConfig::from_attrs(&Attributes::new().with("scores", "3;4")).expect("radar config");
    assert_eq!(cfg.max, 1.0);
    assert!(cfg.ids.is_none());
    assert_eq!((cfg.width, cfg.height), (200.0, 200.0));

    let cfg = RadarConfig::from_attrs(
        &Attributes::new().with("scores", "3;4").with("ids", "input_a;input_b").with("max", "5"),
    )
    .expect("radar config");
    assert_eq!(cfg.max, 5.0);
    assert_eq!(cfg.ids, Some(vec!["input_a".to_string(), "input_b".to_string()]));
}

#[test]
fn chart_kind_parses_tags() {
    assert_eq!("pie".parse::<ChartKind>(), Ok(ChartKind::Pie));
    assert_eq!("bar-chart".parse::<ChartKind>(), Ok(ChartKind::Bar));
    assert_eq!(" Radar ".parse::<ChartKind>(), Ok(ChartKind::Radar));
    assert!(matches!("line".parse::<ChartKind>(), Err(ConfigError::UnknownKind(_))));
}

#[test]
fn malformed_pair_is_rejected() {
    assert_eq!(
        Attributes::from_pairs(["data"]).unwrap_err(),
        ConfigError::MalformedPair("data".to_string())
    );
}

#[test]
fn palette_cycles_modulo_length() {
    let p = Palette::new(vec!["r".into(), "g".into(), "b".into()]);
    for i in 0..20 {
        assert_eq!(p.color_at(i), ["r", "g", "b"][i % 3]);
    }
    // An empty color list falls back to the default hues.
    assert_eq!(Palette::new(Vec::new()), Palette::default());
}

#[test]
fn random_palette_is_seeded() {
    let a = Palette::random(5, 42);
    let b = Palette::random(5, 42);
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
    for c in a.colors() {
        assert_eq!(c.len(), 7);
        assert!(c.starts_with('#'));
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
