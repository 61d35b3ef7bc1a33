//! End-to-end encoding through `HeatEncoder` and `EncodingConfig`
use approx::assert_relative_eq;
use heat_encoding_core::{
    ColorBand, ColorRamp, Domain, EncodingConfig, EncodingError, FixtureGenerator, HeatEncoder,
    HeatSample, Rgb,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_hot_district_lands_in_yellow_red_band() {
    let encoder = HeatEncoder::default();
    let encoding = encoder
        .encode(&HeatSample::new(35.0).with_secondary(3.0))
        .unwrap();

    assert_relative_eq!(*encoding.intensity, 0.62, epsilon = 1e-12);

    // 0.62 is a tenth of the way from yellow to red: green channel ≈ 229.5
    assert_eq!(encoding.fill.r, 255);
    assert!((229..=230).contains(&encoding.fill.g), "g = {}", encoding.fill.g);
    assert_eq!(encoding.fill.b, 0);
}

#[test]
fn test_batch_preserves_order_and_matches_single_encoding() {
    let encoder = HeatEncoder::default();
    let mut generator = FixtureGenerator::new(2024);
    let mut samples = generator.sample_pairs(500, &Domain::TEMPERATURE, &Domain::SUHII);
    samples[17] = HeatSample::new(f64::NAN);

    let batch = encoder.encode_batch(&samples);
    assert_eq!(batch.len(), samples.len());
    for (sample, result) in samples.iter().zip(&batch) {
        match result {
            Ok(encoding) => assert_eq!(*encoding, encoder.encode(sample).unwrap()),
            Err(err) => assert!(matches!(err, EncodingError::NonFiniteInput { .. })),
        }
    }
    assert!(batch[17].is_err());
    assert_eq!(batch.iter().filter(|r| r.is_err()).count(), 1);
}

#[test]
fn test_custom_config_from_json() {
    let json = r##"{
        "ramp": [
            { "lower": 0.0, "upper": 0.5, "start": "#ffffcc", "end": "#fd8d3c" },
            { "lower": 0.5, "upper": 1.0, "start": "#fd8d3c", "end": "#800026" }
        ],
        "primary_domain": { "min": 20.0, "max": 40.0 },
        "blend_weights": { "primary": 1.0, "secondary": 0.0 },
        "elevation": { "height_per_degree": 10.0, "suhii_gain": 0.0 },
        "alpha": 255
    }"##;
    let encoder = HeatEncoder::new(EncodingConfig::from_json(json).unwrap()).unwrap();

    let hot = encoder
        .encode(&HeatSample::new(40.0).with_secondary(0.0).with_class("Water"))
        .unwrap();
    assert_eq!(hot.fill.rgb(), Rgb::from_hex("#800026").unwrap());
    assert_eq!(hot.fill.a, 255);
    assert_eq!(hot.elevation, 400.0);
    assert_eq!(hot.class_color, Some(Rgb::from_hex("#4169e1").unwrap()));

    let mid = encoder.encode(&HeatSample::new(30.0)).unwrap();
    assert_eq!(mid.fill.rgb(), Rgb::from_hex("#fd8d3c").unwrap());
}

#[test]
fn test_config_file_round_trip() {
    let config = EncodingConfig {
        ramp: ColorRamp::new(vec![
            ColorBand::flat(0.0, 0.5, Rgb::BLACK),
            ColorBand::flat(0.5, 1.0, Rgb::WHITE),
        ])
        .unwrap(),
        alpha: 90,
        ..EncodingConfig::default()
    };
    let path = std::env::temp_dir().join(format!(
        "heat-encoding-config-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, config.to_json_pretty().unwrap()).unwrap();
    let loaded = EncodingConfig::from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.unwrap(), config);
}

#[test]
fn test_monthly_series_time_step() {
    let mut generator = FixtureGenerator::new(11);
    let series = generator.district_temperatures("Central Industrial Park");
    let encoder = HeatEncoder::default();

    let encodings: Vec<_> = (0..series.len())
        .map(|step| {
            let sample = HeatSample::from_series(&series, step, Some(2.0)).unwrap();
            encoder.encode(&sample).unwrap()
        })
        .collect();
    // Mid-year is the hottest part of the season, so it extrudes higher than January
    assert!(encodings[5].elevation > encodings[0].elevation);

    assert_eq!(
        HeatSample::from_series(&series, 12, None),
        Err(EncodingError::TimeStepOutOfRange { step: 12, len: 12 })
    );
}
