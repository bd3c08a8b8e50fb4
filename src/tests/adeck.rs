//! A-deck (model forecast) parsing tests.
#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::parse_compact;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[derive(Default)]
    struct CountingSink {
        rejected: usize,
    }

    impl DiagnosticsSink for CountingSink {
        fn record_rejected(&mut self, _record: &str, _error: &ParsingError) {
            self.rejected += 1;
        }
    }

    // One storm, one initialization, two models. The OFCL analysis
    // hour is described by two lines (34 and 50 kt wind radii).
    const TWO_MODELS: &str = "\
AL, 09, 2022092806, 03, OFCL,   0, 267N,  825W, 100,  949, HU,  34, NEQ,  160,  140,  110,  150, 1008,  250,   15,
AL, 09, 2022092806, 03, OFCL,   0, 267N,  825W, 100,  949, HU,  50, NEQ,   80,   70,   50,   60, 1008,  250,   15,
AL, 09, 2022092806, 03, OFCL,  12, 281N,  827W,  90,  955, HU,  34, NEQ,  150,  130,  100,  140, 1009,  250,   20,
AL, 09, 2022092806, 03, OFCL,  24, 295N,  824W,  65, -999, HU,   0, NEQ,    0,    0,    0,    0,
AL, 09, 2022092806, 03, AVNO,   0, 267N,  825W,  95,  951, HU,  34, NEQ,  150,  130,  100,  140,
AL, 09, 2022092806, 03, AVNO,  12, 280N,  828W,  85,  958, HU,   0,
AL, 09, 2022092806, 03, AVNO,  24, 294N,  826W,  60,    0, HU,   0,
";

    #[test]
    fn parses_model_runs() {
        let deck = TWO_MODELS.parse::<ADeck>().unwrap();
        assert_eq!(deck.rejected, 0);
        assert_eq!(deck.runs.len(), 2, "one run per (storm, model, init)");
        assert_eq!(deck.nb_entries(), 6, "one entry per lead time");
        assert_eq!(deck.storms().count(), 1);
        assert_eq!(deck.models().count(), 2);

        let key = deck.runs.keys().next().unwrap();
        assert_eq!(key.storm_id.to_string(), "09L");
        assert_eq!(key.init, Epoch::from_gregorian_utc(2022, 9, 28, 6, 0, 0, 0));
    }

    #[test]
    fn model_filter_resolves_ambiguity() {
        let deck = TWO_MODELS.parse::<ADeck>().unwrap();

        // two models, no filter
        match deck.forecast(None, None, None) {
            Err(Error::AmbiguousModel(2)) => {},
            other => panic!(
                "expected an ambiguity error, got {:?}",
                other.map(|forecast| forecast.model)
            ),
        }

        let forecast = deck.forecast(None, Some("OFCL"), None).unwrap();
        assert_eq!(forecast.model, "OFCL");
        assert_eq!(forecast.storm_id.to_string(), "09L");
        assert_eq!(forecast.nb_samples(), 3);
        assert_eq!(forecast.fhour, vec![0, 12, 24]);
        assert_eq!(forecast.vmax, vec![100.0, 90.0, 65.0]);
        assert_eq!(forecast.lat, vec![26.7, 28.1, 29.5]);
        assert_eq!(forecast.lon, vec![-82.5, -82.7, -82.4]);

        // -999 pressure is missing, not a value
        assert_eq!(forecast.pmin[0], 949.0);
        assert!(forecast.pmin[2].is_nan());

        // valid times derive from init + lead
        let init = parse_compact("2022092806").unwrap();
        assert_eq!(forecast.init, init);
        assert_eq!(forecast.valid_time[0], init);
        assert_eq!(forecast.valid_time[1], init + 12 * Unit::Hour);
        assert_eq!(forecast.valid_time[2], init + 24 * Unit::Hour);
    }

    #[test]
    fn radii_arrays_follow_thresholds() {
        let deck = TWO_MODELS.parse::<ADeck>().unwrap();
        let forecast = deck.forecast(None, Some("OFCL"), None).unwrap();

        assert_eq!(forecast.r34.ne[0], 160.0);
        assert_eq!(forecast.r50.ne[0], 80.0);
        assert_eq!(forecast.r50.sw[0], 50.0);
        assert!(forecast.r64.ne[0].is_nan(), "64 kt never reported");

        assert_eq!(forecast.r34.ne[1], 150.0);
        assert!(forecast.r50.ne[1].is_nan());

        // zero threshold line reports no radii at all
        assert!(forecast.r34.ne[2].is_nan());
    }

    #[test]
    fn forecasts_builds_every_run() {
        let deck = TWO_MODELS.parse::<ADeck>().unwrap();
        let forecasts = deck.forecasts();
        assert_eq!(forecasts.len(), 2);
        for forecast in &forecasts {
            assert_eq!(forecast.nb_samples(), 3);
            assert_eq!(
                forecast.valid_time.len(),
                forecast.nb_samples(),
                "arrays must stay parallel"
            );
        }
    }

    #[test]
    fn entry_reproduces_its_record_key() {
        let deck = TWO_MODELS.parse::<ADeck>().unwrap();
        for (key, entries) in &deck.runs {
            for entry in entries {
                assert_eq!(entry.storm_id(), key.storm_id);
                assert_eq!(entry.model, key.model);
                assert_eq!(entry.init, key.init);
                assert_eq!(entry.valid_time, entry.init + entry.fhour as i64 * Unit::Hour);
            }
        }
    }

    #[test]
    fn ambiguous_storm_and_init() {
        let content = "\
AL, 09, 2022092806, 03, OFCL,   0, 267N,  825W, 100,  949, HU,   0,
AL, 09, 2022092812, 03, OFCL,   0, 272N,  826W,  95,  952, HU,   0,
EP, 12, 2022092806, 03, OFCL,   0, 151N, 1052W,  45,  997, TS,   0,
";
        let deck = content.parse::<ADeck>().unwrap();
        assert_eq!(deck.runs.len(), 3);

        assert!(matches!(
            deck.forecast(None, None, None),
            Err(Error::AmbiguousStorm(2))
        ));
        assert!(matches!(
            deck.forecast(Some("09L".parse().unwrap()), None, None),
            Err(Error::AmbiguousInit(2))
        ));

        let init = parse_compact("2022092812").unwrap();
        let forecast = deck
            .forecast(Some("09L".parse().unwrap()), None, Some(init))
            .unwrap();
        assert_eq!(forecast.init, init);
        assert_eq!(forecast.nb_samples(), 1);

        // filters matching nothing
        assert!(matches!(
            deck.forecast(Some("05C".parse().unwrap()), None, None),
            Err(Error::NoMatchingEntries)
        ));
    }

    #[test]
    fn malformed_record_is_skipped_not_fatal() {
        // AVNO +12 carries an unparseable longitude
        let content = "\
AL, 09, 2022092806, 03, AVNO,   0, 267N,  825W,  95,  951, HU,
AL, 09, 2022092806, 03, AVNO,  12, 280N,  8x8W,  85,  958, HU,
AL, 09, 2022092806, 03, AVNO,  24, 294N,  826W,  60,  964, HU,
";
        let mut sink = CountingSink::default();
        let deck = ADeck::from_content_with_sink(content, &mut sink);
        assert_eq!(deck.rejected, 1);
        assert_eq!(sink.rejected, 1);
        assert_eq!(deck.nb_entries(), 2);
        let forecast = deck.forecast(None, None, None).unwrap();
        assert_eq!(forecast.fhour, vec![0, 24]);
    }

    #[test]
    fn forecast_identity_ignores_arrays() {
        let deck = TWO_MODELS.parse::<ADeck>().unwrap();
        let full = deck.forecast(None, Some("OFCL"), None).unwrap();

        let analysis_only: String = TWO_MODELS
            .lines()
            .take(2)
            .collect::<Vec<_>>()
            .join("\n");
        let partial = analysis_only
            .parse::<ADeck>()
            .unwrap()
            .forecast(None, None, None)
            .unwrap();

        assert_eq!(full, partial, "equality is identity only");
        assert_ne!(full.nb_samples(), partial.nb_samples());

        let hash_of = |forecast: &ModelForecast| {
            let mut hasher = DefaultHasher::new();
            forecast.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash_of(&full), hash_of(&partial));
    }

    #[test]
    fn unordered_lead_times_sort_chronologically() {
        let content = "\
AL, 09, 2022092806, 03, OFCL,  24, 295N,  824W,  65,  961, HU,   0,
AL, 09, 2022092806, 03, OFCL,   0, 267N,  825W, 100,  949, HU,   0,
AL, 09, 2022092806, 03, OFCL,  12, 281N,  827W,  90,  955, HU,   0,
";
        let forecast = content
            .parse::<ADeck>()
            .unwrap()
            .forecast(None, None, None)
            .unwrap();
        assert_eq!(forecast.fhour, vec![0, 12, 24]);
        assert_eq!(forecast.vmax, vec![100.0, 90.0, 65.0]);
    }
}
