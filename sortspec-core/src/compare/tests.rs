//! Tests for the multi-key comparator

#[cfg(test)]
mod tests {
    use crate::compare::{
        DeclarativeRule, FieldPath, FieldValue, OrderingSpec, SortRecord,
        ValueKind, compile_comparator, sort_by_keys, sorted_by_keys,
    };
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::{Value, json};
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Track {
        title: String,
        plays: u32,
        favourite: bool,
        released: Option<DateTime<Utc>>,
    }

    impl SortRecord for Track {
        fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>> {
            match path.as_str() {
                "title" => Some(self.title.as_str().into()),
                "plays" => Some(self.plays.into()),
                "favourite" => Some(self.favourite.into()),
                "released" => self.released.map(FieldValue::from),
                _ => None,
            }
        }
    }

    fn create_test_track(
        title: &str,
        plays: u32,
        favourite: bool,
        year: Option<i32>,
    ) -> Track {
        Track {
            title: title.to_string(),
            plays,
            favourite,
            released: year
                .map(|y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    fn titles(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.title.as_str()).collect()
    }

    fn names(records: &[Value]) -> Vec<&str> {
        records.iter().map(|r| r["name"].as_str().unwrap_or("-")).collect()
    }

    #[test]
    fn test_second_key_breaks_tie() {
        let spec = OrderingSpec::from_declarations([
            ("a", "+number"),
            ("b", "+string"),
        ])
        .unwrap();
        let comparator = compile_comparator(&spec);

        let x = json!({"a": 1, "b": "x"});
        let y = json!({"a": 1, "b": "y"});
        assert_eq!(comparator.compare(&x, &y), Ordering::Less);
        assert_eq!(comparator.compare(&y, &x), Ordering::Greater);
        assert_eq!(comparator.compare(&x, &x), Ordering::Equal);
    }

    #[test]
    fn test_primary_key_wins() {
        let spec = OrderingSpec::from_declarations([
            ("a", "+number"),
            ("b", "+string"),
        ])
        .unwrap();
        let comparator = compile_comparator(&spec);

        let low = json!({"a": 1, "b": "z"});
        let high = json!({"a": 2, "b": "a"});
        assert_eq!(comparator.compare(&low, &high), Ordering::Less);
    }

    #[test]
    fn test_descending_reverses() {
        let spec = OrderingSpec::new()
            .by("a", DeclarativeRule::desc(ValueKind::Number));
        let comparator = compile_comparator(&spec);

        assert_eq!(
            comparator.compare(&json!({"a": 1}), &json!({"a": 2})),
            Ordering::Greater
        );
    }

    #[test]
    fn test_custom_rule_short_circuits() {
        // the custom rule says "equal"; the later key would have said otherwise
        let spec = OrderingSpec::<Value>::new()
            .custom("anything", |_, _| Ordering::Equal)
            .declare("b", "+string")
            .unwrap();
        let comparator = compile_comparator(&spec);

        let x = json!({"b": "x"});
        let y = json!({"b": "y"});
        assert_eq!(comparator.compare(&x, &y), Ordering::Equal);
    }

    #[test]
    fn test_custom_rule_after_tied_key() {
        let spec = OrderingSpec::<Value>::new()
            .declare("group", "+string")
            .unwrap()
            .custom("name_len", |a, b| {
                let len = |v: &Value| v["name"].as_str().map_or(0, str::len);
                len(a).cmp(&len(b))
            });

        let mut records = vec![
            json!({"group": "b", "name": "x"}),
            json!({"group": "a", "name": "longer"}),
            json!({"group": "a", "name": "mid"}),
        ];
        sort_by_keys(&mut records, &spec);
        assert_eq!(names(&records), vec!["mid", "longer", "x"]);
    }

    #[test]
    fn test_null_records_tie() {
        let spec = OrderingSpec::from_declarations([("a", "+number")]).unwrap();
        let comparator = compile_comparator(&spec);

        assert_eq!(
            comparator.compare(&json!(null), &json!({"a": 1})),
            Ordering::Equal
        );
        assert_eq!(
            comparator.compare(&json!({"a": 1}), &json!(null)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_missing_value_falls_through_to_next_key() {
        let spec = OrderingSpec::from_declarations([
            ("rank", "+number"),
            ("name", "+string"),
        ])
        .unwrap();
        let comparator = compile_comparator(&spec);

        let ranked = json!({"rank": 1, "name": "zed"});
        let unranked = json!({"name": "amy"});
        assert_eq!(comparator.compare(&ranked, &unranked), Ordering::Greater);
    }

    #[test]
    fn test_kind_mismatch_ties() {
        let spec = OrderingSpec::from_declarations([
            ("a", "+number"),
            ("b", "+string"),
        ])
        .unwrap();
        let comparator = compile_comparator(&spec);

        let number = json!({"a": 5, "b": "b"});
        let text = json!({"a": "4", "b": "a"});
        assert_eq!(comparator.compare(&number, &text), Ordering::Greater);
    }

    #[test]
    fn test_nested_paths() {
        let spec = OrderingSpec::from_declarations([
            ("address.city", "+string"),
            ("scores[0]", "-number"),
        ])
        .unwrap();

        let records = vec![
            json!({"name": "c", "address": {"city": "Oslo"}, "scores": [3]}),
            json!({"name": "a", "address": {"city": "Bergen"}, "scores": [1]}),
            json!({"name": "b", "address": {"city": "Oslo"}, "scores": [9]}),
        ];
        let sorted = sorted_by_keys(records, &spec);
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_struct_records_multi_key() {
        let mut tracks = vec![
            create_test_track("Delta", 10, false, Some(2001)),
            create_test_track("Alpha", 25, true, Some(1999)),
            create_test_track("Charlie", 10, true, None),
            create_test_track("Bravo", 25, false, Some(2010)),
        ];

        let spec = OrderingSpec::from_declarations([
            ("plays", "-number"),
            ("favourite", "-boolean"),
            ("title", "+string"),
        ])
        .unwrap();
        sort_by_keys(&mut tracks, &spec);

        assert_eq!(titles(&tracks), vec!["Alpha", "Bravo", "Charlie", "Delta"]);
    }

    #[test]
    fn test_date_keys() {
        let mut tracks = vec![
            create_test_track("Late", 0, false, Some(2020)),
            create_test_track("Early", 0, false, Some(1990)),
            create_test_track("Middle", 0, false, Some(2005)),
        ];

        let spec = OrderingSpec::from_declarations([
            ("released", "-date"),
        ])
        .unwrap();
        sort_by_keys(&mut tracks, &spec);
        assert_eq!(titles(&tracks), vec!["Late", "Middle", "Early"]);
    }

    #[test]
    fn test_json_date_strings() {
        let spec = OrderingSpec::from_declarations([("at", "+date")]).unwrap();
        let sorted = sorted_by_keys(
            vec![
                json!({"name": "b", "at": "2024-05-01T10:00:00+02:00"}),
                json!({"name": "a", "at": "2024-05-01"}),
                json!({"name": "c", "at": 1_800_000_000_000_i64}),
            ],
            &spec,
        );
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let spec = OrderingSpec::from_declarations([
            ("a", "+number"),
            ("b", "-string"),
        ])
        .unwrap();
        let once = sorted_by_keys(
            vec![
                json!({"name": "1", "a": 2, "b": "p"}),
                json!({"name": "2", "a": 1, "b": "q"}),
                json!({"name": "3", "a": 2, "b": "r"}),
                json!({"name": "4", "a": 1, "b": "q"}),
            ],
            &spec,
        );
        let twice = sorted_by_keys(once.clone(), &spec);
        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["2", "4", "3", "1"]);
    }

    #[test]
    fn test_option_records() {
        let spec = OrderingSpec::<Option<Value>>::from_declarations([(
            "a", "+number",
        )])
        .unwrap();
        let comparator = compile_comparator(&spec);

        assert_eq!(
            comparator.compare(&None, &Some(json!({"a": 1}))),
            Ordering::Equal
        );
        assert_eq!(
            comparator.compare(&Some(json!({"a": 2})), &Some(json!({"a": 1}))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_empty_spec_is_equal() {
        let spec = OrderingSpec::<Value>::new();
        let comparator = compile_comparator(&spec);
        assert_eq!(
            comparator.compare(&json!({"a": 1}), &json!({"a": 2})),
            Ordering::Equal
        );
    }

    #[test]
    fn test_into_fn() {
        let spec = OrderingSpec::from_declarations([("n", "-number")]).unwrap();
        let compare = compile_comparator(&spec).into_fn();

        let mut values =
            vec![json!({"n": 1}), json!({"n": 3}), json!({"n": 2})];
        values.sort_by(&compare);
        let ns: Vec<_> =
            values.iter().map(|v| v["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![3, 2, 1]);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        id: usize,
        value: Option<f64>,
    }

    impl SortRecord for Reading {
        fn field(&self, path: &FieldPath) -> Option<FieldValue<'_>> {
            match path.as_str() {
                "value" => self.value.map(FieldValue::from),
                "id" => Some((self.id as u64).into()),
                _ => None,
            }
        }
    }

    // small deterministic generator so failures reproduce
    fn next_seed(seed: &mut u64) -> u64 {
        *seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        *seed >> 33
    }

    fn mixed_records(len: usize, seed: &mut u64) -> Vec<Value> {
        (0..len)
            .map(|i| match next_seed(seed) % 4 {
                0 => json!({"id": i}),
                1 => json!(null),
                2 => json!({"id": i, "a": "not a number"}),
                _ => json!({"id": i, "a": next_seed(seed) % 50}),
            })
            .collect()
    }

    fn ids(records: &[Value]) -> Vec<i64> {
        let mut ids: Vec<i64> = records
            .iter()
            .map(|r| r["id"].as_i64().unwrap_or(-1))
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_sort_with_missing_values_does_not_panic() {
        let spec = OrderingSpec::from_declarations([("a", "+number")]).unwrap();
        let mut seed = 7;

        for len in [21, 52, 97, 160, 221] {
            let records = mixed_records(len, &mut seed);
            let expected = ids(&records);

            let sorted = sorted_by_keys(records.clone(), &spec);
            assert_eq!(sorted.len(), len);
            assert_eq!(ids(&sorted), expected);
            assert_eq!(sorted, sorted_by_keys(records, &spec));
        }
    }

    #[test]
    fn test_sort_with_nan_values_does_not_panic() {
        let spec = OrderingSpec::from_declarations([
            ("value", "-number"),
            ("id", "+number"),
        ])
        .unwrap();
        let mut seed = 42;
        let mut readings: Vec<Reading> = (0..120)
            .map(|id| {
                let value = match next_seed(&mut seed) % 3 {
                    0 => None,
                    1 => Some(f64::NAN),
                    _ => Some((next_seed(&mut seed) % 10) as f64),
                };
                Reading { id, value }
            })
            .collect();

        sort_by_keys(&mut readings, &spec);

        let mut seen: Vec<usize> = readings.iter().map(|r| r.id).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..120).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_fully_populated_key_is_ordered() {
        let spec = OrderingSpec::from_declarations([("a", "+number")]).unwrap();
        let mut seed = 3;
        let records: Vec<Value> = (0..64)
            .map(|i| json!({"id": i, "a": next_seed(&mut seed) % 10}))
            .collect();

        let sorted = sorted_by_keys(records, &spec);
        let values: Vec<u64> =
            sorted.iter().filter_map(|r| r["a"].as_u64()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));

        // equal keys keep input order
        for pair in sorted.windows(2) {
            if pair[0]["a"] == pair[1]["a"] {
                assert!(pair[0]["id"].as_i64() < pair[1]["id"].as_i64());
            }
        }
    }
}
