#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{HashMap, HashSet};
    use std::hash::{Hash, Hasher};
    use std::thread;
    use tracing::debug;
    use common::config::load_style::Format;
    use common::log::tracing_factory::TracingFactory;
    use common::pretty_util::to_string_pretty;
    use connector::MySQLOffsetOptions;

    fn hash_of(offset: &MySQLOffsetOptions) -> u64 {
        let mut hasher = DefaultHasher::new();
        offset.hash(&mut hasher);
        hasher.finish()
    }

    fn build(file: Option<&str>, position: Option<i32>) -> MySQLOffsetOptions {
        let mut builder = MySQLOffsetOptions::new_builder();
        if let Some(f) = file {
            builder = builder.source_offset_file(f);
        }
        if let Some(p) = position {
            builder = builder.source_offset_position(p);
        }
        builder.build()
    }

    #[test]
    fn test_direct_eq_builder() {
        TracingFactory::init_log(true);

        let cases = [
            (None, None),
            (Some("mysql-bin.000003"), None),
            (None, Some(154)),
            (Some("mysql-bin.000003"), Some(154)),
            (Some(""), Some(-1)),
        ];

        for (file, position) in cases {
            let direct = MySQLOffsetOptions::new(file.map(str::to_string), position);
            let built = build(file, position);
            debug!("direct: {}, built: {}", direct, built);

            assert_eq!(direct, built);
            assert_eq!(hash_of(&direct), hash_of(&built));
        }
    }

    #[test]
    fn test_eq_hash() {
        let a = MySQLOffsetOptions::new(Some("a".to_string()), Some(1));
        let b = build(Some("a"), Some(1));
        let c = a.clone();

        // reflexive, symmetric, transitive
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_ne!(a, build(Some("a"), Some(2)));
        assert_ne!(a, build(Some("a"), None));
        assert_ne!(a, build(None, Some(1)));
        assert_ne!(build(Some(""), None), build(None, None));
    }

    #[test]
    fn test_hash_key() {
        let mut set = HashSet::new();
        set.insert(build(Some("mysql-bin.000001"), Some(4)));
        set.insert(MySQLOffsetOptions::new(Some("mysql-bin.000001".to_string()), Some(4)));
        set.insert(build(Some("mysql-bin.000001"), Some(120)));
        set.insert(MySQLOffsetOptions::default());
        set.insert(MySQLOffsetOptions::new_builder().build());
        assert_eq!(set.len(), 3);

        let mut map = HashMap::new();
        map.insert(build(Some("mysql-bin.000002"), None), "connector-a");
        assert_eq!(map.get(&MySQLOffsetOptions::new(Some("mysql-bin.000002".to_string()), None)), Some(&"connector-a"));
    }

    #[test]
    fn test_builder_isolation() {
        let builder = MySQLOffsetOptions::new_builder()
            .source_offset_file("mysql-bin.000003")
            .source_offset_position(154);
        let before = builder.build();

        let builder = builder.source_offset_position(4);
        let after = builder.build();

        assert_eq!(before, build(Some("mysql-bin.000003"), Some(154)));
        assert_eq!(after, build(Some("mysql-bin.000003"), Some(4)));
        assert_ne!(before, after);
    }

    #[test]
    fn test_share_across_threads() {
        let offset = build(Some("mysql-bin.000007"), Some(1024));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let offset = offset.clone();
                thread::spawn(move || offset.to_string())
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), offset.to_string());
        }
    }

    #[test]
    fn test_pretty() {
        let offset = build(Some("mysql-bin.000003"), Some(154));

        let json = to_string_pretty(&Format::Json, &offset);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source_offset_file"], "mysql-bin.000003");
        assert_eq!(value["source_offset_position"], 154);

        let yaml = to_string_pretty(&Format::Yaml, &MySQLOffsetOptions::default());
        assert!(yaml.contains("source_offset_file: null"));
        assert!(yaml.contains("source_offset_position: null"));
    }
}
