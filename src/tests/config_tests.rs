//! Configuration tests

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.epoch(), 1609459200000);
        assert_eq!(config.worker_id_bits(), 5);
        assert_eq!(config.datacenter_id_bits(), 5);
        assert_eq!(config.sequence_bits(), 12);
        assert_eq!(config.timestamp_bits(), 42);
        assert_eq!(config.initial_sequence(), 0);
        assert_eq!(config.spin_yield_every(), 0);
        assert_eq!(config.max_worker_id(), 31);
        assert_eq!(config.max_datacenter_id(), 31);
        assert_eq!(config.max_sequence(), 0xFFF);
        assert_eq!(GeneratorConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_shifts() {
        let config = GeneratorConfig::default();
        assert_eq!(config.worker_id_shift(), 12);
        assert_eq!(config.datacenter_id_shift(), 17);
        assert_eq!(config.timestamp_shift(), 22);

        let config = GeneratorConfig::builder()
            .worker_id_bits(3)
            .datacenter_id_bits(4)
            .sequence_bits(6)
            .build()
            .unwrap();
        assert_eq!(config.worker_id_shift(), 6);
        assert_eq!(config.datacenter_id_shift(), 9);
        assert_eq!(config.timestamp_shift(), 13);
        assert_eq!(config.timestamp_bits(), 51);
    }

    #[test]
    fn test_custom_config() {
        let config = GeneratorConfig::builder()
            .epoch(1640995200000)
            .worker_id_bits(10)
            .datacenter_id_bits(0)
            .sequence_bits(12)
            .initial_sequence(100)
            .spin_yield_every(16)
            .build()
            .unwrap();

        assert_eq!(config.epoch(), 1640995200000);
        assert_eq!(config.max_worker_id(), 1023);
        assert_eq!(config.max_datacenter_id(), 0);
        assert_eq!(config.initial_sequence(), 100);
        assert_eq!(config.spin_yield_every(), 16);
    }

    #[test]
    fn test_invalid_bit_layout() {
        let err = GeneratorConfig::builder()
            .worker_id_bits(30)
            .datacenter_id_bits(30)
            .sequence_bits(4)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SnowflakeError::InvalidBitLayout {
                worker_id_bits: 30,
                datacenter_id_bits: 30,
                sequence_bits: 4,
            }
        );
        assert!(err.is_configuration());

        let err = GeneratorConfig::builder().sequence_bits(255).build().unwrap_err();
        assert!(matches!(err, SnowflakeError::InvalidBitLayout { .. }));

        // exactly 63 layout bits is the widest allowed
        let config = GeneratorConfig::builder()
            .worker_id_bits(21)
            .datacenter_id_bits(21)
            .sequence_bits(21)
            .build()
            .unwrap();
        assert_eq!(config.timestamp_bits(), 1);
    }

    #[test]
    fn test_invalid_initial_sequence() {
        let err = GeneratorConfig::builder()
            .sequence_bits(4)
            .initial_sequence(16)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SnowflakeError::InvalidInitialSequence { sequence: 16, max: 15 }
        );
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_EPOCH, "1577836800000"),
            (ENV_WORKER_ID_BITS, "8"),
            (ENV_SEQUENCE_BITS, " 10 "),
        ]);
        let config =
            GeneratorConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.epoch(), 1577836800000);
        assert_eq!(config.worker_id_bits(), 8);
        assert_eq!(config.datacenter_id_bits(), 5);
        assert_eq!(config.sequence_bits(), 10);
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = GeneratorConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_lookup_invalid_value() {
        let err = GeneratorConfig::from_lookup(|key| {
            (key == ENV_DATACENTER_ID_BITS).then(|| "five".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            SnowflakeError::InvalidEnvValue {
                key: ENV_DATACENTER_ID_BITS.to_string(),
                value: "five".to_string(),
            }
        );

        // parsed but not a valid layout
        let err = GeneratorConfig::from_lookup(|key| {
            (key == ENV_SEQUENCE_BITS).then(|| "60".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, SnowflakeError::InvalidBitLayout { .. }));
    }

    #[test]
    fn test_builder_round_trip() {
        let config = GeneratorConfig::builder()
            .epoch(1)
            .worker_id_bits(7)
            .build()
            .unwrap();
        let builder = GeneratorConfigBuilder::from(config);
        assert_eq!(GeneratorConfig::try_from(builder).unwrap(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_config() {
        let config = GeneratorConfig::builder().worker_id_bits(6).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"worker_id_bits\":6"));
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let partial: GeneratorConfig = serde_json::from_str(r#"{"sequence_bits":10}"#).unwrap();
        assert_eq!(partial.sequence_bits(), 10);
        assert_eq!(partial.worker_id_bits(), 5);

        let invalid = serde_json::from_str::<GeneratorConfig>(r#"{"sequence_bits":60}"#);
        assert!(invalid.is_err());
    }
}
