#[cfg(test)]
mod tests {
    use crate::commands::GameCommand;
    use crate::config::SpawnerConfig;
    use crate::enums::SpawnerPhase;
    use crate::error::ConfigError;
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{horizontal_distance, SimTime, Vec3};

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = GameCommand::SetPlayerPosition {
            position: Vec3::new(1.0, 2.0, 3.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"SetPlayerPosition""#), "{json}");

        let back: GameCommand =
            serde_json::from_str(r#"{"type":"DespawnEnemy","id":7}"#).unwrap();
        assert_eq!(back, GameCommand::DespawnEnemy { id: 7 });

        let start: GameCommand = serde_json::from_str(r#"{"type":"StartSpawning"}"#).unwrap();
        assert_eq!(start, GameCommand::StartSpawning);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_string(&SimEvent::WaveSpawned { wave: 2, count: 35 }).unwrap();
        assert_eq!(json, r#"{"type":"WaveSpawned","wave":2,"count":35}"#);
    }

    #[test]
    fn test_default_config_matches_tuning() {
        let config = SpawnerConfig::default();
        assert_eq!(config.spawn_count, 30);
        assert_eq!(config.difficulty_bonus, 5);
        assert_eq!(config.spawn_interval_secs, 3.0);
        assert_eq!(config.spawn_radius, 30.0);
        assert_eq!(config.min_speed, 4.0);
        assert_eq!(config.max_speed, 12.0);
        assert_eq!(config.ground_clearance, 0.5);
        assert!(config.spawn_initial_wave);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SpawnerConfig::from_json_str(r#"{"spawn_count": 10, "max_speed": 20.0}"#)
            .expect("valid partial config");
        assert_eq!(config.spawn_count, 10);
        assert_eq!(config.max_speed, 20.0);
        assert_eq!(config.min_speed, 4.0);
        assert_eq!(config.spawn_radius, 30.0);
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let err = SpawnerConfig::from_json_str(r#"{"min_speed": 9.0, "max_speed": 3.0}"#)
            .unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "min_speed"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_radius_and_interval_rejected() {
        let config = SpawnerConfig {
            spawn_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "spawn_radius", .. })
        ));

        let config = SpawnerConfig {
            spawn_interval_secs: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "spawn_interval_secs", .. })
        ));
    }

    #[test]
    fn test_equal_speed_bounds_allowed() {
        let config = SpawnerConfig {
            min_speed: 6.0,
            max_speed: 6.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SpawnerConfig::from_json_str("{ spawn_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 100.0, 4.0);
        assert!((horizontal_distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_snapshot() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.spawner_phase, SpawnerPhase::Idle);
        assert!(!snap.game_over);
        assert!(snap.enemies.is_empty());
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, snap.time);
    }
}
