#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::EffectEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{forward, wrap_angle, Color, PlayField, SimTime};

    const PI: f32 = std::f32::consts::PI;

    /// Verify wrap_angle lands in (-PI, PI].
    #[test]
    fn test_wrap_angle_range() {
        let samples = [
            -10.0, -PI - 0.1, -PI, -1.0, 0.0, 1.0, PI, PI + 0.1, 10.0, 100.0,
        ];
        for a in samples {
            let w = wrap_angle(a);
            assert!(
                w > -PI - 1e-6 && w <= PI + 1e-6,
                "wrap_angle({a}) = {w} out of range"
            );
        }
    }

    #[test]
    fn test_wrap_angle_identity_inside_range() {
        assert!((wrap_angle(1.0) - 1.0).abs() < 1e-6);
        assert!((wrap_angle(-1.0) + 1.0).abs() < 1e-6);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn test_wrap_angle_pi_maps_to_pi() {
        // PI itself stays PI (half-open interval), just past PI goes negative.
        assert!((wrap_angle(PI) - PI).abs() < 1e-6);
        assert!(wrap_angle(PI + 0.01) < 0.0);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_forward_vector() {
        assert!((forward(0.0) - Vec2::X).length() < 1e-6);
        assert!((forward(PI / 2.0) - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn test_play_field_contains() {
        let field = PlayField::default();
        assert!(field.contains(field.center()));
        assert!(field.contains(Vec2::ZERO));
        assert!(!field.contains(Vec2::new(-1.0, 0.0)));
        assert!(!field.contains(Vec2::new(0.0, field.height + 1.0)));
    }

    #[test]
    fn test_ammo_status_display() {
        assert_eq!(AmmoStatus::Reloading.to_string(), "Reloading");
        assert_eq!(AmmoStatus::Rounds(17).to_string(), "17");
    }

    #[test]
    fn test_ammo_status_serde() {
        for status in [AmmoStatus::Reloading, AmmoStatus::Rounds(5)] {
            let json = serde_json::to_string(&status).unwrap();
            let back: AmmoStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::SetMoveIntent { x: 1.0, y: -1.0 },
            PlayerCommand::SetAimPoint { x: 300.0, y: 200.0 },
            PlayerCommand::SetTrigger { held: true },
            PlayerCommand::Reload,
            PlayerCommand::ReturnToTitle,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify EffectEvent round-trips through serde.
    #[test]
    fn test_effect_event_serde() {
        let events = vec![
            EffectEvent::Hit {
                position: Vec2::new(10.0, 20.0),
                velocity: Vec2::new(0.0, -5000.0),
            },
            EffectEvent::Death {
                position: Vec2::new(960.0, 540.0),
                base_color: Color::RED,
                border_color: Color::WHITE,
                scale: 1.5,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: EffectEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..crate::constants::TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, u64::from(crate::constants::TICK_RATE));
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
