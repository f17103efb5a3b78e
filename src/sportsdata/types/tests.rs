//! Unit tests for SportsData types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn sample_player_json() -> Value {
        json!({
            "PlayerID": 19801,
            "Name": "Josh Allen",
            "Position": "QB",
            "Team": "BUF",
            "AverageDraftPosition": 21.4,
            "Number": 17,
            "PhotoUrl": "https://example.test/19801.png",
            "ByeWeek": 7
        })
    }

    #[test]
    fn test_player_deserialization_keeps_extra_columns() {
        let player: Player = serde_json::from_value(sample_player_json()).unwrap();

        assert_eq!(player.player_id, PlayerId::new(19801));
        assert_eq!(player.name, "Josh Allen");
        assert_eq!(player.position, "QB");
        assert_eq!(player.team.as_deref(), Some("BUF"));
        assert_eq!(player.average_draft_position, Some(21.4));
        assert_eq!(player.extra.get("Number"), Some(&json!(17)));
        assert_eq!(player.extra.get("ByeWeek"), Some(&json!(7)));
        assert!(!player.extra.contains_key("Name"));
    }

    #[test]
    fn test_player_null_columns() {
        let player: Player = serde_json::from_value(json!({
            "PlayerID": 1,
            "Name": null,
            "Position": null,
            "Team": null,
            "AverageDraftPosition": null
        }))
        .unwrap();

        assert_eq!(player.name, "");
        assert_eq!(player.position, "");
        assert!(player.team.is_none());
        assert!(player.average_draft_position.is_none());
    }

    #[test]
    fn test_player_serialization_round_trips_upstream_shape() {
        let original = sample_player_json();
        let player: Player = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&player).unwrap(), original);
    }

    #[test]
    fn test_player_attribute_lookup() {
        let player: Player = serde_json::from_value(sample_player_json()).unwrap();

        assert_eq!(player.attribute("Name"), Some(json!("Josh Allen")));
        assert_eq!(player.attribute("PlayerID"), Some(json!(19801)));
        assert_eq!(player.attribute("ByeWeek"), Some(json!(7)));
        assert_eq!(player.attribute("AverageDraftPosition"), Some(json!(21.4)));
        assert_eq!(player.attribute("DoesNotExist"), None);
    }

    #[test]
    fn test_stat_line_typed_and_opaque_fields() {
        let line: StatLine = serde_json::from_value(json!({
            "PlayerID": 19801,
            "Season": 2024,
            "FantasyPoints": 385.2,
            "FantasyPointsPPR": 385.2,
            "PassingYards": 3731,
            "RushingTouchdowns": 12
        }))
        .unwrap();

        assert_eq!(line.player_id, Some(PlayerId::new(19801)));
        assert_eq!(line.season, Some(2024));
        assert_eq!(line.fantasy_points, Some(385.2));
        assert_eq!(line.fantasy_points_ppr, Some(385.2));
        assert_eq!(line.extra.get("PassingYards"), Some(&json!(3731)));
        assert!(!line.is_empty());
    }

    #[test]
    fn test_stat_line_integer_points() {
        let line: StatLine = serde_json::from_value(json!({"FantasyPoints": 10})).unwrap();
        assert_eq!(line.fantasy_points, Some(10.0));
        assert!(line.fantasy_points_ppr.is_none());
    }

    #[test]
    fn test_empty_stat_line_serializes_as_empty_object() {
        let line = StatLine::default();
        assert!(line.is_empty());
        assert_eq!(serde_json::to_value(&line).unwrap(), json!({}));
    }

    #[test]
    fn test_merged_player_serializes_flat() {
        let player: Player = serde_json::from_value(sample_player_json()).unwrap();
        let merged = MergedPlayer {
            player,
            stats: StatLine {
                fantasy_points: Some(300.0),
                ..StatLine::default()
            },
            projections: StatLine::default(),
        };

        let value = serde_json::to_value(&merged).unwrap();
        assert_eq!(value["Name"], json!("Josh Allen"));
        assert_eq!(value["PhotoUrl"], json!("https://example.test/19801.png"));
        assert_eq!(value["Stats"], json!({"FantasyPoints": 300.0}));
        assert_eq!(value["Projections"], json!({}));
    }

    #[test]
    fn test_news_item_deserialization() {
        let item: NewsItem = serde_json::from_value(json!({
            "NewsID": 555,
            "PlayerID": 19801,
            "Title": "Allen limited in practice",
            "Updated": "2025-08-20T10:00:00",
            "Content": "Full story",
            "Source": "RotoBaller"
        }))
        .unwrap();

        assert_eq!(item.news_id, Some(555));
        assert_eq!(item.player_id, Some(PlayerId::new(19801)));
        assert_eq!(item.title.as_deref(), Some("Allen limited in practice"));
        assert_eq!(item.extra.get("Content"), Some(&json!("Full story")));
    }

    #[test]
    fn test_season_parsing_and_defaults() {
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert_eq!(" 2025 ".parse::<Season>().unwrap().as_u16(), 2025);
        assert!("2024REG".parse::<Season>().is_err());

        let seasons = Seasons::default();
        assert_eq!(seasons.stats.to_string(), "2024");
        assert_eq!(seasons.projections.to_string(), "2025");
    }
}
