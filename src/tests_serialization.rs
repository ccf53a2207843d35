#[cfg(test)]
mod tests {
    use crate::domain::fortune::tests::{date, single_entry_catalog};
    use crate::domain::fortune::{FortuneEngine, FortuneResult};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn fixed_result() -> FortuneResult {
        let engine = FortuneEngine::new(single_entry_catalog());
        let mut result = engine.generate("Kim", "1990-05-12", date(2025, 1, 1)).unwrap();
        result.generated_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        result
    }

    #[test]
    fn test_fortune_result_json_golden() {
        // The web front end reads these exact camelCase keys.
        let value = serde_json::to_value(fixed_result()).expect("Serialization failed");

        let expected = json!({
            "name": "Kim",
            "date": "2025년 1월 1일 수요일",
            "overall": {
                "score": 85,
                "emoji": "☀️",
                "title": "밝은 하루",
                "content": "좋은 일이 생겨요."
            },
            "money": {
                "emoji": "💰",
                "title": "재물운 상승",
                "content": "수입이 늘어요."
            },
            "love": {
                "emoji": "❤️",
                "title": "설레는 하루",
                "content": "연락해 보세요."
            },
            "luckyTime": {
                "start": "14:10",
                "end": "16:10",
                "display": "14:10 - 16:10"
            },
            "luckyColor": { "name": "로열 퍼플", "hex": "#7B2CBF" },
            "luckyNumbers": [4, 9, 30],
            "luckySnack": "붕어빵",
            "advice": "웃는 얼굴이 최고의 부적이에요.",
            "caution": "약속 시간을 꼭 확인하세요.",
            "seed": 195356009,
            "generatedAt": "2025-01-01T00:00:00Z"
        });

        assert_eq!(value, expected, "FortuneResult JSON shape changed");
    }

    #[test]
    fn test_fortune_result_json_reads_back() {
        let result = fixed_result();
        let json = serde_json::to_string(&result).expect("Serialization failed");
        let back: FortuneResult = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(back, result);
    }

    #[test]
    fn test_catalog_json_uses_authoring_keys() {
        let value = serde_json::to_value(single_entry_catalog()).expect("Serialization failed");
        let keys: Vec<&str> = value
            .as_object()
            .expect("catalog should be an object")
            .keys()
            .map(|k| k.as_str())
            .collect();

        let mut expected = vec!["advice", "caution", "colors", "love", "money", "overall", "snacks"];
        expected.sort_unstable();
        let mut keys = keys;
        keys.sort_unstable();
        assert_eq!(keys, expected);
        assert_eq!(value["snacks"], json!(["붕어빵"]));
    }
}
