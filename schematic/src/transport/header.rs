//! Header helpers shared by HTTP transports.

/// Header carrying the JSON argument of upload and download routes.
pub const API_ARG_HEADER: &str = "Dropbox-API-Arg";

/// Header carrying the JSON result of download routes.
pub const API_RESULT_HEADER: &str = "Dropbox-API-Result";

/// Makes serialized JSON safe to place in an HTTP header.
///
/// Every non-ASCII character, and DEL, is written as a `\uXXXX` escape.
/// Characters outside the Basic Multilingual Plane become a UTF-16
/// surrogate pair. The result is still valid JSON with the same meaning,
/// since such characters can only occur inside JSON strings.
///
/// ## Examples
///
/// ```
/// use schematic::transport::header_safe_json;
///
/// assert_eq!(header_safe_json(r#"{"path":"/café"}"#), r#"{"path":"/caf\u00e9"}"#);
/// ```
pub fn header_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];

    for c in json.chars() {
        if c.is_ascii() && c != '\u{7f}' {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{unit:04x}"));
        }
    }

    out
}

/// Merges client-level and route-level headers.
///
/// Route headers override client headers for matching keys (case-insensitive).
/// Returns a new Vec with the merged headers.
pub fn merge_headers(
    client_headers: &[(String, String)],
    route_headers: &[(&str, &str)],
) -> Vec<(String, String)> {
    let mut result: Vec<(String, String)> = Vec::new();

    // Add client headers that don't have route overrides
    for (client_key, client_value) in client_headers {
        let has_override = route_headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(client_key));
        if !has_override {
            result.push((client_key.clone(), client_value.clone()));
        }
    }

    for (key, value) in route_headers {
        result.push(((*key).to_string(), (*value).to_string()));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        let json = r#"{"path":"/docs/a b","n":1}"#;
        assert_eq!(header_safe_json(json), json);
    }

    #[test]
    fn bmp_characters_are_escaped() {
        assert_eq!(header_safe_json("\"ü\""), "\"\\u00fc\"");
        assert_eq!(header_safe_json("\"日本\""), "\"\\u65e5\\u672c\"");
    }

    #[test]
    fn astral_characters_become_surrogate_pairs() {
        assert_eq!(header_safe_json("\"😀\""), "\"\\ud83d\\ude00\"");
    }

    #[test]
    fn delete_is_escaped() {
        assert_eq!(header_safe_json("\"\u{7f}\""), "\"\\u007f\"");
    }

    #[test]
    fn escaped_json_decodes_to_same_value() {
        let original = serde_json::json!({"path": "/Ünïcödé/😀.paper"});
        let escaped = header_safe_json(&original.to_string());
        assert!(escaped.is_ascii());
        let decoded: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn merge_route_overrides_client_case_insensitively() {
        let client = vec![
            ("X-Custom".to_string(), "client".to_string()),
            ("User-Agent".to_string(), "schematic".to_string()),
        ];
        let route = [("x-custom", "route")];

        let merged = merge_headers(&client, &route);
        assert_eq!(
            merged,
            vec![
                ("User-Agent".to_string(), "schematic".to_string()),
                ("x-custom".to_string(), "route".to_string()),
            ]
        );
    }

    #[test]
    fn merge_without_route_headers_keeps_client_headers() {
        let client = vec![("X-Custom".to_string(), "client".to_string())];
        assert_eq!(merge_headers(&client, &[]), client);
    }
}
