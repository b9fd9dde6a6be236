//! Display helpers and Steam links

/// Minutes as hours with one decimal, e.g. `"1.5"`
pub fn format_hours(minutes: u64) -> String {
    format!("{:.1}", minutes as f64 / 60.0)
}

/// Format a last-played timestamp as `Mon D, YYYY`; `0` and absent are "Never"
pub fn format_last_played(ts: Option<u64>) -> String {
    match ts {
        Some(ts) if ts > 0 => chrono::DateTime::from_timestamp(ts as i64, 0)
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "Never".to_string()),
        _ => "Never".to_string(),
    }
}

/// Format a Unix timestamp as YYYY-MM-DD, or "Unknown" for 0
pub fn format_unlock_date(ts: u64) -> String {
    if ts == 0 {
        return "Unknown".to_string();
    }
    chrono::DateTime::from_timestamp(ts as i64, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn steamdb_url(appid: u64) -> String {
    format!("https://steamdb.info/app/{}/", appid)
}

pub fn store_url(appid: u64) -> String {
    format!("https://store.steampowered.com/app/{}/", appid)
}

/// Community icon URL; `None` unless the hash is a plain alphanumeric token
pub fn game_icon_url(appid: u64, icon_hash: &str) -> Option<String> {
    if icon_hash.is_empty() || !icon_hash.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(format!(
        "https://media.steampowered.com/steamcommunity/public/images/apps/{}/{}.jpg",
        appid, icon_hash
    ))
}

/// Library hero image; falls back to [`header_url`] when missing
pub fn banner_url(appid: u64) -> String {
    format!(
        "https://shared.akamai.steamstatic.com/store_item_assets/steam/apps/{}/library_hero.jpg",
        appid
    )
}

pub fn header_url(appid: u64) -> String {
    format!(
        "https://shared.akamai.steamstatic.com/store_item_assets/steam/apps/{}/header.jpg",
        appid
    )
}

/// Banner images to try in order: library hero, then store header
pub fn banner_candidates(appid: u64) -> [String; 2] {
    [banner_url(appid), header_url(appid)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0), "0.0");
        assert_eq!(format_hours(90), "1.5");
        assert_eq!(format_hours(85000), "1416.7");
    }

    #[test]
    fn test_last_played_never() {
        assert_eq!(format_last_played(None), "Never");
        assert_eq!(format_last_played(Some(0)), "Never");
        assert_eq!(format_last_played(Some(1_700_000_000)), "Nov 14, 2023");
    }

    #[test]
    fn test_unlock_date() {
        assert_eq!(format_unlock_date(0), "Unknown");
        assert_eq!(format_unlock_date(1_672_531_200), "2023-01-01");
    }

    #[test]
    fn test_links() {
        assert_eq!(steamdb_url(570), "https://steamdb.info/app/570/");
        assert_eq!(store_url(440), "https://store.steampowered.com/app/440/");
        assert!(game_icon_url(1, "").is_none());
        assert!(game_icon_url(570, "abc").unwrap().ends_with("/570/abc.jpg"));
        assert!(game_icon_url(570, "../../etc").is_none());
    }

    #[test]
    fn test_banner_candidates_hero_first() {
        let [hero, header] = banner_candidates(570);
        assert_eq!(hero, banner_url(570));
        assert!(hero.ends_with("/apps/570/library_hero.jpg"));
        assert_eq!(header, header_url(570));
        assert!(header.ends_with("/apps/570/header.jpg"));
    }
}
