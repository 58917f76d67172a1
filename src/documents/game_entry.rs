use phf::phf_map;
use serde::Serialize;

pub const DEFAULT_USERNAME: &str = "Anonymous";
pub const DEFAULT_TIMESTAMP: &str = "Unknown Date";

/// A game suggestion extracted from one row of the CSV export.
///
/// Entries are only built by the loader and are read-only afterwards.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct GameEntry {
    name: String,
    url: String,
    username: String,
    timestamp: String,
}

impl GameEntry {
    /// Builds an entry, substituting defaults for blank username or
    /// timestamp. Returns `None` if name or url is blank.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        username: Option<&str>,
        timestamp: Option<&str>,
    ) -> Option<Self> {
        let name = name.into();
        let url = url.into();
        if name.trim().is_empty() || url.trim().is_empty() {
            return None;
        }

        Some(GameEntry {
            name,
            url,
            username: non_blank(username).unwrap_or(DEFAULT_USERNAME).to_owned(),
            timestamp: non_blank(timestamp).unwrap_or(DEFAULT_TIMESTAMP).to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Display label of the storefront hosting `url`, e.g. "Steam".
    pub fn storefront(&self) -> &'static str {
        let host = host(&self.url);
        STOREFRONTS
            .entries()
            .find(|(domain, _)| host == **domain || host.ends_with(&format!(".{domain}")))
            .map(|(_, label)| *label)
            .unwrap_or(UNKNOWN_STOREFRONT)
    }
}

impl std::fmt::Display for GameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.name, self.url)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Lowercase host part of `url`, without scheme, port or path.
fn host(url: &str) -> String {
    let rest = match url.find("://") {
        Some(pos) => &url[pos + 3..],
        None => url,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    host.split(':').next().unwrap_or_default().to_lowercase()
}

const UNKNOWN_STOREFRONT: &str = "Store";

static STOREFRONTS: phf::Map<&'static str, &'static str> = phf_map! {
    "steampowered.com" => "Steam",
    "steamcommunity.com" => "Steam",
    "gog.com" => "GOG",
    "epicgames.com" => "Epic Games",
    "itch.io" => "itch.io",
    "humblebundle.com" => "Humble",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str) -> GameEntry {
        GameEntry::new("Chess", url, None, None).unwrap()
    }

    #[test]
    fn blank_name_or_url_is_rejected() {
        assert_eq!(GameEntry::new("", "https://gog.com/game/x", None, None), None);
        assert_eq!(GameEntry::new("Chess", "  ", None, None), None);
    }

    #[test]
    fn defaults_for_blank_username_and_timestamp() {
        let entry = GameEntry::new("Chess", "https://gog.com/game/x", Some(" "), None).unwrap();
        assert_eq!(entry.username(), "Anonymous");
        assert_eq!(entry.timestamp(), "Unknown Date");
    }

    #[test]
    fn storefront_from_url_host() {
        assert_eq!(
            entry("https://store.steampowered.com/app/1").storefront(),
            "Steam"
        );
        assert_eq!(entry("https://www.gog.com/en/game/x").storefront(), "GOG");
        assert_eq!(
            entry("https://store.epicgames.com/p/x").storefront(),
            "Epic Games"
        );
        assert_eq!(entry("https://someone.itch.io/x").storefront(), "itch.io");
    }

    #[test]
    fn unknown_storefront() {
        assert_eq!(entry("https://example.com/x").storefront(), "Store");
        assert_eq!(entry("https://notgog.com/x").storefront(), "Store");
    }
}
