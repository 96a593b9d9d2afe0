use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Trend::Up),
            "down" => Ok(Trend::Down),
            "same" => Ok(Trend::Same),
            other => Err(format!("unknown trend {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPlayer {
    pub id: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub avatar_url: Option<String>,
    pub trend: Trend,
    pub matches_played: i32,
    pub matches_won: i32,
    pub total_points: i32,
    pub ranking_position: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_players: u64,
    pub has_more: bool,
    pub limit: u32,
}

impl Pagination {
    /// `current_page` is 1-based. A zero limit yields no pages.
    pub fn new(current_page: u32, limit: u32, total_players: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(total_players.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };
        Self {
            current_page,
            total_pages,
            total_players,
            has_more: current_page < total_pages,
            limit,
        }
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingsResponse {
    pub players: Vec<RankingPlayer>,
    pub pagination: Pagination,
}

impl RankingsResponse {
    pub fn new(mut players: Vec<RankingPlayer>, pagination: Pagination) -> Self {
        players.truncate(pagination.limit as usize);
        Self {
            players,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn player(position: i32) -> RankingPlayer {
        RankingPlayer {
            id: format!("p-{position}"),
            name: Some("Ana".into()),
            surname: None,
            avatar_url: None,
            trend: Trend::Same,
            matches_played: 10,
            matches_won: 6,
            total_points: 1000 - position,
            ranking_position: position,
        }
    }

    #[test]
    fn has_more_iff_current_page_below_total() {
        for total in [0u64, 1, 19, 20, 21, 99, 100, 101] {
            for limit in [1u32, 7, 20, 100] {
                for page in 1u32..=6 {
                    let p = Pagination::new(page, limit, total);
                    assert_eq!(p.has_more, p.current_page < p.total_pages, "{p:?}");
                }
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 20, 41).total_pages, 3);
        assert_eq!(Pagination::new(1, 20, 40).total_pages, 2);
        assert_eq!(Pagination::new(1, 20, 0).total_pages, 0);
        assert_eq!(Pagination::new(3, 20, 41).offset(), 40);
    }

    #[test]
    fn players_never_exceed_limit() {
        let response = RankingsResponse::new((1..=5).map(player).collect(), Pagination::new(1, 3, 5));
        assert_eq!(response.players.len(), 3);
    }

    #[test]
    fn wire_shape() {
        let response = RankingsResponse::new(vec![player(1)], Pagination::new(1, 20, 1));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["players"][0]["trend"], "same");
        assert_eq!(body["players"][0]["avatar_url"], json!(null));
        assert_eq!(
            body["pagination"],
            json!({ "currentPage": 1, "totalPages": 1, "totalPlayers": 1, "hasMore": false, "limit": 20 })
        );
    }

    #[test]
    fn trend_parses_case_insensitively() {
        assert_eq!("UP".parse::<Trend>(), Ok(Trend::Up));
        assert!("sideways".parse::<Trend>().is_err());
    }
}
