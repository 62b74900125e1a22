//! Card view model for rendered credits
//!
//! A [`CreditCard`] is what a results region actually shows for one
//! credit. All fields are display text; nothing here is markup.

use std::fmt;

use serde::Serialize;

use crate::types::Credit;

/// Placeholder for credits without a description
pub const NO_DESCRIPTION: &str = "No description available";

/// Label of the trailer link
pub const TRAILER_LABEL: &str = "Watch Trailer";

/// Heading above the streaming platforms list
pub const PLATFORMS_HEADING: &str = "Available on:";

/// Link to a trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailerLink {
    pub url: String,
    pub label: String,
}

/// One rendered credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    /// Title of the work
    pub heading: String,
    /// "{type} - {role}"
    pub subheading: String,
    /// Description, or the placeholder
    pub description: String,
    /// Present only when the credit has a non-empty trailer URL
    pub trailer: Option<TrailerLink>,
    /// Present only when the credit lists at least one platform
    pub platforms: Option<Vec<String>>,
}

impl CreditCard {
    /// Build the card for a credit
    pub fn from_credit(credit: &Credit) -> Self {
        let description = credit
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        let trailer = credit
            .trailer
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| TrailerLink {
                url: url.to_string(),
                label: TRAILER_LABEL.to_string(),
            });

        let platforms = credit
            .streaming_platforms
            .as_ref()
            .filter(|p| !p.is_empty())
            .cloned();

        Self {
            heading: credit.title.clone(),
            subheading: format!("{} - {}", credit.kind, credit.role),
            description,
            trailer,
            platforms,
        }
    }
}

impl From<&Credit> for CreditCard {
    fn from(credit: &Credit) -> Self {
        CreditCard::from_credit(credit)
    }
}

/// Build cards for a credit list, preserving order
pub fn build_cards(credits: &[Credit]) -> Vec<CreditCard> {
    credits.iter().map(CreditCard::from_credit).collect()
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", self.subheading)?;
        writeln!(f, "{}", self.description)?;
        if let Some(trailer) = &self.trailer {
            writeln!(f, "{}: {}", trailer.label, trailer.url)?;
        }
        if let Some(platforms) = &self.platforms {
            writeln!(f, "{PLATFORMS_HEADING}")?;
            for platform in platforms {
                writeln!(f, "  * {platform}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_credit() -> Credit {
        Credit {
            title: "Film A".to_string(),
            kind: "Movie".to_string(),
            role: "Director".to_string(),
            description: Some("A film.".to_string()),
            trailer: Some("https://www.youtube.com/watch?v=abc".to_string()),
            streaming_platforms: Some(vec!["Netflix".to_string(), "Hulu".to_string()]),
        }
    }

    #[test]
    fn test_card_minimal_credit() {
        let card = CreditCard::from_credit(&Credit::new("Film A", "movie", "Director"));

        assert_eq!(card.heading, "Film A");
        assert_eq!(card.subheading, "movie - Director");
        assert_eq!(card.description, "No description available");
        assert_eq!(card.trailer, None);
        assert_eq!(card.platforms, None);
    }

    #[test]
    fn test_card_full_credit() {
        let card = CreditCard::from_credit(&full_credit());

        assert_eq!(card.description, "A film.");
        assert_eq!(
            card.trailer,
            Some(TrailerLink {
                url: "https://www.youtube.com/watch?v=abc".to_string(),
                label: "Watch Trailer".to_string(),
            })
        );
        assert_eq!(
            card.platforms,
            Some(vec!["Netflix".to_string(), "Hulu".to_string()])
        );
    }

    #[test]
    fn test_card_empty_optionals_are_hidden() {
        let credit = Credit {
            description: Some(String::new()),
            trailer: Some(String::new()),
            streaming_platforms: Some(vec![]),
            ..Credit::new("Show B", "TV Show", "Host")
        };
        let card = CreditCard::from_credit(&credit);

        assert_eq!(card.description, NO_DESCRIPTION);
        assert_eq!(card.trailer, None);
        assert_eq!(card.platforms, None);
    }

    #[test]
    fn test_build_cards_preserves_order() {
        let credits = vec![
            Credit::new("Zeta", "Movie", "Lead"),
            Credit::new("Alpha", "Movie", "Cameo"),
            Credit::new("Mu", "TV Show", "Guest"),
        ];
        let headings: Vec<_> = build_cards(&credits).into_iter().map(|c| c.heading).collect();
        assert_eq!(headings, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_card_text_keeps_markup_literal() {
        let card = CreditCard::from_credit(&Credit::new("<b>Bold</b>", "Movie", "Lead"));
        assert!(card.to_string().starts_with("<b>Bold</b>\n"));
    }

    #[test]
    fn test_card_display() {
        let text = CreditCard::from_credit(&full_credit()).to_string();
        assert_eq!(
            text,
            "Film A\n\
             Movie - Director\n\
             A film.\n\
             Watch Trailer: https://www.youtube.com/watch?v=abc\n\
             Available on:\n  \
             * Netflix\n  \
             * Hulu\n"
        );
    }

    #[test]
    fn test_card_serialization_shape() {
        let card = CreditCard::from_credit(&Credit::new("Film A", "movie", "Director"));
        let value = serde_json::to_value(&card).expect("Serialization should succeed");
        assert_eq!(value["heading"], "Film A");
        assert_eq!(value["subheading"], "movie - Director");
        assert!(value["trailer"].is_null());
        assert!(value["platforms"].is_null());
    }
}
